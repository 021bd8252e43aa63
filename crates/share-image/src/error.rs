//! Error types for share-image rendering.

/// Errors that abort a render. No partial image is returned.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid share format '{0}' (expected 'desktop' or 'mobile')")]
    InvalidFormat(String),

    #[error("Invalid drawing surface size {width}x{height}")]
    Surface { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors from loading a user photo.
///
/// The compositor never propagates these; a failed photo is logged and the
/// photo region is left empty.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(&'static str),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Photo too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Unsupported photo format (only JPEG, PNG and WebP)")]
    UnsupportedFormat,

    #[error("Photo dimensions {width}x{height} exceed the {max}px limit")]
    DimensionsTooLarge { width: u32, height: u32, max: u32 },

    #[error("Photo dimensions {width}x{height} are below the {min}px minimum")]
    DimensionsTooSmall { width: u32, height: u32, min: u32 },

    #[error("Failed to decode photo: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors from loading font data.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font data (only TTF/OTF supported)")]
    InvalidFont,

    #[error("No usable font found (install system fonts or configure a custom font)")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
