//! User photo intake: source references, validation limits and decoding.

use std::borrow::Cow;
use std::future::Future;
use std::io::Cursor;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageDecoder as _;
use image::metadata::Orientation;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use crate::error::PhotoError;

/// Maximum accepted photo payload (10 MiB).
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum accepted photo width or height.
pub const MAX_PHOTO_DIMENSION: u32 = 4096;

/// Minimum accepted photo width and height.
pub const MIN_PHOTO_DIMENSION: u32 = 200;

const ALLOWED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// An opaque reference to a user photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Raw encoded bytes (an uploaded blob or camera snapshot).
    Bytes(Vec<u8>),
    /// An encoded image on disk.
    Path(PathBuf),
    /// A `data:image/...;base64,` URI.
    DataUrl(String),
}

impl PhotoSource {
    /// Interpret a user-supplied string as a data URI or a file path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("data:") {
            PhotoSource::DataUrl(trimmed.to_string())
        } else {
            PhotoSource::Path(PathBuf::from(trimmed))
        }
    }
}

/// Asynchronously turn a [`PhotoSource`] into a drawable bitmap.
pub trait PhotoDecoder {
    fn decode(
        &self,
        source: &PhotoSource,
    ) -> impl Future<Output = Result<DynamicImage, PhotoError>> + Send;
}

/// Default decoder backed by the `image` crate.
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_bytes: u64,
    min_dimension: u32,
    max_dimension: u32,
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self {
            max_bytes: MAX_PHOTO_BYTES,
            min_dimension: MIN_PHOTO_DIMENSION,
            max_dimension: MAX_PHOTO_DIMENSION,
        }
    }
}

impl ImageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override the payload size limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Builder: override the minimum width/height.
    pub fn with_min_dimension(mut self, min_dimension: u32) -> Self {
        self.min_dimension = min_dimension;
        self
    }

    /// Builder: override the width/height limit.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    async fn read_source<'a>(&self, source: &'a PhotoSource) -> Result<Cow<'a, [u8]>, PhotoError> {
        match source {
            PhotoSource::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            PhotoSource::Path(path) => {
                let size = tokio::fs::metadata(path).await?.len();
                self.check_size(size)?;
                debug!(path = %path.display(), size, "Reading photo from disk");
                Ok(Cow::Owned(tokio::fs::read(path).await?))
            }
            PhotoSource::DataUrl(url) => {
                let payload = data_url_payload(url)?;
                // Four base64 characters carry three bytes.
                self.check_size(payload.len() as u64 / 4 * 3)?;
                Ok(Cow::Owned(STANDARD.decode(payload)?))
            }
        }
    }

    /// Validate and decode an encoded photo, rotated upright per its EXIF
    /// orientation. Dimension limits apply to the upright size.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<DynamicImage, PhotoError> {
        self.check_size(bytes.len() as u64)?;

        let format = image::guess_format(bytes).map_err(|_| PhotoError::UnsupportedFormat)?;
        if !ALLOWED_FORMATS.contains(&format) {
            return Err(PhotoError::UnsupportedFormat);
        }

        let mut decoder = ImageReader::with_format(Cursor::new(bytes), format).into_decoder()?;
        let orientation = decoder.orientation()?;
        let (stored_width, stored_height) = decoder.dimensions();
        let (width, height) = if swaps_axes(orientation) {
            (stored_height, stored_width)
        } else {
            (stored_width, stored_height)
        };
        self.check_dimensions(width, height)?;

        let mut image = DynamicImage::from_decoder(decoder)?;
        image.apply_orientation(orientation);
        debug!(?format, ?orientation, width, height, "Decoded photo");
        Ok(image)
    }

    fn check_dimensions(&self, width: u32, height: u32) -> Result<(), PhotoError> {
        if width > self.max_dimension || height > self.max_dimension {
            return Err(PhotoError::DimensionsTooLarge {
                width,
                height,
                max: self.max_dimension,
            });
        }
        if width < self.min_dimension || height < self.min_dimension {
            return Err(PhotoError::DimensionsTooSmall {
                width,
                height,
                min: self.min_dimension,
            });
        }
        Ok(())
    }

    fn check_size(&self, size: u64) -> Result<(), PhotoError> {
        if size > self.max_bytes {
            return Err(PhotoError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

impl PhotoDecoder for ImageDecoder {
    async fn decode(&self, source: &PhotoSource) -> Result<DynamicImage, PhotoError> {
        let bytes = self.read_source(source).await?;
        self.decode_bytes(&bytes)
    }
}

fn swaps_axes(orientation: Orientation) -> bool {
    matches!(
        orientation,
        Orientation::Rotate90
            | Orientation::Rotate270
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH
    )
}

/// Extract the base64 payload of an `image/*` data URI.
fn data_url_payload(url: &str) -> Result<&str, PhotoError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or(PhotoError::InvalidDataUrl("missing 'data:' scheme"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or(PhotoError::InvalidDataUrl("missing ',' separator"))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or(PhotoError::InvalidDataUrl("only base64 payloads are supported"))?;
    if !mime.starts_with("image/") {
        return Err(PhotoError::InvalidDataUrl("not an image media type"));
    }
    Ok(payload.trim())
}
