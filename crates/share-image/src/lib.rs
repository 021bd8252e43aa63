//! Shareable result-image rendering for FrameFinder.
//!
//! Turns a face-shape classification result, plus an optional user photo,
//! into a PNG sized for social platforms: 1200x630 for the desktop layout
//! and 1080x1080 for the square mobile layout.

pub mod canvas;
pub mod compose;
pub mod compositor;
pub mod error;
pub mod font;
pub mod photo;
pub mod raster;
pub mod record;
pub mod share;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use canvas::{Canvas, LinearGradient, RoundedRect, TextAlign, TextStyle};
pub use compositor::{
    Compositor, PhotoOutcome, RenderRequest, RenderedImage, ShareContent, draw_share_image,
};
pub use error::{FontError, PhotoError, RenderError};
pub use font::{FontSet, FontWeight};
pub use photo::{ImageDecoder, PhotoDecoder, PhotoSource};
pub use raster::RasterCanvas;
pub use record::{DrawOp, RecordingCanvas};
pub use share::{download_file_name, share_caption};
pub use types::{ClassificationResult, FaceShape, FaceShapeKind, FrameRecommendation, ShareFormat};
