//! Shareable result-image compositor.
//!
//! A [`Compositor`] holds only immutable fonts and a stateless photo
//! decoder. Each [`Compositor::render`] call allocates its own surface,
//! awaits the photo decode, draws one of the two layouts and encodes a PNG.

mod desktop;
mod mobile;


use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, Rgba};
use tracing::{debug, info, warn};

use crate::canvas::{Canvas, LinearGradient, RoundedRect, TextAlign, TextStyle, rgb};
use crate::error::{PhotoError, Result};
use crate::font::FontSet;
use crate::photo::{ImageDecoder, PhotoDecoder, PhotoSource};
use crate::raster::RasterCanvas;
use crate::text;
use crate::types::{ClassificationResult, ShareFormat};

pub(crate) const BRAND_NAME: &str = "FrameFinder";

const GRADIENT_FROM: Rgba<u8> = rgb(0x0f0f23);
const GRADIENT_TO: Rgba<u8> = rgb(0x1a1a2e);
pub(crate) const WHITE: Rgba<u8> = rgb(0xffffff);
pub(crate) const GRAY_300: Rgba<u8> = rgb(0xd1d5db);
pub(crate) const GRAY_400: Rgba<u8> = rgb(0x9ca3af);
pub(crate) const GRAY_500: Rgba<u8> = rgb(0x6b7280);
pub(crate) const BORDER: Rgba<u8> = rgb(0x374151);
pub(crate) const PILL_BLUE: Rgba<u8> = rgb(0x3b82f6);
pub(crate) const MATCH_GREEN: Rgba<u8> = rgb(0x10b981);

/// A single render invocation.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub result: ClassificationResult,
    pub user_photo: Option<PhotoSource>,
    pub format: ShareFormat,
    /// When set but `user_photo` is absent, rendering proceeds without one.
    pub include_photo: bool,
}

impl RenderRequest {
    pub fn new(result: ClassificationResult, format: ShareFormat) -> Self {
        Self {
            result,
            user_photo: None,
            format,
            include_photo: true,
        }
    }

    /// Builder: attach a user photo.
    pub fn with_photo(mut self, photo: PhotoSource) -> Self {
        self.user_photo = Some(photo);
        self
    }

    /// Builder: set the include-photo flag.
    pub fn with_include_photo(mut self, include_photo: bool) -> Self {
        self.include_photo = include_photo;
        self
    }
}

/// A finished share image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: ShareFormat,
}

impl RenderedImage {
    /// `data:image/png;base64,...` form of the image.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Result of resolving the request's photo.
#[derive(Debug)]
pub enum PhotoOutcome {
    /// `include_photo` was false.
    NotRequested,
    /// A photo was requested but none was supplied.
    Missing,
    /// Decoding failed; the photo region stays empty.
    Failed(PhotoError),
    Loaded(DynamicImage),
}

impl PhotoOutcome {
    pub fn image(&self) -> Option<&DynamicImage> {
        match self {
            PhotoOutcome::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

/// Resolve the request's photo. Decode failures are logged, not returned.
pub async fn load_photo<D: PhotoDecoder>(decoder: &D, request: &RenderRequest) -> PhotoOutcome {
    if !request.include_photo {
        return PhotoOutcome::NotRequested;
    }
    let Some(source) = request.user_photo.as_ref() else {
        return PhotoOutcome::Missing;
    };
    match decoder.decode(source).await {
        Ok(image) => PhotoOutcome::Loaded(image),
        Err(e) => {
            warn!(error = %e, "Failed to load user photo, rendering without it");
            PhotoOutcome::Failed(e)
        }
    }
}

/// Everything a layout needs to draw.
#[derive(Debug, Clone, Copy)]
pub struct ShareContent<'a> {
    pub result: &'a ClassificationResult,
    /// The decoded photo, if any.
    pub photo: Option<&'a DynamicImage>,
    /// Selects the results origin; a failed decode does not reflow layout.
    pub include_photo: bool,
}

/// Draw the full share layout for `format` onto `canvas`.
pub fn draw_share_image(canvas: &mut impl Canvas, format: ShareFormat, content: &ShareContent<'_>) {
    paint_background(canvas);
    match format {
        ShareFormat::Desktop => desktop::draw(canvas, content),
        ShareFormat::Mobile => mobile::draw(canvas, content),
    }
}

pub struct Compositor<D = ImageDecoder> {
    fonts: FontSet,
    decoder: D,
}

impl Compositor<ImageDecoder> {
    pub fn new(fonts: FontSet) -> Self {
        Self::with_decoder(fonts, ImageDecoder::default())
    }
}

impl<D: PhotoDecoder> Compositor<D> {
    pub fn with_decoder(fonts: FontSet, decoder: D) -> Self {
        Self { fonts, decoder }
    }

    /// Render a share image.
    ///
    /// Fails only when the surface cannot be created or the PNG cannot be
    /// encoded. Photo problems are recovered locally.
    pub async fn render(&self, request: RenderRequest) -> Result<RenderedImage> {
        let format = request.format;
        let (width, height) = format.dimensions();
        let photo = load_photo(&self.decoder, &request).await;
        debug!(%format, width, height, photo = photo_state(&photo), "Rendering share image");

        let mut canvas = RasterCanvas::new(width, height, self.fonts.clone())?;
        let content = ShareContent {
            result: &request.result,
            photo: photo.image(),
            include_photo: request.include_photo,
        };
        draw_share_image(&mut canvas, format, &content);
        let png = canvas.encode_png()?;

        info!(
            %format,
            shape = %request.result.face_shape.name,
            bytes = png.len(),
            "Share image rendered"
        );
        Ok(RenderedImage {
            png,
            width,
            height,
            format,
        })
    }
}

fn photo_state(outcome: &PhotoOutcome) -> &'static str {
    match outcome {
        PhotoOutcome::NotRequested => "not_requested",
        PhotoOutcome::Missing => "missing",
        PhotoOutcome::Failed(_) => "failed",
        PhotoOutcome::Loaded(_) => "loaded",
    }
}

/// Diagonal gradient from the top-left to the bottom-right corner.
pub fn background_gradient(width: u32, height: u32) -> LinearGradient {
    LinearGradient {
        start: (0.0, 0.0),
        end: (width as f32, height as f32),
        from: GRADIENT_FROM,
        to: GRADIENT_TO,
    }
}

fn paint_background(canvas: &mut impl Canvas) {
    let gradient = background_gradient(canvas.width(), canvas.height());
    canvas.fill_gradient(&gradient);
}

/// Clipped photo plus its border, sharing one rounded-rect path.
pub(crate) fn draw_photo(canvas: &mut impl Canvas, photo: &DynamicImage, frame: RoundedRect, border: f32) {
    canvas.draw_image_clipped(photo, frame);
    canvas.stroke_rounded_rect(frame, BORDER, border);
}

/// Word-wrap `text` and draw it line by line from the first baseline.
/// Returns the number of lines drawn.
pub(crate) fn draw_wrapped(
    canvas: &mut impl Canvas,
    text: &str,
    (x, baseline): (f32, f32),
    max_width: f32,
    line_height: f32,
    style: &TextStyle,
    align: TextAlign,
) -> usize {
    let lines = text::wrap_lines(text, max_width, |s| canvas.measure_text(s, style));
    for (i, line) in lines.iter().enumerate() {
        canvas.fill_text(line, x, baseline + i as f32 * line_height, style, align);
    }
    lines.len()
}
