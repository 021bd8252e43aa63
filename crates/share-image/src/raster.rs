//! Pixel-buffer implementation of [`Canvas`].

use std::io::Cursor;

use ab_glyph::PxScale;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::debug;

use crate::canvas::{Canvas, LinearGradient, RoundedRect, TextAlign, TextStyle};
use crate::compose;
use crate::error::{RenderError, Result};
use crate::font::FontSet;
use crate::text;

/// An RGBA surface with fonts attached. One per render; never shared.
pub struct RasterCanvas {
    image: RgbaImage,
    fonts: FontSet,
}

impl RasterCanvas {
    /// Allocate a transparent surface. Zero-sized surfaces are rejected.
    pub fn new(width: u32, height: u32, fonts: FontSet) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Surface { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            fonts,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.image.write_to(&mut cursor, ImageFormat::Png)?;
        let bytes = cursor.into_inner();
        debug!(
            width = self.image.width(),
            height = self.image.height(),
            bytes = bytes.len(),
            "Encoded share image"
        );
        Ok(bytes)
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        compose::fill_gradient(&mut self.image, gradient);
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>) {
        compose::fill_rounded_rect(&mut self.image, rect, color);
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>, line_width: f32) {
        compose::stroke_rounded_rect(&mut self.image, rect, color, line_width);
    }

    fn draw_image_clipped(&mut self, image: &DynamicImage, rect: RoundedRect) {
        let width = rect.width.round().max(1.0) as u32;
        let height = rect.height.round().max(1.0) as u32;
        let resized = image.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();
        compose::overlay_clipped(&mut self.image, &resized, rect);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        let font = self.fonts.face(style.weight);
        text::measure_text_width(font, PxScale::from(style.size), text)
    }

    fn fill_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle, align: TextAlign) {
        let font = self.fonts.face(style.weight);
        let scale = PxScale::from(style.size);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - text::measure_text_width(font, scale, text) / 2.0,
        };
        let top = baseline - text::ascent(font, scale);
        draw_text_mut(
            &mut self.image,
            style.color,
            left.round() as i32,
            top.round() as i32,
            scale,
            font,
            text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::rgb;

    fn fonts() -> Option<FontSet> {
        match FontSet::from_system() {
            Ok(fonts) => Some(fonts),
            Err(e) => {
                eprintln!("skipping raster test: {e}");
                None
            }
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let Some(fonts) = fonts() else { return };
        let err = RasterCanvas::new(0, 630, fonts).err().unwrap();
        assert!(matches!(err, RenderError::Surface { width: 0, height: 630 }));
    }

    #[test]
    fn text_is_painted_near_its_baseline() {
        let Some(fonts) = fonts() else { return };
        let mut canvas = RasterCanvas::new(200, 80, fonts).unwrap();
        let style = TextStyle::bold(32.0, rgb(0xffffff));
        canvas.fill_text("FF", 10.0, 50.0, &style, TextAlign::Left);
        let painted = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(_, y, _)| y)
            .collect::<Vec<_>>();
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|&y| y <= 52));
        assert!(painted.iter().any(|&y| y < 40));
    }

    #[test]
    fn centered_text_straddles_anchor() {
        let Some(fonts) = fonts() else { return };
        let mut canvas = RasterCanvas::new(200, 60, fonts).unwrap();
        let style = TextStyle::regular(24.0, rgb(0xffffff));
        canvas.fill_text("MMMM", 100.0, 40.0, &style, TextAlign::Center);
        let xs = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, _, _)| x)
            .collect::<Vec<_>>();
        assert!(xs.iter().any(|&x| x < 100));
        assert!(xs.iter().any(|&x| x > 100));
    }

    #[test]
    fn png_encoding_round_trips_dimensions() {
        let Some(fonts) = fonts() else { return };
        let canvas = RasterCanvas::new(32, 16, fonts).unwrap();
        let png = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }
}
