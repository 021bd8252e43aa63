//! Drawing-surface abstraction shared by both share layouts.
//!
//! Layout code only talks to [`Canvas`]; [`crate::raster::RasterCanvas`]
//! paints pixels, [`crate::record::RecordingCanvas`] records operations.

use image::{DynamicImage, Rgba};
use serde::Serialize;

use crate::font::FontWeight;

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

/// A rectangle with uniformly rounded corners, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius,
        }
    }

    /// Corner radius clamped so opposite corners never overlap.
    pub fn effective_radius(&self) -> f32 {
        self.radius
            .min(self.width / 2.0)
            .min(self.height / 2.0)
            .max(0.0)
    }

    /// Signed distance from a point to the outline; negative inside.
    pub fn signed_distance(&self, px: f32, py: f32) -> f32 {
        let r = self.effective_radius();
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let qx = (px - (self.x + half_w)).abs() - (half_w - r);
        let qy = (py - (self.y + half_h)).abs() - (half_h - r);
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        outside + qx.max(qy).min(0.0) - r
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.signed_distance(px, py) <= 0.0
    }

    /// True when the axis-aligned bounds of `self` and the given box overlap.
    pub fn intersects(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
        self.x < x1 && self.x + self.width > x0 && self.y < y1 && self.y + self.height > y0
    }
}

/// Two-stop linear gradient between `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub from: Rgba<u8>,
    pub to: Rgba<u8>,
}

impl LinearGradient {
    /// Color at a point, projected onto the gradient axis and clamped to the
    /// two stops.
    pub fn color_at(&self, x: f32, y: f32) -> Rgba<u8> {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq > 0.0 {
            (((x - self.start.0) * dx + (y - self.start.1) * dy) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgba([
            lerp(self.from[0], self.to[0]),
            lerp(self.from[1], self.to[1]),
            lerp(self.from[2], self.to[2]),
            lerp(self.from[3], self.to[3]),
        ])
    }
}

/// Horizontal anchor of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Text starts at `x`.
    Left,
    /// Text is centered on `x`.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba<u8>,
}

impl TextStyle {
    pub const fn regular(size: f32, color: Rgba<u8>) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color,
        }
    }

    pub const fn bold(size: f32, color: Rgba<u8>) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            color,
        }
    }
}

/// A 2D drawing sink.
///
/// Text is positioned by its alphabetic baseline. Every shape operation
/// alpha-blends onto what is already there.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Cover the whole surface with a gradient.
    fn fill_gradient(&mut self, gradient: &LinearGradient);

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>);

    /// Stroke the outline of `rect`; the stroke straddles the path.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>, line_width: f32);

    /// Draw `image` stretched to `rect`, clipped to its rounded corners.
    fn draw_image_clipped(&mut self, image: &DynamicImage, rect: RoundedRect);

    /// Advance width of `text` in pixels.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;

    fn fill_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle, align: TextAlign);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_unpacks_channels() {
        assert_eq!(rgb(0x3b82f6), Rgba([0x3b, 0x82, 0xf6, 255]));
    }

    #[test]
    fn rounded_rect_excludes_corner_points() {
        let rect = RoundedRect::new(0.0, 0.0, 100.0, 100.0, 20.0);
        assert!(rect.contains(50.0, 50.0));
        assert!(rect.contains(1.0, 50.0));
        assert!(!rect.contains(1.0, 1.0));
        assert!(rect.contains(20.0, 1.0));
        assert!(!rect.contains(101.0, 50.0));
    }

    #[test]
    fn radius_is_clamped_to_half_the_short_side() {
        let pill = RoundedRect::new(0.0, 0.0, 200.0, 50.0, 80.0);
        assert_eq!(pill.effective_radius(), 25.0);
    }

    #[test]
    fn gradient_endpoints_match_stops() {
        let g = LinearGradient {
            start: (0.0, 0.0),
            end: (100.0, 100.0),
            from: rgb(0x000000),
            to: rgb(0xffffff),
        };
        assert_eq!(g.color_at(0.0, 0.0), rgb(0x000000));
        assert_eq!(g.color_at(100.0, 100.0), rgb(0xffffff));
        assert_eq!(g.color_at(-50.0, -50.0), rgb(0x000000));
        let mid = g.color_at(50.0, 50.0);
        assert!((127..=128).contains(&mid[0]));
    }
}
