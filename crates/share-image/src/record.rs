//! A [`Canvas`] that records drawing operations instead of painting.
//!
//! Text is measured with a fixed advance per character, so layouts can be
//! inspected (and dumped as JSON) without any font installed.

use image::{DynamicImage, Rgba};
use serde::Serialize;

use crate::canvas::{Canvas, LinearGradient, RoundedRect, TextAlign, TextStyle};
use crate::font::FontWeight;

/// Character advance as a fraction of the font size.
pub const DEFAULT_ADVANCE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Gradient {
        start: (f32, f32),
        end: (f32, f32),
        from: [u8; 4],
        to: [u8; 4],
    },
    FillRect {
        rect: RoundedRect,
        color: [u8; 4],
    },
    StrokeRect {
        rect: RoundedRect,
        color: [u8; 4],
        line_width: f32,
    },
    Image {
        rect: RoundedRect,
        source_width: u32,
        source_height: u32,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        size: f32,
        weight: FontWeight,
        align: TextAlign,
        color: [u8; 4],
    },
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    advance: f32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            advance: DEFAULT_ADVANCE,
            ops: Vec::new(),
        }
    }

    /// Builder: set the per-character advance (fraction of font size).
    pub fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// All text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// First text op whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text: t, .. } if t == text))
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        self.ops.push(DrawOp::Gradient {
            start: gradient.start,
            end: gradient.end,
            from: gradient.from.0,
            to: gradient.to.0,
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.0,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Rgba<u8>, line_width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color: color.0,
            line_width,
        });
    }

    fn draw_image_clipped(&mut self, image: &DynamicImage, rect: RoundedRect) {
        self.ops.push(DrawOp::Image {
            rect,
            source_width: image.width(),
            source_height: image.height(),
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * self.advance
    }

    fn fill_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            baseline,
            size: style.size,
            weight: style.weight,
            align,
            color: style.color.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::rgb;

    #[test]
    fn measures_with_fixed_advance() {
        let canvas = RecordingCanvas::new(100, 100).with_advance(1.0);
        let style = TextStyle::regular(10.0, rgb(0xffffff));
        assert_eq!(canvas.measure_text("abcd", &style), 40.0);
    }

    #[test]
    fn records_text_and_serializes_tagged() {
        let mut canvas = RecordingCanvas::new(100, 100);
        canvas.fill_text(
            "Oval",
            5.0,
            20.0,
            &TextStyle::bold(20.0, rgb(0xffffff)),
            TextAlign::Left,
        );
        assert!(canvas.contains_text("Ova"));
        assert!(canvas.find_text("Oval").is_some());
        let json = serde_json::to_value(canvas.ops()).unwrap();
        assert_eq!(json[0]["op"], "text");
        assert_eq!(json[0]["weight"], "bold");
        assert_eq!(json[0]["align"], "left");
    }
}
