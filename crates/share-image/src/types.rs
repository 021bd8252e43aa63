//! Classification result model consumed by the compositor.
//!
//! Field names serialize in camelCase so the JSON payload produced by the
//! web analysis flow deserializes unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// The six face-shape categories assigned by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShapeKind {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Triangle,
}

impl FaceShapeKind {
    pub const ALL: [FaceShapeKind; 6] = [
        FaceShapeKind::Oval,
        FaceShapeKind::Round,
        FaceShapeKind::Square,
        FaceShapeKind::Heart,
        FaceShapeKind::Diamond,
        FaceShapeKind::Triangle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FaceShapeKind::Oval => "oval",
            FaceShapeKind::Round => "round",
            FaceShapeKind::Square => "square",
            FaceShapeKind::Heart => "heart",
            FaceShapeKind::Diamond => "diamond",
            FaceShapeKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for FaceShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceShape {
    pub name: FaceShapeKind,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// A recommended frame style. `popularity` is an integer percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecommendation {
    pub name: String,
    pub description: String,
    pub popularity: u8,
}

/// Output of the face-shape analysis.
///
/// `recommendations` is in significance order (best match first); the
/// compositor never re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub face_shape: FaceShape,
    pub confidence: f64,
    #[serde(default)]
    pub recommendations: Vec<FrameRecommendation>,
}

impl ClassificationResult {
    /// Confidence as a whole percentage, clamped to 0..=100.
    pub fn confidence_percent(&self) -> u32 {
        confidence_percent(self.confidence)
    }

    /// The first `n` recommendations, or fewer if the list is shorter.
    pub fn top_recommendations(&self, n: usize) -> &[FrameRecommendation] {
        &self.recommendations[..n.min(self.recommendations.len())]
    }
}

/// `round(clamp(confidence, 0, 1) * 100)`. NaN is treated as zero.
pub fn confidence_percent(confidence: f64) -> u32 {
    let clamped = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    (clamped * 100.0).round() as u32
}

/// Layout variant of the share image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ShareFormat {
    /// 1200x630, general social platforms.
    Desktop,
    /// 1080x1080, square-format platforms.
    Mobile,
}

impl ShareFormat {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ShareFormat::Desktop => (1200, 630),
            ShareFormat::Mobile => (1080, 1080),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShareFormat::Desktop => "desktop",
            ShareFormat::Mobile => "mobile",
        }
    }
}

impl FromStr for ShareFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(ShareFormat::Desktop),
            "mobile" => Ok(ShareFormat::Mobile),
            _ => Err(RenderError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for ShareFormat {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ShareFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
