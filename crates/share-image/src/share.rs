//! Caption and file-name helpers for offering a share image to the user.

use crate::types::ClassificationResult;

pub const SHARE_HASHTAGS: &str = "#FrameFinder #FaceShape #Eyewear #AI #PersonalStyle";

/// Social caption announcing the result, followed by the hashtags.
pub fn share_caption(result: &ClassificationResult, base_url: &str) -> String {
    format!(
        "I just discovered my face shape is {}! Check out FrameFinder for AI-powered face shape \
         analysis and personalized eyewear recommendations. {} {}",
        result.face_shape.display_name,
        base_url.trim_end_matches('/'),
        SHARE_HASHTAGS
    )
}

/// Suggested download name, e.g. `framefinder-oval-analysis.png`.
pub fn download_file_name(result: &ClassificationResult) -> String {
    format!("framefinder-{}-analysis.png", result.face_shape.name.as_str())
}
