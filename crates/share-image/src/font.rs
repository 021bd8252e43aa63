//! Font faces used for share-image text.

use std::fmt;

use ab_glyph::FontArc;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::FontError;

/// Font weight requested by a text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Regular and bold faces. Cloning is cheap (faces are reference counted).
#[derive(Clone)]
pub struct FontSet {
    regular: FontArc,
    bold: FontArc,
}

impl FontSet {
    /// Build a font set from TTF/OTF data.
    ///
    /// Without a bold face, bold text falls back to the regular face.
    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self, FontError> {
        let regular = FontArc::try_from_vec(regular).map_err(|_| FontError::InvalidFont)?;
        let bold = match bold {
            Some(data) => FontArc::try_from_vec(data).map_err(|_| FontError::InvalidFont)?,
            None => regular.clone(),
        };
        Ok(Self { regular, bold })
    }

    /// Load the first usable regular and bold faces from the system font
    /// locations.
    pub fn from_system() -> Result<Self, FontError> {
        let regular = read_first(system_font_candidates(FontWeight::Regular))
            .ok_or(FontError::NotFound)?;
        let bold = read_first(system_font_candidates(FontWeight::Bold));
        if bold.is_none() {
            debug!("No system bold face found, using regular face for bold text");
        }
        Self::from_bytes(regular, bold)
    }

    pub fn face(&self, weight: FontWeight) -> &FontArc {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

impl fmt::Debug for FontSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSet").finish_non_exhaustive()
    }
}

fn read_first(paths: &[&str]) -> Option<Vec<u8>> {
    for path in paths {
        if let Ok(data) = std::fs::read(path) {
            info!(path = %path, "Using system font");
            return Some(data);
        }
    }
    None
}

/// Well-known system font paths, most preferred first.
pub fn system_font_candidates(weight: FontWeight) -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        match weight {
            FontWeight::Regular => &[
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "/System/Library/Fonts/Supplemental/Helvetica.ttf",
                "/Library/Fonts/Arial.ttf",
            ],
            FontWeight::Bold => &[
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "/Library/Fonts/Arial Bold.ttf",
            ],
        }
    }
    #[cfg(target_os = "windows")]
    {
        match weight {
            FontWeight::Regular => &["C:\\Windows\\Fonts\\segoeui.ttf", "C:\\Windows\\Fonts\\arial.ttf"],
            FontWeight::Bold => &["C:\\Windows\\Fonts\\segoeuib.ttf", "C:\\Windows\\Fonts\\arialbd.ttf"],
        }
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match weight {
            FontWeight::Regular => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            ],
            FontWeight::Bold => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
            ],
        }
    }
}
