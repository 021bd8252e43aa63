//! Font discovery: a custom font directory first, then system fonts.

use std::path::{Path, PathBuf};

use share_image::{FontError, FontSet};

const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024; // 50MB
const VALID_EXTENSIONS: &[&str] = &[".ttf", ".otf"];

#[derive(Debug, thiserror::Error)]
pub enum FontServiceError {
    #[error("Font file too large (max 50MB): {0}")]
    FileTooLarge(PathBuf),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Custom font files found in the font directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFonts {
    pub regular: PathBuf,
    pub bold: Option<PathBuf>,
}

#[derive(Clone)]
pub struct FontService {
    font_dir: PathBuf,
}

impl FontService {
    pub fn new(font_dir: PathBuf) -> Self {
        Self { font_dir }
    }

    /// Find installed custom font files, if any.
    ///
    /// A file whose name contains "bold" is used as the bold face; the first
    /// other font file (by name) is the regular face.
    pub fn find_custom_fonts(&self) -> Option<CustomFonts> {
        let entries = std::fs::read_dir(&self.font_dir).ok()?;
        let mut fonts: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_font_extension(path))
            .collect();
        fonts.sort();

        let is_bold = |path: &PathBuf| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|s| s.to_lowercase().contains("bold"))
        };
        let bold = fonts.iter().find(|p| is_bold(p)).cloned();
        let regular = fonts.iter().find(|p| !is_bold(p)).cloned().or_else(|| bold.clone())?;
        Some(CustomFonts { regular, bold })
    }

    /// Load the custom fonts, falling back to system fonts.
    pub fn load_font_set(&self) -> Result<FontSet, FontServiceError> {
        match self.find_custom_fonts() {
            Some(custom) => {
                tracing::info!(
                    regular = %custom.regular.display(),
                    bold = ?custom.bold,
                    "Using custom fonts"
                );
                let regular = read_font(&custom.regular)?;
                let bold = custom.bold.as_deref().map(read_font).transpose()?;
                Ok(FontSet::from_bytes(regular, bold)?)
            }
            None => {
                tracing::debug!(dir = %self.font_dir.display(), "No custom font, using system fonts");
                Ok(FontSet::from_system()?)
            }
        }
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .is_some_and(|ext| VALID_EXTENSIONS.contains(&ext.as_str()))
}

fn read_font(path: &Path) -> Result<Vec<u8>, FontServiceError> {
    if std::fs::metadata(path)?.len() > MAX_FONT_SIZE {
        return Err(FontServiceError::FileTooLarge(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}
