//! Runtime configuration: defaults overridden by `FRAMEFINDER_*` variables.

use std::path::PathBuf;

use share_image::ShareFormat;
use tracing::warn;

use super::SettingInfo;
use super::defaults::{DEFAULT_SETTINGS, get_default, setting_keys};
use super::validation::validate_setting;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub font_dir: PathBuf,
    pub output_dir: PathBuf,
    pub default_format: ShareFormat,
    pub include_photo: bool,
    pub share_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing, blank or invalid values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String { resolve(&lookup, key) };

        let data_dir = non_empty_path(&g("FRAMEFINDER_DATA_DIR")).unwrap_or_else(default_data_dir);
        let font_dir = non_empty_path(&g("FRAMEFINDER_FONT_DIR")).unwrap_or_else(|| data_dir.join("fonts"));

        Self {
            font_dir,
            output_dir: PathBuf::from(g("FRAMEFINDER_OUTPUT_DIR")),
            default_format: g("FRAMEFINDER_DEFAULT_FORMAT")
                .parse()
                .unwrap_or(ShareFormat::Desktop),
            include_photo: g("FRAMEFINDER_INCLUDE_PHOTO") == "true",
            share_base_url: g("FRAMEFINDER_SHARE_BASE_URL"),
            data_dir,
        }
    }

    /// Resolved value of every known setting.
    pub fn settings(&self) -> Vec<SettingInfo> {
        setting_keys()
            .map(|key| {
                let value = match key {
                    "FRAMEFINDER_DATA_DIR" => self.data_dir.display().to_string(),
                    "FRAMEFINDER_FONT_DIR" => self.font_dir.display().to_string(),
                    "FRAMEFINDER_OUTPUT_DIR" => self.output_dir.display().to_string(),
                    "FRAMEFINDER_DEFAULT_FORMAT" => self.default_format.to_string(),
                    "FRAMEFINDER_INCLUDE_PHOTO" => self.include_photo.to_string(),
                    "FRAMEFINDER_SHARE_BASE_URL" => self.share_base_url.clone(),
                    _ => String::new(),
                };
                let def = &DEFAULT_SETTINGS[key];
                SettingInfo {
                    key: key.to_string(),
                    value,
                    default: def.default.to_string(),
                    description: def.description.to_string(),
                }
            })
            .collect()
    }
}

fn resolve(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    let default = get_default(key).unwrap_or_default();
    let Some(raw) = lookup(key) else {
        return default.to_string();
    };
    let value = raw.trim();
    if value.is_empty() {
        return default.to_string();
    }
    match validate_setting(key, value) {
        Ok(()) => value.to_string(),
        Err(msg) => {
            warn!(key, value, "Invalid setting ({msg}), using default");
            default.to_string()
        }
    }
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

/// `~/.framefinder`, or `./.framefinder` when no home directory is known.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".framefinder")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.default_format, ShareFormat::Desktop);
        assert!(config.include_photo);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.share_base_url, "https://framefinder.com");
        assert!(config.data_dir.ends_with(".framefinder"));
        assert_eq!(config.font_dir, config.data_dir.join("fonts"));
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = config_from(&[
            ("FRAMEFINDER_DATA_DIR", "/srv/ff"),
            ("FRAMEFINDER_DEFAULT_FORMAT", "mobile"),
            ("FRAMEFINDER_INCLUDE_PHOTO", "false"),
            ("FRAMEFINDER_OUTPUT_DIR", "/tmp/out"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/ff"));
        assert_eq!(config.font_dir, PathBuf::from("/srv/ff/fonts"));
        assert_eq!(config.default_format, ShareFormat::Mobile);
        assert!(!config.include_photo);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("FRAMEFINDER_DEFAULT_FORMAT", "billboard"),
            ("FRAMEFINDER_INCLUDE_PHOTO", "maybe"),
            ("FRAMEFINDER_SHARE_BASE_URL", "not a url"),
            ("FRAMEFINDER_OUTPUT_DIR", "   "),
        ]);
        assert_eq!(config.default_format, ShareFormat::Desktop);
        assert!(config.include_photo);
        assert_eq!(config.share_base_url, "https://framefinder.com");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn settings_report_resolved_values() {
        let config = config_from(&[("FRAMEFINDER_DEFAULT_FORMAT", "mobile")]);
        let settings = config.settings();
        assert_eq!(settings.len(), 6);
        let format = settings
            .iter()
            .find(|s| s.key == "FRAMEFINDER_DEFAULT_FORMAT")
            .unwrap();
        assert_eq!(format.value, "mobile");
        assert_eq!(format.default, "desktop");
    }
}
