//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

/// (key, default, description). An empty default means "derived at load time".
const DEFS: &[DefTuple] = &[
    ("FRAMEFINDER_DATA_DIR", "", "Data directory (defaults to ~/.framefinder)"),
    ("FRAMEFINDER_FONT_DIR", "", "Custom font directory (defaults to <data dir>/fonts)"),
    ("FRAMEFINDER_OUTPUT_DIR", ".", "Directory that rendered images are written to"),
    ("FRAMEFINDER_DEFAULT_FORMAT", "desktop", "Layout used when --format is not given"),
    ("FRAMEFINDER_INCLUDE_PHOTO", "true", "Place the user photo in the share image"),
    (
        "FRAMEFINDER_SHARE_BASE_URL",
        "https://framefinder.com",
        "Link included in the share caption",
    ),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Setting keys in declaration order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}
