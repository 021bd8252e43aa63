//! Setting value validation.

use regex::Regex;
use share_image::ShareFormat;
use std::sync::LazyLock;

static RE_HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[A-Za-z0-9.-]+(:\d{1,5})?(/\S*)?$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "FRAMEFINDER_DEFAULT_FORMAT" => {
            if value.parse::<ShareFormat>().is_err() {
                return Err("must be 'desktop' or 'mobile'".into());
            }
        }
        "FRAMEFINDER_SHARE_BASE_URL" => {
            if !RE_HTTP_URL.is_match(value) {
                return Err("must be an http(s) URL".into());
            }
        }
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(key, "FRAMEFINDER_INCLUDE_PHOTO")
}
