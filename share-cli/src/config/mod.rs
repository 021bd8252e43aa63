//! Configuration management: defaults, validation, loading from the environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;

use serde::Serialize;

/// A resolved setting, as printed by `--print-config`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
    pub default: String,
    pub description: String,
}
