//! FrameFinder share-image command-line front end.

pub mod cli;
pub mod config;
pub mod services;

use config::AppConfig;

fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Load `.env`, then resolve configuration from the environment.
pub fn init_foundation() -> AppConfig {
    load_dotenv();
    let config = AppConfig::load();
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        font_dir = %config.font_dir.display(),
        format = %config.default_format,
        include_photo = config.include_photo,
        "Configuration loaded"
    );
    config
}
