//! Command-line interface: render a share image from a classification result.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use share_image::compositor::load_photo;
use share_image::{
    ClassificationResult, Compositor, ImageDecoder, PhotoSource, RecordingCanvas, RenderRequest,
    ShareContent, ShareFormat, download_file_name, draw_share_image, share_caption,
};
use tokio::io::AsyncReadExt;

use crate::config::AppConfig;
use crate::services::font::FontService;

#[derive(Debug, Parser)]
#[command(
    name = "framefinder-share",
    version,
    about = "Render a shareable FrameFinder face-shape result image"
)]
pub struct Cli {
    /// Classification result JSON file, or `-` for stdin.
    #[arg(short, long, required_unless_present = "print_config")]
    pub result: Option<PathBuf>,

    /// User photo: a file path or a `data:image/...;base64,` URI.
    #[arg(short, long)]
    pub photo: Option<String>,

    /// Layout: `desktop` (1200x630) or `mobile` (1080x1080).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Render without the user photo.
    #[arg(long)]
    pub no_photo: bool,

    /// Output file (defaults to `<output dir>/framefinder-<shape>-analysis.png`).
    #[arg(short, long, conflicts_with_all = ["data_url", "layout"])]
    pub out: Option<PathBuf>,

    /// Print the image as a data URL instead of writing a file.
    #[arg(long, conflicts_with = "layout")]
    pub data_url: bool,

    /// Print the drawing operations as JSON instead of rasterizing.
    #[arg(long)]
    pub layout: bool,

    /// Also print the share caption.
    #[arg(long)]
    pub caption: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Requested format, falling back to the configured default.
    pub fn resolve_format(&self, config: &AppConfig) -> anyhow::Result<ShareFormat> {
        match &self.format {
            Some(raw) => Ok(raw.parse::<ShareFormat>()?),
            None => Ok(config.default_format),
        }
    }

    pub fn include_photo(&self, config: &AppConfig) -> bool {
        config.include_photo && !self.no_photo
    }

    /// Build the render request for a loaded result.
    pub fn render_request(
        &self,
        result: ClassificationResult,
        config: &AppConfig,
    ) -> anyhow::Result<RenderRequest> {
        let mut request = RenderRequest::new(result, self.resolve_format(config)?)
            .with_include_photo(self.include_photo(config));
        if let Some(photo) = &self.photo {
            request = request.with_photo(PhotoSource::parse(photo));
        }
        Ok(request)
    }
}

/// Execute one CLI invocation.
pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config.settings())?);
        return Ok(());
    }

    let Some(result_path) = cli.result.as_deref() else {
        anyhow::bail!("--result is required");
    };
    let result = read_result(result_path).await?;
    let request = cli.render_request(result, config)?;

    if cli.layout {
        let ops = layout_ops(&request).await;
        println!("{}", serde_json::to_string_pretty(&ops)?);
    } else {
        let fonts = FontService::new(config.font_dir.clone())
            .load_font_set()
            .context("failed to load fonts")?;
        let rendered = Compositor::new(fonts)
            .render(request.clone())
            .await
            .context("failed to render share image")?;

        if cli.data_url {
            println!("{}", rendered.to_data_url());
        } else {
            let path = cli
                .out
                .clone()
                .unwrap_or_else(|| config.output_dir.join(download_file_name(&request.result)));
            write_image(&path, &rendered.png).await?;
            tracing::info!(path = %path.display(), bytes = rendered.png.len(), "Share image written");
            println!("{}", path.display());
        }
    }

    if cli.caption {
        println!("{}", share_caption(&request.result, &config.share_base_url));
    }
    Ok(())
}

/// Read and parse a classification result from a file or stdin (`-`).
pub async fn read_result(path: &Path) -> anyhow::Result<ClassificationResult> {
    let body = if path == Path::new("-") {
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;
        body
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&body).context("invalid classification result JSON")
}

/// Record the layout for `request` without fonts or rasterization.
pub async fn layout_ops(request: &RenderRequest) -> Vec<share_image::DrawOp> {
    let photo = load_photo(&ImageDecoder::new(), request).await;
    let (width, height) = request.format.dimensions();
    let mut canvas = RecordingCanvas::new(width, height);
    let content = ShareContent {
        result: &request.result,
        photo: photo.image(),
        include_photo: request.include_photo,
    };
    draw_share_image(&mut canvas, request.format, &content);
    canvas.into_ops()
}

async fn write_image(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, png)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use share_image::{DrawOp, RenderError};

    const RESULT_JSON: &str = r#"{
        "faceShape": {
            "name": "square",
            "displayName": "Square",
            "description": "Strong, angular jawline with a broad forehead.",
            "characteristics": ["Angular jaw"]
        },
        "confidence": 0.912,
        "recommendations": [
            { "name": "Round", "description": "Softens angles.", "popularity": 88 }
        ]
    }"#;

    fn config() -> AppConfig {
        AppConfig::from_lookup(|_| None)
    }

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["framefinder-share", "--result", "r.json"]).unwrap();
        assert_eq!(cli.result, Some(PathBuf::from("r.json")));
        assert!(!cli.no_photo);
        assert_eq!(cli.resolve_format(&config()).unwrap(), ShareFormat::Desktop);
    }

    #[test]
    fn result_is_required_unless_printing_config() {
        assert!(Cli::try_parse_from(["framefinder-share"]).is_err());
        assert!(Cli::try_parse_from(["framefinder-share", "--print-config"]).is_ok());
    }

    #[test]
    fn out_conflicts_with_data_url() {
        let parsed = Cli::try_parse_from([
            "framefinder-share",
            "-r",
            "r.json",
            "--out",
            "x.png",
            "--data-url",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let cli = Cli::try_parse_from(["framefinder-share", "-r", "r.json", "-f", "poster"]).unwrap();
        let err = cli.resolve_format(&config()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::InvalidFormat(_))
        ));
    }

    #[test]
    fn no_photo_flag_overrides_config() {
        let cli = Cli::try_parse_from(["framefinder-share", "-r", "r.json", "--no-photo"]).unwrap();
        assert!(!cli.include_photo(&config()));
    }

    #[tokio::test]
    async fn reads_result_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, RESULT_JSON).unwrap();
        let result = read_result(&path).await.unwrap();
        assert_eq!(result.face_shape.display_name, "Square");
        assert_eq!(result.confidence_percent(), 91);
    }

    #[tokio::test]
    async fn malformed_result_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, "{ \"faceShape\": 3 }").unwrap();
        assert!(read_result(&path).await.is_err());
    }

    #[tokio::test]
    async fn layout_ops_render_mobile_without_fonts() {
        let result: ClassificationResult = serde_json::from_str(RESULT_JSON).unwrap();
        let cli = Cli::try_parse_from([
            "framefinder-share",
            "-r",
            "r.json",
            "-f",
            "mobile",
            "-p",
            "/nonexistent/selfie.jpg",
        ])
        .unwrap();
        let request = cli.render_request(result, &config()).unwrap();
        let ops = layout_ops(&request).await;
        assert!(matches!(ops[0], DrawOp::Gradient { .. }));
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
        assert!(ops.iter().any(
            |op| matches!(op, DrawOp::Text { text, .. } if text == "91% confidence")
        ));
        assert!(ops.iter().any(
            |op| matches!(op, DrawOp::Text { text, .. } if text == "88% perfect match")
        ));
    }

    #[tokio::test]
    async fn writes_image_creating_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/share.png");
        write_image(&path, b"png").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"png");
    }
}
