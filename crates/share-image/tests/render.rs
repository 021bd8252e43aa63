//! End-to-end rendering against real fonts.
//!
//! These tests need a system font; without one they log and return early.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use share_image::compositor::background_gradient;
use share_image::{
    ClassificationResult, Compositor, FaceShape, FaceShapeKind, FontSet, FrameRecommendation,
    PhotoSource, RenderRequest, RenderedImage, ShareFormat,
};

fn fonts() -> Option<FontSet> {
    match FontSet::from_system() {
        Ok(fonts) => Some(fonts),
        Err(e) => {
            eprintln!("skipping render test: {e}");
            None
        }
    }
}

fn sample_result(confidence: f64) -> ClassificationResult {
    ClassificationResult {
        face_shape: FaceShape {
            name: FaceShapeKind::Oval,
            display_name: "Oval".into(),
            description: "Well-balanced proportions with a softly rounded jaw and cheekbones that \
                          are slightly wider than the forehead."
                .into(),
            characteristics: vec!["Balanced proportions".into(), "Soft jawline".into()],
        },
        confidence,
        recommendations: vec![FrameRecommendation {
            name: "Rectangular".into(),
            description: "Structured lines add definition to rounded features.".into(),
            popularity: 91,
        }],
    }
}

fn photo_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(300, 300, Rgba([220, 40, 40, 255]));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png).unwrap();
    cursor.into_inner()
}

fn decode(rendered: &RenderedImage) -> RgbaImage {
    image::load_from_memory_with_format(&rendered.png, ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[tokio::test]
async fn output_dimensions_match_format() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    for format in [ShareFormat::Desktop, ShareFormat::Mobile] {
        let rendered = compositor
            .render(RenderRequest::new(sample_result(0.9), format))
            .await
            .unwrap();
        let (w, h) = format.dimensions();
        assert_eq!((rendered.width, rendered.height), (w, h));
        let decoded = decode(&rendered);
        assert_eq!(decoded.dimensions(), (w, h));
    }
}

#[tokio::test]
async fn undecodable_photo_still_renders() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    for format in [ShareFormat::Desktop, ShareFormat::Mobile] {
        let request = RenderRequest::new(sample_result(0.7), format)
            .with_photo(PhotoSource::Bytes(b"this is not a photo".to_vec()));
        let rendered = compositor.render(request).await.unwrap();
        assert_eq!(decode(&rendered).dimensions(), format.dimensions());
    }
}

#[tokio::test]
async fn missing_photo_leaves_gradient_in_desktop_photo_region() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    let rendered = compositor
        .render(RenderRequest::new(sample_result(0.873), ShareFormat::Desktop))
        .await
        .unwrap();
    let img = decode(&rendered);
    let gradient = background_gradient(1200, 630);
    for (x, y) in [(41, 121), (180, 260), (318, 398), (100, 300)] {
        assert_eq!(
            img.get_pixel(x, y),
            &gradient.color_at(x as f32 + 0.5, y as f32 + 0.5),
            "pixel ({x}, {y})"
        );
    }
}

#[tokio::test]
async fn decoded_photo_fills_its_frame() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    let request = RenderRequest::new(sample_result(0.9), ShareFormat::Desktop)
        .with_photo(PhotoSource::Bytes(photo_png()));
    let img = decode(&compositor.render(request).await.unwrap());
    assert_eq!(img.get_pixel(180, 260), &Rgba([220, 40, 40, 255]));
    // Rounded corner keeps the background.
    let gradient = background_gradient(1200, 630);
    assert_eq!(img.get_pixel(40, 120), &gradient.color_at(40.5, 120.5));
}

#[tokio::test]
async fn mobile_photo_is_drawn_centered() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    let request = RenderRequest::new(sample_result(0.9), ShareFormat::Mobile)
        .with_photo(PhotoSource::Bytes(photo_png()));
    let img = decode(&compositor.render(request).await.unwrap());
    assert_eq!(img.get_pixel(540, 360), &Rgba([220, 40, 40, 255]));
}

#[tokio::test]
async fn rendering_is_deterministic() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    for format in [ShareFormat::Desktop, ShareFormat::Mobile] {
        let request = RenderRequest::new(sample_result(0.873), format)
            .with_photo(PhotoSource::Bytes(photo_png()));
        let first = compositor.render(request.clone()).await.unwrap();
        let second = compositor.render(request).await.unwrap();
        assert_eq!(first.png, second.png);
    }
}

#[tokio::test]
async fn empty_recommendations_render_without_error() {
    let Some(fonts) = fonts() else { return };
    let compositor = Compositor::new(fonts);
    let mut result = sample_result(0.6);
    result.recommendations.clear();
    let rendered = compositor
        .render(RenderRequest::new(result, ShareFormat::Mobile))
        .await
        .unwrap();
    let img = decode(&rendered);
    // Where the card would sit (y = 620 + 320 .. +80) only background remains.
    let gradient = background_gradient(1080, 1080);
    assert_eq!(img.get_pixel(200, 990), &gradient.color_at(200.5, 990.5));
}
