//! Desktop layout: 1200x630, photo on the left, results panel on the right.

use super::{
    BRAND_NAME, GRAY_300, GRAY_400, GRAY_500, MATCH_GREEN, PILL_BLUE, ShareContent, WHITE,
    draw_photo, draw_wrapped,
};
use crate::canvas::{Canvas, RoundedRect, TextAlign, TextStyle};
use crate::text::truncate_with_ellipsis;
use image::Rgba;

const MARGIN_X: f32 = 40.0;
const TAGLINE: &str = "AI-Powered Face Shape Analysis";
const FOOTER: &str = "Get your free face shape analysis at framefinder.com";

pub(crate) const PHOTO_FRAME: RoundedRect = RoundedRect::new(40.0, 120.0, 280.0, 280.0, 20.0);
const PHOTO_BORDER: f32 = 2.0;

pub(crate) const RESULTS_X_WITH_PHOTO: f32 = 360.0;
const RESULTS_Y: f32 = 120.0;

const PILL_PADDING: f32 = 40.0;
const PILL_HEIGHT: f32 = 50.0;
const DESCRIPTION_MAX_WIDTH: f32 = 500.0;
const DESCRIPTION_LINE_HEIGHT: f32 = 25.0;

const MAX_CHARACTERISTICS: usize = 3;
const MAX_CARDS: usize = 2;
const CARD_WIDTH: f32 = 480.0;
const CARD_HEIGHT: f32 = 50.0;
const CARD_SPACING: f32 = 60.0;
const CARD_FILL: Rgba<u8> = Rgba([55, 65, 81, 153]);
const CARD_DESCRIPTION_CHARS: usize = 50;

pub(super) fn draw(canvas: &mut impl Canvas, content: &ShareContent<'_>) {
    let result = content.result;
    let left = TextAlign::Left;

    canvas.fill_text(BRAND_NAME, MARGIN_X, 60.0, &TextStyle::bold(32.0, WHITE), left);
    canvas.fill_text(TAGLINE, MARGIN_X, 90.0, &TextStyle::regular(18.0, GRAY_400), left);

    if let Some(photo) = content.photo {
        draw_photo(canvas, photo, PHOTO_FRAME, PHOTO_BORDER);
    }

    let x = if content.include_photo {
        RESULTS_X_WITH_PHOTO
    } else {
        MARGIN_X
    };
    let y = RESULTS_Y;

    canvas.fill_text("Your Face Shape:", x, y + 40.0, &TextStyle::bold(36.0, WHITE), left);

    // Pill width follows the measured name.
    let name = &result.face_shape.display_name;
    let name_style = TextStyle::bold(28.0, WHITE);
    let pill_width = canvas.measure_text(name, &name_style) + PILL_PADDING;
    canvas.fill_rounded_rect(RoundedRect::new(x, y + 60.0, pill_width, PILL_HEIGHT, 10.0), PILL_BLUE);
    canvas.fill_text(name, x + 20.0, y + 90.0, &name_style, left);

    let confidence = format!("{}% confidence", result.confidence_percent());
    canvas.fill_text(
        &confidence,
        x + pill_width + 20.0,
        y + 85.0,
        &TextStyle::regular(18.0, GRAY_400),
        left,
    );

    draw_wrapped(
        canvas,
        &result.face_shape.description,
        (x, y + 140.0),
        DESCRIPTION_MAX_WIDTH,
        DESCRIPTION_LINE_HEIGHT,
        &TextStyle::regular(20.0, GRAY_300),
        left,
    );

    let characteristics = &result.face_shape.characteristics;
    if !characteristics.is_empty() {
        canvas.fill_text("Key Characteristics:", x, y + 220.0, &TextStyle::bold(22.0, WHITE), left);
        let bullet_style = TextStyle::regular(18.0, GRAY_300);
        for (i, item) in characteristics.iter().take(MAX_CHARACTERISTICS).enumerate() {
            let baseline = y + 250.0 + i as f32 * 25.0;
            canvas.fill_text(&format!("• {item}"), x, baseline, &bullet_style, left);
        }
    }

    let frames = result.top_recommendations(MAX_CARDS);
    if !frames.is_empty() {
        canvas.fill_text("Perfect Frame Styles:", x, y + 360.0, &TextStyle::bold(22.0, WHITE), left);
        for (i, frame) in frames.iter().enumerate() {
            let card_y = y + 390.0 + i as f32 * CARD_SPACING;
            canvas.fill_rounded_rect(RoundedRect::new(x, card_y, CARD_WIDTH, CARD_HEIGHT, 8.0), CARD_FILL);
            canvas.fill_text(&frame.name, x + 15.0, card_y + 25.0, &TextStyle::bold(18.0, WHITE), left);
            canvas.fill_text(
                &format!("{}% match", frame.popularity),
                x + 400.0,
                card_y + 25.0,
                &TextStyle::regular(16.0, MATCH_GREEN),
                left,
            );
            canvas.fill_text(
                &truncate_with_ellipsis(&frame.description, CARD_DESCRIPTION_CHARS),
                x + 15.0,
                card_y + 42.0,
                &TextStyle::regular(14.0, GRAY_400),
                left,
            );
        }
    }

    canvas.fill_text(FOOTER, MARGIN_X, 600.0, &TextStyle::regular(16.0, GRAY_500), left);
}
