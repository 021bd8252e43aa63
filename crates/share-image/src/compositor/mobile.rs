//! Mobile layout: 1080x1080 square, everything centered on the midline.

use super::{
    BRAND_NAME, GRAY_300, GRAY_400, GRAY_500, MATCH_GREEN, PILL_BLUE, ShareContent, WHITE,
    draw_photo, draw_wrapped,
};
use crate::canvas::{Canvas, RoundedRect, TextAlign, TextStyle};
use image::Rgba;

const TAGLINE: &str = "AI Face Shape Analysis";
const FOOTER: &str = "Get your free analysis at framefinder.com";

const PHOTO_SIZE: f32 = 400.0;
const PHOTO_Y: f32 = 160.0;
const PHOTO_RADIUS: f32 = 30.0;
const PHOTO_BORDER: f32 = 3.0;

pub(crate) const RESULTS_Y_WITH_PHOTO: f32 = 620.0;
pub(crate) const RESULTS_Y_WITHOUT_PHOTO: f32 = 300.0;

const PILL_PADDING: f32 = 60.0;
const DESCRIPTION_MAX_WIDTH: f32 = 800.0;
const DESCRIPTION_LINE_HEIGHT: f32 = 35.0;

const CARD_WIDTH: f32 = 700.0;
const CARD_HEIGHT: f32 = 80.0;
const CARD_FILL: Rgba<u8> = Rgba([55, 65, 81, 204]);

pub(super) fn draw(canvas: &mut impl Canvas, content: &ShareContent<'_>) {
    let result = content.result;
    let width = canvas.width() as f32;
    let cx = width / 2.0;
    let center = TextAlign::Center;

    canvas.fill_text(BRAND_NAME, cx, 80.0, &TextStyle::bold(48.0, WHITE), center);
    canvas.fill_text(TAGLINE, cx, 120.0, &TextStyle::regular(24.0, GRAY_400), center);

    if let Some(photo) = content.photo {
        let frame = RoundedRect::new((width - PHOTO_SIZE) / 2.0, PHOTO_Y, PHOTO_SIZE, PHOTO_SIZE, PHOTO_RADIUS);
        draw_photo(canvas, photo, frame, PHOTO_BORDER);
    }

    let y = if content.include_photo {
        RESULTS_Y_WITH_PHOTO
    } else {
        RESULTS_Y_WITHOUT_PHOTO
    };

    canvas.fill_text("Your Face Shape:", cx, y, &TextStyle::bold(42.0, WHITE), center);

    let name = &result.face_shape.display_name;
    let name_style = TextStyle::bold(38.0, WHITE);
    let pill_width = canvas.measure_text(name, &name_style) + PILL_PADDING;
    canvas.fill_rounded_rect(
        RoundedRect::new((width - pill_width) / 2.0, y + 20.0, pill_width, 70.0, 15.0),
        PILL_BLUE,
    );
    canvas.fill_text(name, cx, y + 70.0, &name_style, center);

    let confidence = format!("{}% confidence", result.confidence_percent());
    canvas.fill_text(&confidence, cx, y + 120.0, &TextStyle::regular(24.0, GRAY_400), center);

    draw_wrapped(
        canvas,
        &result.face_shape.description,
        (cx, y + 170.0),
        DESCRIPTION_MAX_WIDTH,
        DESCRIPTION_LINE_HEIGHT,
        &TextStyle::regular(26.0, GRAY_300),
        center,
    );

    if let Some(frame) = result.recommendations.first() {
        canvas.fill_text("Perfect Frame Style:", cx, y + 300.0, &TextStyle::bold(32.0, WHITE), center);
        canvas.fill_rounded_rect(
            RoundedRect::new((width - CARD_WIDTH) / 2.0, y + 320.0, CARD_WIDTH, CARD_HEIGHT, 12.0),
            CARD_FILL,
        );
        canvas.fill_text(&frame.name, cx, y + 355.0, &TextStyle::bold(28.0, WHITE), center);
        canvas.fill_text(
            &format!("{}% perfect match", frame.popularity),
            cx,
            y + 385.0,
            &TextStyle::regular(24.0, MATCH_GREEN),
            center,
        );
    }

    canvas.fill_text(FOOTER, cx, 1040.0, &TextStyle::regular(24.0, GRAY_500), center);
}
