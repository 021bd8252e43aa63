//! Pixel-level composition: gradient fills, anti-aliased rounded rects and
//! clipped image overlays on an RGBA buffer.

use image::{Rgba, RgbaImage};

use crate::canvas::{LinearGradient, RoundedRect};

/// Paint every pixel with the gradient color sampled at its center.
pub fn fill_gradient(img: &mut RgbaImage, gradient: &LinearGradient) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = gradient.color_at(x as f32 + 0.5, y as f32 + 0.5);
    }
}

/// Fill `rect` with `color`, anti-aliasing the edge over one pixel.
pub fn fill_rounded_rect(img: &mut RgbaImage, rect: RoundedRect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = pixel_bounds(img, &rect, 0.0) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let d = rect.signed_distance(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let blended = blend_pixel(img.get_pixel(x, y), color, coverage);
                img.put_pixel(x, y, blended);
            }
        }
    }
}

/// Stroke the outline of `rect` with a line centered on the path.
pub fn stroke_rounded_rect(img: &mut RgbaImage, rect: RoundedRect, color: Rgba<u8>, line_width: f32) {
    let half = line_width / 2.0;
    let Some((x0, y0, x1, y1)) = pixel_bounds(img, &rect, half + 1.0) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let d = rect.signed_distance(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (half + 0.5 - d.abs()).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let blended = blend_pixel(img.get_pixel(x, y), color, coverage);
                img.put_pixel(x, y, blended);
            }
        }
    }
}

/// Overlay `top` onto `base` at `rect`'s origin, masked by `rect`'s rounded
/// corners. `top` is expected to already be sized to `rect`.
pub fn overlay_clipped(base: &mut RgbaImage, top: &RgbaImage, rect: RoundedRect) {
    let origin_x = rect.x.round() as i64;
    let origin_y = rect.y.round() as i64;
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = origin_x + i64::from(dx);
        let target_y = origin_y + i64::from(dy);
        if target_x < 0
            || target_y < 0
            || target_x >= i64::from(base.width())
            || target_y >= i64::from(base.height())
        {
            continue;
        }
        let (tx, ty) = (target_x as u32, target_y as u32);
        let d = rect.signed_distance(tx as f32 + 0.5, ty as f32 + 0.5);
        let coverage = (0.5 - d).clamp(0.0, 1.0);
        if coverage > 0.0 {
            let blended = blend_pixel(base.get_pixel(tx, ty), *pixel, coverage);
            base.put_pixel(tx, ty, blended);
        }
    }
}

/// Source-over blend of `fg` onto `bg`, scaled by `coverage` (0..=1).
pub fn blend_pixel(bg: &Rgba<u8>, fg: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let alpha = f32::from(fg[3]) / 255.0 * coverage;
    if alpha >= 1.0 {
        return fg;
    }
    let inv = 1.0 - alpha;
    let mix = |f: u8, b: u8| (f32::from(f) * alpha + f32::from(b) * inv).round() as u8;
    Rgba([
        mix(fg[0], bg[0]),
        mix(fg[1], bg[1]),
        mix(fg[2], bg[2]),
        (255.0 * alpha + f32::from(bg[3]) * inv).round() as u8,
    ])
}

/// Pixel range covering `rect` grown by `pad`, clamped to the image.
fn pixel_bounds(img: &RgbaImage, rect: &RoundedRect, pad: f32) -> Option<(u32, u32, u32, u32)> {
    let clamp_x = |v: f32| v.clamp(0.0, img.width() as f32) as u32;
    let clamp_y = |v: f32| v.clamp(0.0, img.height() as f32) as u32;
    let x0 = clamp_x((rect.x - pad).floor());
    let y0 = clamp_y((rect.y - pad).floor());
    let x1 = clamp_x((rect.x + rect.width + pad).ceil());
    let y1 = clamp_y((rect.y + rect.height + pad).ceil());
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}
