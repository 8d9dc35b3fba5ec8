use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

/// Fraction of the icon size used as the glyph's pixel height.
const GLYPH_SCALE: f32 = 0.6;

/// Rasterizes `glyph` centered on the image at 0.6× the icon size.
///
/// Returns `false` without touching the image when the font has no
/// drawable outline for the glyph (missing from the font, or a bitmap-only
/// color glyph with no vector data).
pub(crate) fn draw_centered_glyph(
    image: &mut RgbImage,
    font: &FontVec,
    glyph: char,
    color: Rgb<u8>,
) -> bool {
    let size = image.width();
    let scale = PxScale::from(size as f32 * GLYPH_SCALE);

    let id = font.glyph_id(glyph);
    if id.0 == 0 {
        // .notdef
        return false;
    }

    let Some(outlined) = font.outline_glyph(id.with_scale(scale)) else {
        return false;
    };
    let bounds = outlined.px_bounds();
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return false;
    }

    // Center the pixel bounding box; coverage coordinates are relative to
    // its min corner, so the box origin offset cancels out here.
    let left = ((size as f32 - bounds.width()) / 2.0).round() as i64;
    let top = ((size as f32 - bounds.height()) / 2.0).round() as i64;

    outlined.draw(|gx, gy, coverage| {
        let x = left + i64::from(gx);
        let y = top + i64::from(gy);
        if x < 0 || y < 0 || x >= i64::from(size) || y >= i64::from(size) {
            return;
        }
        let pixel = image.get_pixel_mut(x as u32, y as u32);
        *pixel = blend(*pixel, color, coverage);
    });

    true
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let c = coverage.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (f32::from(u) + (f32::from(o) - f32::from(u)) * c).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

/// Draws the fallback shopping cart: a stroked body, two filled wheels,
/// and a diagonal handle. All coordinates are per-hundred fractions of
/// the icon size, so the shape scales linearly.
pub(crate) fn draw_cart(image: &mut RgbImage, color: Rgb<u8>) {
    let size = image.width();
    let s = size as f32 / 100.0;
    let stroke = ((3.0 * s) as i32).max(1);

    let left = (20.0 * s) as i32;
    let top = (30.0 * s) as i32;
    let right = (80.0 * s) as i32;
    let bottom = (70.0 * s) as i32;

    // Body outline, stroked inward.
    for i in 0..stroke {
        let width = (right - left + 1 - 2 * i).max(1) as u32;
        let height = (bottom - top + 1 - 2 * i).max(1) as u32;
        draw_hollow_rect_mut(
            image,
            Rect::at(left + i, top + i).of_size(width, height),
            color,
        );
    }

    let radius = (5.0 * s) as i32;
    let wheel_y = (80.0 * s) as i32;
    draw_filled_circle_mut(image, ((35.0 * s) as i32, wheel_y), radius, color);
    draw_filled_circle_mut(image, ((65.0 * s) as i32, wheel_y), radius, color);

    // Handle, widened by parallel one-pixel segments.
    for i in 0..stroke {
        let offset = i as f32;
        draw_line_segment_mut(
            image,
            (left as f32 + offset, top as f32),
            (10.0 * s + offset, 15.0 * s),
            color,
        );
    }
}
