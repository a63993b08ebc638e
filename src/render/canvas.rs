//! Software drawing primitives over a [`RasterImage`]
//!
//! Every primitive clips to the image; coordinates outside it are ignored.
//! Translucent drawing uses source-over blending with a float opacity.

use crate::math::blend::{lerp, to_channel};
use crate::raster::RasterImage;

/// Opaque RGB colour
pub type Rgb = [u8; 3];

/// Pure white
pub const WHITE: Rgb = [255, 255, 255];
/// Pure black
pub const BLACK: Rgb = [0, 0, 0];

/// Blend `color` over the pixel at `(x, y)` with opacity `alpha` in [0, 1]
pub fn blend_pixel(image: &mut RasterImage, x: i64, y: i64, color: Rgb, alpha: f32) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(dst) = image.pixel(px, py) else {
        return;
    };

    let alpha = alpha.clamp(0.0, 1.0);
    let dst_alpha = f32::from(dst[3]) / 255.0;
    let out_alpha = lerp(dst_alpha, 1.0, alpha);

    image.set_pixel(
        px,
        py,
        [
            to_channel(lerp(f32::from(dst[0]), f32::from(color[0]), alpha)),
            to_channel(lerp(f32::from(dst[1]), f32::from(color[1]), alpha)),
            to_channel(lerp(f32::from(dst[2]), f32::from(color[2]), alpha)),
            to_channel(out_alpha * 255.0),
        ],
    );
}

/// Overwrite the pixel at `(x, y)` with an opaque colour
pub fn put_pixel(image: &mut RasterImage, x: i64, y: i64, color: Rgb) {
    if let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) {
        image.set_pixel(px, py, [color[0], color[1], color[2], 255]);
    }
}

/// Blend a filled rectangle
pub fn fill_rect(
    image: &mut RasterImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    color: Rgb,
    alpha: f32,
) {
    let x_end = (x + i64::from(width)).min(i64::from(image.width()));
    let y_end = (y + i64::from(height)).min(i64::from(image.height()));
    for py in y.max(0)..y_end {
        for px in x.max(0)..x_end {
            blend_pixel(image, px, py, color, alpha);
        }
    }
}

/// Blend `color` over the whole image
pub fn wash(image: &mut RasterImage, color: Rgb, alpha: f32) {
    fill_rect(image, 0, 0, image.width(), image.height(), color, alpha);
}

/// Bresenham line between two points, inclusive of both ends
pub fn draw_line(image: &mut RasterImage, from: (i64, i64), to: (i64, i64), color: Rgb) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel(image, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Blend a filled disc; pixel centres within `radius` are covered
pub fn fill_circle(
    image: &mut RasterImage,
    center: (f32, f32),
    radius: f32,
    color: Rgb,
    alpha: f32,
) {
    if radius.is_nan() || radius <= 0.0 {
        return;
    }
    let (cx, cy) = center;
    let y_start = (cy - radius).floor().max(0.0) as i64;
    let y_end = ((cy + radius).ceil() as i64).min(i64::from(image.height()));
    let x_start = (cx - radius).floor().max(0.0) as i64;
    let x_end = ((cx + radius).ceil() as i64).min(i64::from(image.width()));
    let radius_sq = radius * radius;

    for py in y_start..y_end {
        for px in x_start..x_end {
            let ox = px as f32 + 0.5 - cx;
            let oy = py as f32 + 0.5 - cy;
            if ox.mul_add(ox, oy * oy) <= radius_sq {
                blend_pixel(image, px, py, color, alpha);
            }
        }
    }
}

/// Blend one-pixel grid lines every `spacing` pixels, starting at 0
///
/// Intersections are blended once.
pub fn draw_grid(image: &mut RasterImage, spacing: u32, color: Rgb, alpha: f32) {
    if spacing == 0 {
        return;
    }
    for y in 0..image.height() {
        for x in 0..image.width() {
            if x % spacing == 0 || y % spacing == 0 {
                blend_pixel(image, i64::from(x), i64::from(y), color, alpha);
            }
        }
    }
}
