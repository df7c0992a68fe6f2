/// Rasterizer: executes paint commands onto an RGB canvas

use super::layout::{GLYPH_SIZE, GLYPH_SCALE};
use super::paint::PaintCommand;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgb,
            } => fill_rect(&mut img, *x, *y, *width, *height, Rgb([rgb.0, rgb.1, rgb.2])),
            PaintCommand::Ellipse {
                x,
                y,
                width,
                height,
                rgb,
            } => fill_ellipse(&mut img, *x, *y, *width, *height, Rgb([rgb.0, rgb.1, rgb.2])),
            PaintCommand::Text { x, y, text, rgb } => {
                draw_text(&mut img, *x, *y, text, Rgb([rgb.0, rgb.1, rgb.2]))
            }
        }
    }
    img
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(img: &mut RgbImage, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            put(img, x as i64 + dx, y as i64 + dy, color);
        }
    }
}

fn fill_ellipse(img: &mut RgbImage, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    for dy in 0..height {
        for dx in 0..width {
            // sample at pixel centres
            let nx = (dx as f32 + 0.5 - rx) / rx;
            let ny = (dy as f32 + 0.5 - ry) / ry;
            if nx * nx + ny * ny <= 1.0 {
                put(img, x as i64 + dx as i64, y as i64 + dy as i64, color);
            }
        }
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_text(img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let cell = (GLYPH_SIZE * GLYPH_SCALE) as i64;
    for (col, c) in text.chars().enumerate() {
        if c == ' ' {
            continue;
        }
        let origin_x = x as i64 + col as i64 * cell;
        for (row, bits) in glyph(c).into_iter().enumerate() {
            for bit in 0..GLYPH_SIZE {
                // bit 0 is the leftmost pixel
                if bits & (1u8 << bit) == 0 {
                    continue;
                }
                for sy in 0..GLYPH_SCALE as i64 {
                    for sx in 0..GLYPH_SCALE as i64 {
                        put(
                            img,
                            origin_x + bit as i64 * GLYPH_SCALE as i64 + sx,
                            y as i64 + row as i64 * GLYPH_SCALE as i64 + sy,
                            color,
                        );
                    }
                }
            }
        }
    }
}
