use image::{Rgba, RgbaImage};

use crate::domain::color::Color;
use crate::domain::error::DomainError;
use crate::domain::geometry::CanvasGeometry;

/// Centers `source` on a padded square canvas filled with `fill`.
///
/// The source alpha channel is the paste mask. All four channels blend
/// with it, so a fully opaque source pixel replaces the fill and a fully
/// transparent one leaves the fill untouched.
pub fn pad_rgba(source: &RgbaImage, fill: Color) -> Result<(RgbaImage, CanvasGeometry), DomainError> {
    let geometry = CanvasGeometry::for_dimensions(source.width(), source.height())?;
    let mut canvas = RgbaImage::from_pixel(geometry.final_size, geometry.final_size, fill.to_rgba());

    for (sx, sy, src) in source.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(geometry.x + sx, geometry.y + sy);
        *dst = blend_masked(src, dst);
    }

    Ok((canvas, geometry))
}

pub fn blend_masked(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => *src,
        0 => *dst,
        mask => {
            let mask = u32::from(mask);
            let mut out = [0u8; 4];
            for (i, channel) in out.iter_mut().enumerate() {
                *channel = div255(u32::from(src[i]) * mask + u32::from(dst[i]) * (255 - mask));
            }
            Rgba(out)
        }
    }
}

// Rounded division by 255, exact for every input up to 255 * 255.
fn div255(v: u32) -> u8 {
    let t = v + 128;
    ((t + (t >> 8)) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div255_matches_rounded_division() {
        for v in 0..=255 * 255u32 {
            let expected = ((v as f64) / 255.0).round() as u8;
            assert_eq!(div255(v), expected, "v = {}", v);
        }
    }

    #[test]
    fn test_blend_masked_extremes() {
        let fill = Rgba([255, 255, 255, 0]);
        assert_eq!(blend_masked(&Rgba([1, 2, 3, 255]), &fill), Rgba([1, 2, 3, 255]));
        assert_eq!(blend_masked(&Rgba([1, 2, 3, 0]), &fill), fill);
    }

    #[test]
    fn test_blend_masked_half_alpha_onto_transparent_white() {
        // 128/255 of black over white: rgb = round(255 * 127 / 255) = 127,
        // alpha = round(128 * 128 / 255) = 64.
        let out = blend_masked(&Rgba([0, 0, 0, 128]), &Rgba([255, 255, 255, 0]));
        assert_eq!(out, Rgba([127, 127, 127, 64]));
    }

    #[test]
    fn test_opaque_wide_source_on_white() {
        let source = RgbaImage::from_pixel(100, 50, Rgba([10, 20, 30, 255]));
        let (canvas, geometry) = pad_rgba(&source, Color::WHITE).unwrap();

        assert_eq!(canvas.dimensions(), (140, 140));
        assert_eq!((geometry.x, geometry.y), (20, 45));
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if geometry.contains(x, y) {
                assert_eq!(*pixel, Rgba([10, 20, 30, 255]), "content pixel at ({}, {})", x, y);
            } else {
                assert_eq!(*pixel, Rgba([255, 255, 255, 255]), "fill pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_content_is_copied_pixel_for_pixel() {
        let source = RgbaImage::from_fn(7, 3, |x, y| Rgba([x as u8 * 30, y as u8 * 80, 5, 255]));
        let (canvas, geometry) = pad_rgba(&source, Color::TRANSPARENT_WHITE).unwrap();

        // floor(7 * 0.2) = 1 -> 9x9 canvas, offset (1, 3)
        assert_eq!(canvas.dimensions(), (9, 9));
        for (x, y, pixel) in source.enumerate_pixels() {
            assert_eq!(canvas.get_pixel(geometry.x + x, geometry.y + y), pixel);
        }
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*canvas.get_pixel(8, 8), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_transparent_source_pixels_keep_fill() {
        let mut source = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        source.put_pixel(5, 5, Rgba([200, 0, 0, 255]));
        let fill = Color::new(0, 128, 255, 255);
        let (canvas, geometry) = pad_rgba(&source, fill).unwrap();

        assert_eq!(canvas.dimensions(), (14, 14));
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if (x, y) == (geometry.x + 5, geometry.y + 5) {
                assert_eq!(*pixel, Rgba([200, 0, 0, 255]));
            } else {
                assert_eq!(*pixel, fill.to_rgba());
            }
        }
    }

    #[test]
    fn test_source_is_not_modified() {
        let source = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 100]));
        let before = source.clone();
        pad_rgba(&source, Color::WHITE).unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn test_oversized_canvas_is_rejected_before_allocation() {
        let source = RgbaImage::from_pixel(1, 60000, Rgba([0, 0, 0, 255]));
        assert_eq!(
            pad_rgba(&source, Color::WHITE).unwrap_err(),
            DomainError::CanvasTooLarge { side: 84000 }
        );
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let source = RgbaImage::new(0, 0);
        assert_eq!(pad_rgba(&source, Color::WHITE).unwrap_err(), DomainError::EmptyImage);
    }
}
