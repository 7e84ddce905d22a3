use imageproc::rect::Rect;

use crate::config::{MAX_CANVAS_BYTES, PADDING_RATIO_DENOMINATOR, PADDING_RATIO_NUMERATOR};
use crate::domain::error::DomainError;

/// Placement of a `width × height` source on its padded square canvas.
///
/// The canvas side is the larger source side plus a fixed ratio of it on
/// each side, so already-square sources are padded too. Icons get
/// circle-cropped by some launchers and the margin keeps corners clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub source_width: u32,
    pub source_height: u32,
    pub padding: u32,
    pub final_size: u32,
    pub x: u32,
    pub y: u32,
}

impl CanvasGeometry {
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::EmptyImage);
        }
        let new_size = u64::from(width.max(height));
        let padding = new_size * u64::from(PADDING_RATIO_NUMERATOR) / u64::from(PADDING_RATIO_DENOMINATOR);
        let side = new_size + padding * 2;

        // Must hold before the canvas is allocated.
        let too_large = || DomainError::CanvasTooLarge { side };
        let bytes = side
            .checked_mul(side)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(too_large)?;
        if bytes > MAX_CANVAS_BYTES {
            return Err(too_large());
        }
        let final_size = u32::try_from(side).map_err(|_| too_large())?;
        let padding = padding as u32;

        Ok(Self {
            source_width: width,
            source_height: height,
            padding,
            final_size,
            x: (final_size - width) / 2,
            y: (final_size - height) / 2,
        })
    }

    /// Bounding box of the source within the canvas.
    pub fn content_rect(&self) -> Rect {
        Rect::at(self.x as i32, self.y as i32).of_size(self.source_width, self.source_height)
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        let rect = self.content_rect();
        let (px, py) = (px as i32, py as i32);
        px >= rect.left() && px <= rect.right() && py >= rect.top() && py <= rect.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_source() {
        let g = CanvasGeometry::for_dimensions(100, 50).unwrap();
        assert_eq!(g.padding, 20);
        assert_eq!(g.final_size, 140);
        assert_eq!((g.x, g.y), (20, 45));
    }

    #[test]
    fn test_tall_source() {
        let g = CanvasGeometry::for_dimensions(30, 64).unwrap();
        // floor(64 * 0.2) = 12
        assert_eq!(g.padding, 12);
        assert_eq!(g.final_size, 88);
        assert_eq!((g.x, g.y), (29, 12));
    }

    #[test]
    fn test_square_source_is_still_padded() {
        let g = CanvasGeometry::for_dimensions(512, 512).unwrap();
        assert_eq!(g.final_size, 512 + 2 * 102);
        assert_eq!((g.x, g.y), (102, 102));
    }

    #[test]
    fn test_tiny_source_gets_no_padding() {
        let g = CanvasGeometry::for_dimensions(4, 1).unwrap();
        assert_eq!(g.padding, 0);
        assert_eq!(g.final_size, 4);
        assert_eq!((g.x, g.y), (0, 1));
    }

    #[test]
    fn test_source_always_fits_inside_canvas() {
        for (w, h) in [(1, 1), (7, 3), (3, 7), (99, 100), (101, 17), (640, 480)] {
            let g = CanvasGeometry::for_dimensions(w, h).unwrap();
            assert!(g.final_size >= w.max(h));
            assert!(g.x + w <= g.final_size, "{}x{} overflows horizontally", w, h);
            assert!(g.y + h <= g.final_size, "{}x{} overflows vertically", w, h);
        }
    }

    #[test]
    fn test_empty_dimensions_are_rejected() {
        assert_eq!(CanvasGeometry::for_dimensions(0, 10), Err(DomainError::EmptyImage));
        assert_eq!(CanvasGeometry::for_dimensions(10, 0), Err(DomainError::EmptyImage));
    }

    #[test]
    fn test_thin_strip_canvas_is_rejected() {
        // 60000 + 2 * 12000 = 84000 px side, far past the byte limit.
        assert_eq!(
            CanvasGeometry::for_dimensions(1, 60000),
            Err(DomainError::CanvasTooLarge { side: 84000 })
        );
    }

    #[test]
    fn test_huge_dimensions_do_not_overflow() {
        assert!(matches!(
            CanvasGeometry::for_dimensions(u32::MAX, 1),
            Err(DomainError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_canvas_at_limit_is_accepted() {
        // 8000 -> 11200 px side is 501,760,000 bytes, just under 512 MiB.
        let g = CanvasGeometry::for_dimensions(8000, 1).unwrap();
        assert_eq!(g.final_size, 11200);
        assert!(u64::from(g.final_size).pow(2) * 4 <= MAX_CANVAS_BYTES);
    }

    #[test]
    fn test_content_rect_and_contains() {
        let g = CanvasGeometry::for_dimensions(100, 50).unwrap();
        let rect = g.content_rect();
        assert_eq!((rect.left(), rect.top()), (20, 45));
        assert_eq!((rect.right(), rect.bottom()), (119, 94));

        assert!(g.contains(20, 45));
        assert!(g.contains(119, 94));
        assert!(!g.contains(19, 45));
        assert!(!g.contains(120, 94));
        assert!(!g.contains(20, 95));
    }
}
