/// Finder patterns with their light separators, plus the dark module
use super::CanvasModifier;
use crate::canvas::qr_canvas::QrCanvas;
use crate::error::Result;
use crate::models::Position;

const FINDER_SIZE: usize = 7;
const BACKGROUND_SIZE: usize = 8;

/// Stamps the three finder patterns and the dark module
#[derive(Debug, Clone, Copy, Default)]
pub struct FinderModifier;

impl FinderModifier {
    /// Dark on the outer ring and the 3x3 core
    fn is_dark(dx: usize, dy: usize) -> bool {
        let ring = dx.min(dy).min(FINDER_SIZE - 1 - dx).min(FINDER_SIZE - 1 - dy);
        ring != 1
    }

    fn fill(
        canvas: &mut QrCanvas,
        origin: Position,
        side: usize,
        value: impl Fn(usize, usize) -> bool,
    ) -> Result<()> {
        for dy in 0..side {
            for dx in 0..side {
                canvas.set_bit(origin.offset(dx, dy), value(dx, dy), true)?;
            }
        }
        Ok(())
    }
}

impl CanvasModifier for FinderModifier {
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()> {
        let size = canvas.size();

        // Light 8x8 backgrounds form the separators
        for origin in [(0, 0), (size - BACKGROUND_SIZE, 0), (0, size - BACKGROUND_SIZE)] {
            Self::fill(canvas, origin.into(), BACKGROUND_SIZE, |_, _| false)?;
        }
        for origin in [(0, 0), (size - FINDER_SIZE, 0), (0, size - FINDER_SIZE)] {
            Self::fill(canvas, origin.into(), FINDER_SIZE, Self::is_dark)?;
        }

        canvas.set_bit(Position::new(8, size - 8), true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::BitStream;
    use crate::models::{ECLevel, QrCodeData, Version};

    fn stamped(version: u32) -> QrCanvas {
        let data = QrCodeData::new(Version::new(version).unwrap(), ECLevel::L, BitStream::new());
        let mut canvas = QrCanvas::new(data);
        FinderModifier.modify(&mut canvas).unwrap();
        canvas
    }

    #[test]
    fn test_finder_rows() {
        let canvas = stamped(1);
        let row = |y: usize| -> Vec<bool> { (0..8).map(|x| canvas.is_dark(x, y)).collect() };
        assert_eq!(row(0), vec![true, true, true, true, true, true, true, false]);
        assert_eq!(row(1), vec![true, false, false, false, false, false, true, false]);
        assert_eq!(row(3), vec![true, false, true, true, true, false, true, false]);
        assert_eq!(row(7), vec![false; 8]);
    }

    #[test]
    fn test_finder_corners_and_dark_module() {
        let canvas = stamped(2);
        let size = canvas.size();
        for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 4, 3), (3, size - 4)] {
            assert!(canvas.is_dark(x, y), "({x}, {y})");
            assert!(canvas.is_service(x, y));
        }
        // Separators
        assert!(!canvas.is_dark(size - 8, 0));
        assert!(!canvas.is_dark(7, size - 1));
        assert!(canvas.is_service(size - 8, 7));
        // Dark module
        assert!(canvas.is_dark(8, size - 8));
        // Data area untouched
        assert_eq!(canvas.get_bit(Position::new(10, 10)).unwrap().value, None);
    }
}
