/// Format information: correction level and mask number, two copies
use super::CanvasModifier;
use crate::canvas::masking::MaskPattern;
use crate::canvas::qr_canvas::QrCanvas;
use crate::encoder::tables::format_information;
use crate::error::Result;
use crate::models::{ECLevel, Position};

/// Number of bits in a format word
pub const FORMAT_BITS: usize = 15;

/// Stamps the 15-bit format word next to the finders.
///
/// An unmasked canvas gets an all-light word so the area is reserved before a
/// mask has been chosen.
#[derive(Debug, Clone, Copy)]
pub struct FormatModifier {
    ec_level: ECLevel,
    mask: MaskPattern,
}

impl FormatModifier {
    /// Format info for `ec_level` and `mask`
    pub fn new(ec_level: ECLevel, mask: MaskPattern) -> Self {
        Self { ec_level, mask }
    }

    /// The word this modifier writes; bit 14 is the most significant
    pub fn word(&self) -> Result<u16> {
        match self.mask {
            MaskPattern::Unmasked => Ok(0),
            mask => format_information(self.ec_level, mask.number() as u8),
        }
    }

    /// Positions of bit `i` (0 = least significant) in both copies
    pub fn bit_positions(size: usize, i: usize) -> [Position; 2] {
        let first = match i {
            0..=5 => Position::new(8, i),
            6 => Position::new(8, 7),
            7 => Position::new(8, 8),
            8 => Position::new(7, 8),
            _ => Position::new(14 - i, 8),
        };
        let second = if i < 8 {
            Position::new(size - 1 - i, 8)
        } else {
            Position::new(8, size - 15 + i)
        };
        [first, second]
    }
}

impl CanvasModifier for FormatModifier {
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()> {
        let word = self.word()?;
        let size = canvas.size();
        for i in 0..FORMAT_BITS {
            let dark = (word >> i) & 1 == 1;
            for position in Self::bit_positions(size, i) {
                canvas.set_bit(position, dark, true)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::BitStream;
    use crate::models::{QrCodeData, Version};

    fn canvas() -> QrCanvas {
        QrCanvas::new(QrCodeData::new(Version::MIN, ECLevel::M, BitStream::new()))
    }

    fn read_word(canvas: &QrCanvas, copy: usize) -> u16 {
        (0..FORMAT_BITS).fold(0u16, |word, i| {
            let position = FormatModifier::bit_positions(canvas.size(), i)[copy];
            word | ((canvas.is_dark(position.x, position.y) as u16) << i)
        })
    }

    #[test]
    fn test_format_copies_match() {
        let mut canvas = canvas();
        let modifier = FormatModifier::new(ECLevel::M, MaskPattern::Pattern5);
        modifier.modify(&mut canvas).unwrap();
        assert_eq!(read_word(&canvas, 0), 0x40CE);
        assert_eq!(read_word(&canvas, 1), 0x40CE);
    }

    #[test]
    fn test_format_layout() {
        // L, mask 0: 111011111000100 written from (0, 8) rightwards
        let mut canvas = canvas();
        FormatModifier::new(ECLevel::L, MaskPattern::Pattern0)
            .modify(&mut canvas)
            .unwrap();
        let row: Vec<bool> = [0, 1, 2, 3, 4, 5, 7, 8]
            .iter()
            .map(|&x| canvas.is_dark(x, 8))
            .collect();
        assert_eq!(row, vec![true, true, true, false, true, true, true, true]);
        let column: Vec<bool> = (0..8)
            .rev()
            .filter(|&y| y != 6)
            .map(|y| canvas.is_dark(8, y))
            .collect();
        assert_eq!(column, vec![true, false, false, false, true, false, false]);
        // Second copy starts at the bottom of column 8
        assert!(canvas.is_dark(8, 20));
        assert!(!canvas.is_dark(20, 8));
        assert!(canvas.is_service(8, 14));
    }

    #[test]
    fn test_unmasked_reserves_area() {
        let mut canvas = canvas();
        FormatModifier::new(ECLevel::H, MaskPattern::Unmasked)
            .modify(&mut canvas)
            .unwrap();
        assert_eq!(read_word(&canvas, 0), 0);
        let bit = canvas.get_bit(Position::new(8, 0)).unwrap();
        assert_eq!(bit.value, Some(false));
        assert!(bit.is_service);
    }
}
