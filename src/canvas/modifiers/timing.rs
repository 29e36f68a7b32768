/// Timing (synchronization) strips on row 6 and column 6
use super::CanvasModifier;
use crate::canvas::qr_canvas::QrCanvas;
use crate::error::Result;
use crate::models::Position;

/// Row and column index of both timing strips
pub const TIMING_LINE: usize = 6;

/// Stamps alternating modules between the finder separators
#[derive(Debug, Clone, Copy, Default)]
pub struct TimingModifier;

impl CanvasModifier for TimingModifier {
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()> {
        let size = canvas.size();
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            canvas.set_bit(Position::new(i, TIMING_LINE), dark, true)?;
            canvas.set_bit(Position::new(TIMING_LINE, i), dark, true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::BitStream;
    use crate::models::{ECLevel, QrCodeData, Version};

    #[test]
    fn test_timing_strips() {
        let data = QrCodeData::new(Version::MIN, ECLevel::L, BitStream::new());
        let mut canvas = QrCanvas::new(data);
        TimingModifier.modify(&mut canvas).unwrap();

        let row: Vec<bool> = (8..13).map(|x| canvas.is_dark(x, 6)).collect();
        let column: Vec<bool> = (8..13).map(|y| canvas.is_dark(6, y)).collect();
        assert_eq!(row, vec![true, false, true, false, true]);
        assert_eq!(column, row);
        assert!(canvas.is_service(9, 6));
        assert_eq!(canvas.get_bit(Position::new(7, 6)).unwrap().value, None);
        assert_eq!(canvas.get_bit(Position::new(13, 6)).unwrap().value, None);
    }
}
