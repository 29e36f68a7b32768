/// Version information blocks (versions 7-40)
use super::CanvasModifier;
use crate::canvas::qr_canvas::QrCanvas;
use crate::encoder::tables::version_information;
use crate::error::Result;
use crate::models::Position;

/// Number of bits in a version word
pub const VERSION_BITS: usize = 18;

/// Stamps the 18-bit version word as a 6x3 block above the bottom-left finder
/// and its transpose left of the top-right finder
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionModifier;

impl CanvasModifier for VersionModifier {
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()> {
        let word = version_information(canvas.version())?;
        let size = canvas.size();
        for i in 0..VERSION_BITS {
            let dark = (word >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            canvas.set_bit(Position::new(a, b), dark, true)?;
            canvas.set_bit(Position::new(b, a), dark, true)?;
        }
        Ok(())
    }
}
