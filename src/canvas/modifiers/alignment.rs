/// Alignment patterns (versions 2-40)
use super::CanvasModifier;
use crate::canvas::qr_canvas::QrCanvas;
use crate::encoder::tables::alignment_pattern_positions;
use crate::error::{Error, Result};
use crate::models::Position;

/// Stamps 5x5 alignment patterns on every center combination except the
/// three that coincide with finder patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentModifier;

impl AlignmentModifier {
    /// Pattern centers for a version, finder corners excluded
    pub fn centers(positions: &[usize]) -> Vec<Position> {
        let Some((&first, &last)) = positions.first().zip(positions.last()) else {
            return Vec::new();
        };
        let mut centers = Vec::with_capacity(positions.len() * positions.len());
        for &cy in positions {
            for &cx in positions {
                let finder_corner = (cx == first && cy == first)
                    || (cx == last && cy == first)
                    || (cx == first && cy == last);
                if !finder_corner {
                    centers.push(Position::new(cx, cy));
                }
            }
        }
        centers
    }
}

impl CanvasModifier for AlignmentModifier {
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()> {
        let version = canvas.version();
        if version.number() < 2 {
            return Err(Error::UnsupportedVersion {
                pattern: "alignment",
                version: version.number(),
            });
        }

        for center in Self::centers(&alignment_pattern_positions(version)) {
            for dy in 0..5 {
                for dx in 0..5 {
                    // Dark ring, light ring, dark center
                    let ring = dx.min(dy).min(4 - dx).min(4 - dy);
                    let position = Position::new(center.x + dx - 2, center.y + dy - 2);
                    canvas.set_bit(position, ring != 1, true)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::BitStream;
    use crate::models::{ECLevel, QrCodeData, Version};

    fn canvas(version: u32) -> QrCanvas {
        let data = QrCodeData::new(Version::new(version).unwrap(), ECLevel::L, BitStream::new());
        QrCanvas::new(data)
    }

    #[test]
    fn test_centers_skip_finders() {
        assert_eq!(AlignmentModifier::centers(&[6, 18]), vec![Position::new(18, 18)]);
        let centers = AlignmentModifier::centers(&[6, 22, 38]);
        assert_eq!(centers.len(), 6);
        assert!(!centers.contains(&Position::new(38, 6)));
        assert!(!centers.contains(&Position::new(6, 38)));
        assert!(centers.contains(&Position::new(22, 6)));
        assert!(centers.contains(&Position::new(38, 38)));
        assert!(AlignmentModifier::centers(&[]).is_empty());
    }

    #[test]
    fn test_version_2_pattern() {
        let mut canvas = canvas(2);
        AlignmentModifier.modify(&mut canvas).unwrap();
        let row = |y: usize| -> Vec<bool> { (16..21).map(|x| canvas.is_dark(x, y)).collect() };
        assert_eq!(row(16), vec![true; 5]);
        assert_eq!(row(17), vec![true, false, false, false, true]);
        assert_eq!(row(18), vec![true, false, true, false, true]);
        assert_eq!(row(20), vec![true; 5]);
        assert!(canvas.is_service(16, 16));
        assert_eq!(canvas.get_bit(Position::new(15, 15)).unwrap().value, None);
    }

    #[test]
    fn test_version_1_rejected() {
        let mut canvas = canvas(1);
        assert!(AlignmentModifier.modify(&mut canvas).is_err());
    }
}
