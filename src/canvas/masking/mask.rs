use crate::canvas::qr_canvas::CanvasBit;
use crate::error::{Error, Result};
use std::fmt;

/// Data mask patterns (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskPattern {
    /// Identity; used while writing raw canvases
    #[default]
    Unmasked,
    /// (x + y) % 2 == 0
    Pattern0,
    /// y % 2 == 0
    Pattern1,
    /// x % 3 == 0
    Pattern2,
    /// (x + y) % 3 == 0
    Pattern3,
    /// (y / 2 + x / 3) % 2 == 0
    Pattern4,
    /// (x * y) % 2 + (x * y) % 3 == 0
    Pattern5,
    /// ((x * y) % 2 + (x * y) % 3) % 2 == 0
    Pattern6,
    /// ((x + y) % 2 + (x * y) % 3) % 2 == 0
    Pattern7,
}

impl MaskPattern {
    /// The eight real masks in number order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Look a mask up by number; -1 is [`MaskPattern::Unmasked`]
    pub fn from_number(number: i32) -> Result<Self> {
        match number {
            -1 => Ok(MaskPattern::Unmasked),
            0..=7 => Ok(Self::ALL[number as usize]),
            _ => Err(Error::InvalidMaskNumber(number)),
        }
    }

    /// Mask number, -1 for [`MaskPattern::Unmasked`]
    pub fn number(&self) -> i32 {
        match self {
            MaskPattern::Unmasked => -1,
            MaskPattern::Pattern0 => 0,
            MaskPattern::Pattern1 => 1,
            MaskPattern::Pattern2 => 2,
            MaskPattern::Pattern3 => 3,
            MaskPattern::Pattern4 => 4,
            MaskPattern::Pattern5 => 5,
            MaskPattern::Pattern6 => 6,
            MaskPattern::Pattern7 => 7,
        }
    }

    /// Whether the module at column `x`, row `y` gets inverted
    #[inline]
    pub fn should_invert(&self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Unmasked => false,
            MaskPattern::Pattern0 => (x + y) % 2 == 0,
            MaskPattern::Pattern1 => y % 2 == 0,
            MaskPattern::Pattern2 => x % 3 == 0,
            MaskPattern::Pattern3 => (x + y) % 3 == 0,
            MaskPattern::Pattern4 => (y / 2 + x / 3) % 2 == 0,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3 == 0,
            MaskPattern::Pattern6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
        }
    }

    /// Mask a plain module value
    #[inline]
    pub fn apply(&self, x: usize, y: usize, value: bool) -> bool {
        value ^ self.should_invert(x, y)
    }

    /// Mask a canvas module. Service and unwritten modules pass unchanged.
    pub fn apply_to_bit(&self, bit: CanvasBit) -> CanvasBit {
        match bit.value {
            Some(value) if !bit.is_service => {
                bit.with_value(Some(self.apply(bit.position.x, bit.position.y, value)))
            }
            _ => bit,
        }
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskPattern::Unmasked => f.write_str("unmasked"),
            other => write!(f, "mask {}", other.number()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn light_grid(mask: MaskPattern) -> [[bool; 6]; 6] {
        let mut grid = [[false; 6]; 6];
        for (x, column) in grid.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                *cell = mask.apply(x, y, false);
            }
        }
        grid
    }

    #[test]
    fn test_mask_zero_checkerboard() {
        let grid = light_grid(MaskPattern::Pattern0);
        for x in 0..6 {
            for y in 0..6 {
                assert_eq!(grid[x][y], (x + y) % 2 == 0);
            }
        }
    }

    #[test]
    fn test_mask_one_rows() {
        // Indexed [x][y]: every column alternates starting with dark
        for column in light_grid(MaskPattern::Pattern1) {
            assert_eq!(column, [true, false, true, false, true, false]);
        }
    }

    #[test]
    fn test_mask_five_and_six() {
        let five = light_grid(MaskPattern::Pattern5);
        assert!(five[0].iter().all(|&v| v));
        assert_eq!(five[1], [true, false, false, false, false, false]);
        let six = light_grid(MaskPattern::Pattern6);
        assert_eq!(six[2], [true, true, false, true, true, false]);
    }

    #[test]
    fn test_mask_duality() {
        for mask in MaskPattern::ALL {
            for x in 0..12 {
                for y in 0..12 {
                    for value in [false, true] {
                        assert_eq!(mask.apply(x, y, mask.apply(x, y, value)), value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_service_bits_unchanged() {
        let bit = CanvasBit {
            position: Position::new(0, 0),
            value: Some(false),
            is_service: true,
        };
        assert_eq!(MaskPattern::Pattern0.apply_to_bit(bit), bit);
        let data = CanvasBit {
            is_service: false,
            ..bit
        };
        assert_eq!(MaskPattern::Pattern0.apply_to_bit(data).value, Some(true));
        assert_eq!(MaskPattern::Unmasked.apply_to_bit(data), data);
    }

    #[test]
    fn test_mask_numbers() {
        for n in -1..=7 {
            assert_eq!(MaskPattern::from_number(n).unwrap().number(), n);
        }
        assert_eq!(MaskPattern::from_number(8), Err(Error::InvalidMaskNumber(8)));
        assert_eq!(MaskPattern::from_number(-2), Err(Error::InvalidMaskNumber(-2)));
    }
}
