use crate::error::{Error, Result};
use crate::models::{ECLevel, Version};

/// Error correction block layout for one version and level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Number of blocks the data codewords are split into
    pub num_blocks: usize,
    /// Correction codewords appended to every block
    pub ecc_per_block: usize,
}

// ISO/IEC 18004 (Model 2) block tables, as published by the Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// 15-bit format words (5 data bits BCH(15,5)-protected, XOR 0x5412).
// Index: [ec_level][mask]
const FORMAT_INFORMATION: [[u16; 8]; 4] = [
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976], // Low
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0], // Medium
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED], // Quartile
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B], // High
];

// 18-bit version words (6 data bits BCH(18,6)-protected) for versions 7-40
const VERSION_INFORMATION: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78,
    0x1145D, 0x12A17, 0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB,
    0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];

/// Block layout for `version` at `ec_level`
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.index();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Number of error correction blocks for `version` at `ec_level`
pub fn correction_block_count(version: Version, ec_level: ECLevel) -> usize {
    ec_block_info(version, ec_level).num_blocks
}

/// Correction codewords appended to each block
pub fn correction_bytes_per_block(version: Version, ec_level: ECLevel) -> usize {
    ec_block_info(version, ec_level).ecc_per_block
}

/// Modules available for data and correction codewords, remainder bits included
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Data codewords (excluding correction) a symbol can carry
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    num_raw_data_modules(version) / 8 - info.ecc_per_block * info.num_blocks
}

/// Data bits a symbol can carry at the given level
pub fn available_data_bits(version: Version, ec_level: ECLevel) -> usize {
    num_data_codewords(version, ec_level) * 8
}

/// Alignment pattern centers for a given version.
///
/// Version 1 has none. The first center is always 6, the last `size - 7`, and
/// the ones between are spaced evenly by an even step.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let mut positions = vec![6usize; num_align];
    let mut pos = version.size() - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos -= step;
    }
    positions
}

/// 15-bit format word for `ec_level` combined with mask `mask` (0-7)
pub fn format_information(ec_level: ECLevel, mask: u8) -> Result<u16> {
    FORMAT_INFORMATION[ec_level.index()]
        .get(mask as usize)
        .copied()
        .ok_or(Error::InvalidMaskNumber(mask as i32))
}

/// 18-bit version word; only versions 7-40 carry one
pub fn version_information(version: Version) -> Result<u32> {
    let v = version.number();
    if v < 7 {
        return Err(Error::UnsupportedVersion {
            pattern: "version information",
            version: v,
        });
    }
    Ok(VERSION_INFORMATION[v as usize - 7])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u32) -> Version {
        Version::new(n).unwrap()
    }

    // Polynomial remainder of `value << shift` over GF(2)
    fn bch_remainder(value: u32, generator: u32, shift: u32) -> u32 {
        let mut rem = value << shift;
        let gen_degree = 31 - generator.leading_zeros();
        while rem != 0 && 31 - rem.leading_zeros() >= gen_degree {
            rem ^= generator << (31 - rem.leading_zeros() - gen_degree);
        }
        rem
    }

    #[test]
    fn test_format_words_match_bch() {
        for level in ECLevel::ALL {
            for mask in 0..8u8 {
                let data = ((level.format_bits() as u32) << 3) | mask as u32;
                let expected = ((data << 10) | bch_remainder(data, 0x537, 10)) ^ 0x5412;
                assert_eq!(format_information(level, mask).unwrap() as u32, expected);
            }
        }
        assert!(format_information(ECLevel::L, 8).is_err());
    }

    #[test]
    fn test_version_words_match_bch() {
        for n in 7..=40u32 {
            let expected = (n << 12) | bch_remainder(n, 0x1F25, 12);
            assert_eq!(version_information(v(n)).unwrap(), expected, "version {n}");
        }
        assert!(version_information(v(6)).is_err());
    }

    #[test]
    fn test_available_data_bits() {
        assert_eq!(available_data_bits(v(1), ECLevel::L), 152);
        assert_eq!(available_data_bits(v(1), ECLevel::Q), 104);
        assert_eq!(available_data_bits(v(1), ECLevel::H), 72);
        assert_eq!(available_data_bits(v(5), ECLevel::Q), 496);
        assert_eq!(available_data_bits(v(40), ECLevel::L), 23648);
        assert_eq!(available_data_bits(v(40), ECLevel::H), 10208);
    }

    #[test]
    fn test_capacity_grows_with_version() {
        for level in ECLevel::ALL {
            let mut previous = 0;
            for version in Version::all() {
                let bits = available_data_bits(version, level);
                assert!(bits > previous, "{level} v{version}");
                previous = bits;
            }
        }
    }

    #[test]
    fn test_raw_modules_fit_codewords() {
        for version in Version::all() {
            let raw = num_raw_data_modules(version);
            // Remainder bits are 0, 3, 4 or 7
            assert!(matches!(raw % 8, 0 | 3 | 4 | 7), "version {version}");
        }
        assert_eq!(num_raw_data_modules(v(1)), 208);
        assert_eq!(num_raw_data_modules(v(7)), 1568);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(32)), vec![6, 34, 60, 86, 112, 138]);
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_block_info() {
        assert_eq!(
            ec_block_info(v(5), ECLevel::Q),
            EcBlockInfo {
                num_blocks: 4,
                ecc_per_block: 18
            }
        );
        assert_eq!(correction_block_count(v(1), ECLevel::H), 1);
        assert_eq!(correction_bytes_per_block(v(1), ECLevel::L), 7);
    }
}
