//! Data encoding side of the generator
//!
//! Turns text into the final codeword stream that gets placed on a canvas:
//! mode selection and padding, block splitting, Reed-Solomon correction and
//! interleaving.

/// Bit-level read/write buffer
pub mod bitstream;
/// Block splitting and interleaving
pub mod byte_chain;
/// Mode/version selection and padding
pub mod data_encoder;
/// Numeric, alphanumeric and byte mode encoders
pub mod modes;
/// GF(256) Reed-Solomon correction codewords
pub mod reed_solomon;
/// Capacity, block, format and version tables
pub mod tables;

pub use bitstream::BitStream;
pub use data_encoder::{EncodedData, encode_input};
pub use modes::{EncodingMode, Mode};

use crate::error::Result;
use crate::models::{ECLevel, QrCodeData};
use tracing::debug;

/// Encode `input` and add error correction, producing everything a canvas
/// needs.
pub fn encode_data(input: &str, force_byte: bool, ec_level: ECLevel) -> Result<QrCodeData> {
    let EncodedData {
        mut stream,
        version,
        ec_level,
        ..
    } = encode_input(input, force_byte, ec_level)?;

    let info = tables::ec_block_info(version, ec_level);
    let data_blocks = byte_chain::split_into_blocks(&mut stream, info.num_blocks)?;
    let ecc_blocks = reed_solomon::correction_chain(&data_blocks, info.ecc_per_block);
    debug!(
        blocks = info.num_blocks,
        ecc_per_block = info.ecc_per_block,
        "computed error correction"
    );

    let interleaved = byte_chain::interleave(&data_blocks, &ecc_blocks);
    Ok(QrCodeData::new(version, ec_level, interleaved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_hello_world_codewords() {
        let data = encode_data("HELLO WORLD", false, ECLevel::Q).unwrap();
        assert_eq!(data.version(), Version::MIN);
        assert_eq!(data.ec_level(), ECLevel::Q);
        assert_eq!(
            data.stream().to_bytes(),
            vec![
                32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, // data
                168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16, // correction
            ]
        );
    }

    #[test]
    fn test_stream_fills_codeword_capacity() {
        for level in ECLevel::ALL {
            let input = "The quick brown fox jumps over the lazy dog";
            let data = encode_data(input, false, level).unwrap();
            let raw = tables::num_raw_data_modules(data.version());
            assert_eq!(data.stream().len(), raw / 8 * 8, "level {level}");
        }
    }
}
