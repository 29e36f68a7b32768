/// Byte mode encoder (Mode 0100)
/// Each UTF-8 byte of the input is written as-is
use super::{EncodingMode, count_tier};
use crate::encoder::bitstream::BitStream;
use crate::error::{Error, Result};
use crate::models::Version;

const COUNT_BITS: [u8; 3] = [8, 16, 16];

/// Encoder for arbitrary UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteEncoder;

impl EncodingMode for ByteEncoder {
    fn name(&self) -> &'static str {
        "byte"
    }

    fn mode_indicator(&self) -> u8 {
        0b0100
    }

    fn count_bits(&self, version: Version) -> u8 {
        COUNT_BITS[count_tier(version)]
    }

    fn char_count(&self, input: &str) -> usize {
        input.len()
    }

    fn encode(&self, input: &str) -> Result<BitStream> {
        if input.is_empty() {
            return Err(Error::EmptyInput(self.name()));
        }
        let mut stream = BitStream::with_capacity(input.len() * 8);
        stream.write_bytes(input.as_bytes());
        Ok(stream)
    }
}
