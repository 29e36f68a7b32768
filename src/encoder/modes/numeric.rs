/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, trailing 2 digits = 7 bits, trailing digit = 4 bits
use super::{EncodingMode, count_tier};
use crate::encoder::bitstream::BitStream;
use crate::error::{Error, Result};
use crate::models::Version;

const COUNT_BITS: [u8; 3] = [10, 12, 14];

/// Encoder for digit-only input
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericEncoder;

impl EncodingMode for NumericEncoder {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn mode_indicator(&self) -> u8 {
        0b0001
    }

    fn count_bits(&self, version: Version) -> u8 {
        COUNT_BITS[count_tier(version)]
    }

    fn encode(&self, input: &str) -> Result<BitStream> {
        if input.is_empty() {
            return Err(Error::EmptyInput(self.name()));
        }
        if let Some(character) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::InvalidCharacter {
                encoding: self.name(),
                character,
            });
        }

        let mut stream = BitStream::with_capacity(input.len() * 10 / 3 + 4);
        for chunk in input.as_bytes().chunks(3) {
            let value = chunk
                .iter()
                .fold(0u32, |acc, &digit| acc * 10 + (digit - b'0') as u32);
            let bits = match chunk.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            stream.write_int(value, bits)?;
        }
        Ok(stream)
    }
}
