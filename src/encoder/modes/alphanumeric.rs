/// Alphanumeric mode encoder (Mode 0010)
/// Accepted set: 0-9, A-Z, space, %*+-./: (input is upper-cased first)
/// Pairs = 11 bits, single = 6 bits
use super::{EncodingMode, count_tier};
use crate::encoder::bitstream::BitStream;
use crate::error::{Error, Result};
use crate::models::Version;

const COUNT_BITS: [u8; 3] = [9, 11, 13];

/// Symbol value of a character, ignoring ASCII case.
///
/// Values follow ISO/IEC 18004; `$` (37) is not accepted.
pub fn alphanumeric_value(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        ' ' => 36,
        '%' => 38,
        '*' => 39,
        '+' => 40,
        '-' => 41,
        '.' => 42,
        '/' => 43,
        ':' => 44,
        _ => return None,
    };
    Some(value)
}

/// Encoder for the alphanumeric character set
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    fn value_of(&self, c: char) -> Result<u32> {
        alphanumeric_value(c).ok_or(Error::InvalidCharacter {
            encoding: self.name(),
            character: c,
        })
    }
}

impl EncodingMode for AlphanumericEncoder {
    fn name(&self) -> &'static str {
        "alphanumeric"
    }

    fn mode_indicator(&self) -> u8 {
        0b0010
    }

    fn count_bits(&self, version: Version) -> u8 {
        COUNT_BITS[count_tier(version)]
    }

    fn encode(&self, input: &str) -> Result<BitStream> {
        let chars: Vec<char> = input.chars().collect();
        let mut stream = BitStream::with_capacity(chars.len() * 6);

        let mut pairs = chars.chunks_exact(2);
        for pair in &mut pairs {
            let value = self.value_of(pair[0])? * 45 + self.value_of(pair[1])?;
            stream.write_int(value, 11)?;
        }
        if let [last] = pairs.remainder() {
            stream.write_int(self.value_of(*last)?, 6)?;
        }
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_lengths() {
        for (input, expected) in [("", 0), (" ", 6), ("A", 6), ("AA", 11), ("AAA", 17)] {
            let stream = AlphanumericEncoder.encode(input).unwrap();
            assert_eq!(stream.len(), expected, "input {input:?}");
            assert_eq!(stream.pointer(), expected);
        }
    }

    #[test]
    fn test_alphanumeric_rejects() {
        assert!(AlphanumericEncoder.encode("A$").is_err());
        assert_eq!(
            AlphanumericEncoder.encode("A,").unwrap_err(),
            Error::InvalidCharacter {
                encoding: "alphanumeric",
                character: ','
            }
        );
    }

    #[test]
    fn test_alphanumeric_pair_value() {
        // "A1" = 10 * 45 + 1 = 451
        let mut stream = AlphanumericEncoder.encode("a1").unwrap();
        stream.rewind();
        assert_eq!(stream.read_int(11).unwrap(), 451);
    }

    #[test]
    fn test_symbol_values() {
        assert_eq!(alphanumeric_value('Z'), Some(35));
        assert_eq!(alphanumeric_value('z'), Some(35));
        assert_eq!(alphanumeric_value('*'), Some(39));
        assert_eq!(alphanumeric_value(':'), Some(44));
        assert_eq!(alphanumeric_value('$'), None);
        assert_eq!(alphanumeric_value('&'), None);
    }
}
