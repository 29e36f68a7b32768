//! QR code data mode encoders
//!
//! This module contains encoders for the supported data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and a few symbols
//! - Byte: UTF-8 bytes

/// Alphanumeric mode (45-symbol table)
pub mod alphanumeric;
/// Byte mode (UTF-8)
pub mod byte;
/// Numeric mode (digits)
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use numeric::NumericEncoder;

use crate::encoder::bitstream::BitStream;
use crate::error::{Error, Result};
use crate::models::Version;
use std::fmt;

/// A data mode: turns text into a body stream and describes it with a header
pub trait EncodingMode: Sync {
    /// Human readable mode name
    fn name(&self) -> &'static str;

    /// 4-bit mode indicator
    fn mode_indicator(&self) -> u8;

    /// Width of the character-count field for `version`
    fn count_bits(&self, version: Version) -> u8;

    /// Number of units the count field describes
    fn char_count(&self, input: &str) -> usize {
        input.chars().count()
    }

    /// Encode the body (no header, no terminator)
    fn encode(&self, input: &str) -> Result<BitStream>;

    /// Mode indicator followed by the character count
    fn generate_header(&self, version: Version, input: &str) -> Result<BitStream> {
        let bits = self.count_bits(version);
        let count = self.char_count(input);
        if count >= 1usize << bits {
            return Err(Error::CountOverflow { count, bits });
        }

        let mut stream = BitStream::new();
        stream.write_int(self.mode_indicator() as u32, 4)?;
        stream.write_int(count as u32, bits)?;
        Ok(stream)
    }
}

/// Count-field width tier: versions 1-9, 10-26, 27-40
fn count_tier(version: Version) -> usize {
    match version.number() {
        0..=9 => 0,
        10..=26 => 1,
        _ => 2,
    }
}

/// Supported data modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits only
    Numeric,
    /// Alphanumeric character set
    Alphanumeric,
    /// Arbitrary UTF-8
    Byte,
}

static NUMERIC: NumericEncoder = NumericEncoder;
static ALPHANUMERIC: AlphanumericEncoder = AlphanumericEncoder;
static BYTE: ByteEncoder = ByteEncoder;

impl Mode {
    /// Encoder implementing this mode
    pub fn encoder(self) -> &'static dyn EncodingMode {
        match self {
            Mode::Numeric => &NUMERIC,
            Mode::Alphanumeric => &ALPHANUMERIC,
            Mode::Byte => &BYTE,
        }
    }

    /// Pick the densest mode able to hold `input`.
    ///
    /// One left-to-right scan; stops as soon as neither numeric nor
    /// alphanumeric can hold the input. Empty input selects alphanumeric.
    pub fn select(input: &str, force_byte: bool) -> Mode {
        if force_byte {
            return Mode::Byte;
        }

        let mut numeric = !input.is_empty();
        let mut alphanumeric = true;
        for c in input.chars() {
            numeric &= c.is_ascii_digit();
            alphanumeric &= alphanumeric::alphanumeric_value(c).is_some();
            if !numeric && !alphanumeric {
                return Mode::Byte;
            }
        }

        if numeric {
            Mode::Numeric
        } else {
            Mode::Alphanumeric
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoder().name())
    }
}
