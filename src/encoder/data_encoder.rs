//! Data encoding: mode selection, version selection and padding.

use crate::encoder::bitstream::BitStream;
use crate::encoder::modes::Mode;
use crate::encoder::tables::available_data_bits;
use crate::error::{Error, Result};
use crate::models::{ECLevel, Version};
use tracing::debug;

/// Pad codewords alternated after the terminator
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Maximum length of the terminator sequence
const TERMINATOR_BITS: usize = 4;

/// Header, body and padding of one symbol, before error correction
#[derive(Debug, Clone)]
pub struct EncodedData {
    /// Header + body + terminator + padding, exactly `available_data_bits` long
    pub stream: BitStream,
    /// Smallest version able to hold the data
    pub version: Version,
    /// Requested correction level
    pub ec_level: ECLevel,
    /// Mode the body was encoded with
    pub mode: Mode,
}

/// Encode `input` into a padded data stream for the smallest fitting version.
pub fn encode_input(input: &str, force_byte: bool, ec_level: ECLevel) -> Result<EncodedData> {
    let mode = Mode::select(input, force_byte);
    let encoder = mode.encoder();
    let mut body = encoder.encode(input)?;

    let mut version = optimal_version(body.len(), ec_level)?;
    let mut header = encoder.generate_header(version, input)?;
    while header.len() + body.len() > available_data_bits(version, ec_level) {
        version = version.next().ok_or(Error::InputTooLong {
            bits: header.len() + body.len(),
        })?;
        header = encoder.generate_header(version, input)?;
    }

    let capacity = available_data_bits(version, ec_level);
    let mut stream = header;
    stream.write_bit_stream(&mut body)?;
    let used = stream.len();
    add_padding(&mut stream, capacity)?;

    debug!(
        %mode,
        version = version.number(),
        %ec_level,
        used,
        capacity,
        "encoded input"
    );

    Ok(EncodedData {
        stream,
        version,
        ec_level,
        mode,
    })
}

/// Smallest version whose capacity is strictly greater than `bits`
pub fn optimal_version(bits: usize, ec_level: ECLevel) -> Result<Version> {
    Version::all()
        .find(|&version| bits < available_data_bits(version, ec_level))
        .ok_or(Error::InputTooLong { bits })
}

/// Terminator, zero bits up to the byte boundary, then alternating pad bytes
/// until the stream is `capacity` bits long.
fn add_padding(stream: &mut BitStream, capacity: usize) -> Result<()> {
    let used = stream.len();
    if used > capacity {
        return Err(Error::DataOverCapacity { used, capacity });
    }

    let terminator = TERMINATOR_BITS.min(capacity - used);
    stream.write_bits(&[false; TERMINATOR_BITS][..terminator]);

    let misalignment = stream.len() % 8;
    if misalignment != 0 {
        for _ in misalignment..8 {
            stream.write_bit(false);
        }
    }

    for &pad in PAD_BYTES.iter().cycle() {
        if stream.len() + 8 > capacity {
            break;
        }
        stream.write_byte(pad);
    }
    Ok(())
}
