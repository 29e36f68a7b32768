//! Error types for QR code generation.
//!
//! Every failure in the generator is synchronous and deterministic: either the
//! caller supplied something the format cannot express, or a bit stream was read
//! past its committed length.

use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value that cannot be encoded or placed.
    InvalidArgument,
    /// A read went past the committed length of a bit stream.
    EndOfStream,
}

/// Errors that can occur while encoding data or painting a canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Read past the end of a bit stream.
    #[error("end of bit stream: {requested} bit(s) requested at {pointer}, length is {length}")]
    EndOfStream {
        /// Cursor position at the time of the read.
        pointer: usize,
        /// Number of bits the read needed.
        requested: usize,
        /// Committed length of the stream.
        length: usize,
    },

    /// Integer width outside 1..=32.
    #[error("cannot write an integer using {0} bits")]
    InvalidBitWidth(u8),

    /// Integer does not fit in the requested width.
    #[error("value {value} does not fit in {bits} bits")]
    ValueTooWide {
        /// Value passed to the writer.
        value: u32,
        /// Requested width.
        bits: u8,
    },

    /// Character not representable by the chosen encoding.
    #[error("invalid character {character:?} for {encoding} encoding")]
    InvalidCharacter {
        /// Name of the encoding that rejected the character.
        encoding: &'static str,
        /// Offending character.
        character: char,
    },

    /// Encoding rejects empty input.
    #[error("{0} encoding requires non-empty input")]
    EmptyInput(&'static str),

    /// Character count does not fit the header's count field.
    #[error("character count {count} does not fit in a {bits}-bit count field")]
    CountOverflow {
        /// Number of characters (or bytes) in the input.
        count: usize,
        /// Width of the count field.
        bits: u8,
    },

    /// Version number outside 1..=40.
    #[error("invalid QR code version {0}")]
    InvalidVersion(u32),

    /// Mask number outside -1..=7.
    #[error("invalid mask number {0}")]
    InvalidMaskNumber(i32),

    /// Input needs more data bits than version 40 offers.
    #[error("input needs {bits} data bits, more than any version holds at this correction level")]
    InputTooLong {
        /// Encoded size of the input.
        bits: usize,
    },

    /// Encoded data exceeds the capacity of the chosen version.
    #[error("data uses {used} bits but capacity is {capacity}")]
    DataOverCapacity {
        /// Bits used by header and body.
        used: usize,
        /// Available data bits.
        capacity: usize,
    },

    /// Coordinates outside the canvas.
    #[error("position ({x}, {y}) is outside a {size}x{size} canvas")]
    PositionOutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Side of the canvas.
        size: usize,
    },

    /// Bordered canvases are final.
    #[error("canvas is bordered and can no longer be modified")]
    CanvasBordered,

    /// Masks cannot be stacked.
    #[error("canvas is already masked")]
    CanvasAlreadyMasked,

    /// A service pattern was requested for a version that does not carry it.
    #[error("{pattern} patterns are not defined for version {version}")]
    UnsupportedVersion {
        /// Pattern name.
        pattern: &'static str,
        /// Requested version.
        version: u8,
    },

    /// Data stream did not fit into the canvas's data modules.
    #[error("canvas is too small: {remaining} data bit(s) left unplaced")]
    CanvasOverflow {
        /// Bits still unread when the canvas ran out of modules.
        remaining: usize,
    },
}

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EndOfStream { .. } => ErrorKind::EndOfStream,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let eos = Error::EndOfStream {
            pointer: 8,
            requested: 1,
            length: 8,
        };
        assert_eq!(eos.kind(), ErrorKind::EndOfStream);
        assert_eq!(Error::CanvasBordered.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::InvalidBitWidth(33).kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCharacter {
            encoding: "numeric",
            character: 'A',
        };
        assert_eq!(err.to_string(), "invalid character 'A' for numeric encoding");
    }
}
