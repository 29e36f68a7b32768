/// Bit-addressable buffer used by every stage of the encoder
use crate::error::{Error, Result};

/// Growable sequence of bits with a movable read/write cursor.
///
/// Bits are packed most-significant first. Writes start at the cursor, move it
/// forward and extend the length only when the cursor passes it, so writing
/// below the length overwrites in place. Reads fail past the length.
#[derive(Debug, Clone)]
pub struct BitStream {
    buffer: Vec<u8>,
    length: usize,
    pointer: usize,
}

impl BitStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self {
            buffer: vec![0; 2],
            length: 0,
            pointer: 0,
        }
    }

    /// Create an empty stream with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            buffer: vec![0; bits.div_ceil(8).max(1)],
            length: 0,
            pointer: 0,
        }
    }

    /// Number of committed bits
    pub fn len(&self) -> usize {
        self.length
    }

    /// True when nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Current cursor position
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Move the cursor. It may be placed past the length; the next write
    /// then extends the stream up to the cursor.
    pub fn set_pointer(&mut self, pointer: usize) {
        self.pointer = pointer;
    }

    /// Move the cursor back to the first bit
    pub fn rewind(&mut self) {
        self.pointer = 0;
    }

    /// Whether `bits` more bits can be read from the cursor
    pub fn can_read(&self, bits: usize) -> bool {
        self.pointer + bits <= self.length
    }

    /// Write a single bit
    pub fn write_bit(&mut self, bit: bool) {
        self.reserve(1);
        let (index, offset) = self.split_pointer();
        let flag = 0x80u8 >> offset;
        if bit {
            self.buffer[index] |= flag;
        } else {
            self.buffer[index] &= !flag;
        }
        self.advance(1);
    }

    /// Write a sequence of bits
    pub fn write_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Write eight bits, splitting across two storage bytes when the cursor
    /// is not byte aligned
    pub fn write_byte(&mut self, value: u8) {
        self.reserve(8);
        let (index, offset) = self.split_pointer();
        if offset == 0 {
            self.buffer[index] = value;
            self.advance(8);
            return;
        }

        // Tail of the current byte takes the high bits of `value`
        let tail_mask = 0xFFu8 >> offset;
        self.buffer[index] = (self.buffer[index] & !tail_mask) | (value >> offset);

        // Head of the next byte takes the remaining low bits
        let head_mask = !(0xFFu8 >> offset);
        self.buffer[index + 1] = (self.buffer[index + 1] & !head_mask) | (value << (8 - offset));
        self.advance(8);
    }

    /// Write a sequence of bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Write the low `bits` bits of `value`, most significant first.
    ///
    /// Fails when `bits` is outside 1..=32 or `value` needs more than `bits`
    /// bits.
    pub fn write_int(&mut self, value: u32, bits: u8) -> Result<()> {
        if !(1..=32).contains(&bits) {
            return Err(Error::InvalidBitWidth(bits));
        }
        if bits < 32 && value >> bits != 0 {
            return Err(Error::ValueTooWide { value, bits });
        }

        self.reserve(bits as usize);
        let mut remaining = bits as usize;
        while remaining > 0 {
            let (index, offset) = self.split_pointer();
            let room = 8 - offset;
            let take = room.min(remaining);
            let chunk = ((value >> (remaining - take)) & ((1u32 << take) - 1)) as u8;
            let shift = room - take;
            let mask = (((1u16 << take) - 1) as u8) << shift;
            self.buffer[index] = (self.buffer[index] & !mask) | (chunk << shift);
            self.advance(take);
            remaining -= take;
        }
        Ok(())
    }

    /// Append the whole content of `other` at the cursor, bytes first and the
    /// trailing bits one by one. `other`'s cursor is rewound before copying.
    pub fn write_bit_stream(&mut self, other: &mut BitStream) -> Result<()> {
        other.rewind();
        self.reserve(other.len());
        while other.can_read(8) {
            self.write_byte(other.read_byte()?);
        }
        while other.can_read(1) {
            self.write_bit(other.read_bit()?);
        }
        Ok(())
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> Result<bool> {
        self.check_readable(1)?;
        let (index, offset) = self.split_pointer();
        let bit = self.buffer[index] & (0x80u8 >> offset) != 0;
        self.pointer += 1;
        Ok(bit)
    }

    /// Read eight bits
    pub fn read_byte(&mut self) -> Result<u8> {
        self.check_readable(8)?;
        let (index, offset) = self.split_pointer();
        let byte = if offset == 0 {
            self.buffer[index]
        } else {
            (self.buffer[index] << offset) | (self.buffer[index + 1] >> (8 - offset))
        };
        self.pointer += 8;
        Ok(byte)
    }

    /// Read `bits` bits (1..=32) as an unsigned integer
    pub fn read_int(&mut self, bits: u8) -> Result<u32> {
        if !(1..=32).contains(&bits) {
            return Err(Error::InvalidBitWidth(bits));
        }
        self.check_readable(bits as usize)?;
        let mut value = 0u32;
        for _ in 0..bits {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }

    /// Committed bits packed into bytes; a trailing partial byte is padded
    /// with zero bits
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.buffer[..self.length.div_ceil(8)].to_vec();
        let tail = self.length % 8;
        if tail != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= !(0xFFu8 >> tail);
            }
        }
        bytes
    }

    fn split_pointer(&self) -> (usize, usize) {
        (self.pointer / 8, self.pointer % 8)
    }

    fn check_readable(&self, bits: usize) -> Result<()> {
        if self.can_read(bits) {
            Ok(())
        } else {
            Err(Error::EndOfStream {
                pointer: self.pointer,
                requested: bits,
                length: self.length,
            })
        }
    }

    /// Grow storage (doubling) so `bits` bits fit after the cursor
    fn reserve(&mut self, bits: usize) {
        let needed = (self.pointer + bits).div_ceil(8);
        if needed > self.buffer.len() {
            let mut new_len = self.buffer.len().max(1);
            while new_len < needed {
                new_len *= 2;
            }
            self.buffer.resize(new_len, 0);
        }
    }

    fn advance(&mut self, bits: usize) {
        self.pointer += bits;
        if self.pointer > self.length {
            self.length = self.pointer;
        }
    }
}

impl Default for BitStream {
    fn default() -> Self {
        Self::new()
    }
}
