//! Splitting encoded data into correction blocks and interleaving them back.

use crate::encoder::bitstream::BitStream;
use crate::error::Result;

/// Split the whole bytes of `stream` into `num_blocks` near-equal blocks.
///
/// When the byte count does not divide evenly, the last `remainder` blocks
/// are one byte longer than the others. The stream is read from the start.
pub fn split_into_blocks(stream: &mut BitStream, num_blocks: usize) -> Result<Vec<Vec<u8>>> {
    let num_blocks = num_blocks.max(1);
    let total = stream.len() / 8;
    let short_len = total / num_blocks;
    let num_short = num_blocks - total % num_blocks;

    stream.rewind();
    let mut blocks = Vec::with_capacity(num_blocks);
    for i in 0..num_blocks {
        let len = if i < num_short { short_len } else { short_len + 1 };
        let mut block = Vec::with_capacity(len);
        for _ in 0..len {
            block.push(stream.read_byte()?);
        }
        blocks.push(block);
    }
    Ok(blocks)
}

/// Interleave data blocks and then correction blocks, one byte from each
/// block per round. Shorter blocks simply drop out of the later rounds.
pub fn interleave(data_blocks: &[Vec<u8>], ecc_blocks: &[Vec<u8>]) -> BitStream {
    let total: usize = data_blocks
        .iter()
        .chain(ecc_blocks)
        .map(|block| block.len())
        .sum();
    let mut stream = BitStream::with_capacity(total * 8);

    for blocks in [data_blocks, ecc_blocks] {
        let rounds = blocks.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..rounds {
            for block in blocks {
                if let Some(&byte) = block.get(i) {
                    stream.write_byte(byte);
                }
            }
        }
    }
    stream
}
