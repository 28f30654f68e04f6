//! Byte-mode data encoding: version selection, codeword assembly and block
//! interleaving.

use crate::bits::BitBuffer;
use crate::qrcode::{EcLevel, EncodeError, Version};
use crate::reed_solomon::ReedSolomon;
use crate::tables;

/// Byte-mode indicator, `0b0100`.
const MODE_BYTE: u32 = 0x4;

/// Width of the character-count field in byte mode.
pub(crate) fn char_count_bits(version: Version) -> u8 {
    if version.value() <= 9 {
        8
    } else {
        16
    }
}

fn needed_bits(payload_len: usize, version: Version) -> usize {
    4 + usize::from(char_count_bits(version)) + 8 * payload_len
}

/// Finds the smallest version whose data capacity at `ecl` holds the payload.
pub(crate) fn select_version(payload_len: usize, ecl: EcLevel) -> Result<Version, EncodeError> {
    for v in Version::MIN.value()..=Version::MAX.value() {
        let version = Version::new(v);
        if needed_bits(payload_len, version) <= tables::num_data_codewords(version, ecl) * 8 {
            return Ok(version);
        }
    }
    Err(EncodeError::DataOverCapacity(
        needed_bits(payload_len, Version::MAX),
        tables::num_data_codewords(Version::MAX, ecl) * 8,
    ))
}

/// Assembles the data codewords: mode indicator, character count, payload,
/// terminator, byte-boundary padding and alternating pad codewords.
pub(crate) fn build_data_codewords(payload: &[u8], version: Version, ecl: EcLevel) -> Vec<u8> {
    let capacity_bits = tables::num_data_codewords(version, ecl) * 8;
    debug_assert!(needed_bits(payload.len(), version) <= capacity_bits);

    let mut bb = BitBuffer::new();
    bb.append_bits(MODE_BYTE, 4);
    bb.append_bits(payload.len() as u32, char_count_bits(version));
    for &b in payload {
        bb.append_bits(u32::from(b), 8);
    }

    // Terminator, truncated when the capacity is nearly full.
    let terminator = core::cmp::min(4, capacity_bits - bb.len());
    bb.append_bits(0, terminator as u8);
    let to_boundary = bb.len().wrapping_neg() & 7;
    bb.append_bits(0, to_boundary as u8);
    debug_assert_eq!(bb.len() % 8, 0);

    for &pad in [0xec, 0x11].iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.append_bits(pad, 8);
    }
    bb.into_bytes()
}

/// Splits the data codewords into blocks, computes each block's EC codewords
/// and interleaves both streams column-major.
pub(crate) fn interleave(data: &[u8], version: Version, ecl: EcLevel) -> Vec<u8> {
    let layout = tables::ec_blocks(version, ecl);
    assert_eq!(data.len(), layout.total_data(), "wrong codeword count");

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(layout.total_blocks());
    let mut offset = 0;
    for _ in 0..layout.g1_blocks {
        blocks.push(&data[offset..offset + layout.g1_data]);
        offset += layout.g1_data;
    }
    for _ in 0..layout.g2_blocks {
        blocks.push(&data[offset..offset + layout.g2_data]);
        offset += layout.g2_data;
    }
    debug_assert_eq!(offset, data.len());

    let rs = ReedSolomon::new(layout.ec_per_block);
    let ecc: Vec<Vec<u8>> = blocks.iter().map(|block| rs.remainder(block)).collect();

    let total = data.len() + layout.total_blocks() * layout.ec_per_block;
    let mut out = Vec::with_capacity(total);
    let longest = core::cmp::max(layout.g1_data, layout.g2_data);
    for i in 0..longest {
        for block in &blocks {
            // Group-1 blocks have no codeword at the final group-2 index.
            if let Some(&cw) = block.get(i) {
                out.push(cw);
            }
        }
    }
    for i in 0..layout.ec_per_block {
        for block_ecc in &ecc {
            out.push(block_ecc[i]);
        }
    }
    debug_assert_eq!(out.len(), total);
    out
}
