//! Capacity and layout tables for all 40 versions and 4 error-correction
//! levels.
//!
//! The per-version block structure is stored compactly: the two standard
//! tables below plus the closed-form raw module count are enough to derive
//! the full `(ec codewords, group-1 blocks, group-1 data, group-2 blocks,
//! group-2 data)` layout for any version and level.

use crate::qrcode::{EcLevel, Version};

/// Error-correction codewords per block, indexed `[level ordinal][version - 1]`.
const ECC_CODEWORDS_PER_BLOCK: [[u8; 40]; 4] = [
    // Low
    [
        7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // Medium
    [
        10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    // Quartile
    [
        13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // High
    [
        17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

/// Number of error-correction blocks, indexed `[level ordinal][version - 1]`.
const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 40]; 4] = [
    // Low
    [
        1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    // Medium
    [
        1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
        25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    // Quartile
    [
        1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    // High
    [
        1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// The block layout of one version at one error-correction level.
///
/// Data codewords are split into `g1_blocks` blocks of `g1_data` codewords
/// followed by `g2_blocks` blocks of `g2_data` codewords, where
/// `g2_data = g1_data + 1` whenever the second group is non-empty. Every
/// block gets `ec_per_block` error-correction codewords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EcBlocks {
    pub ec_per_block: usize,
    pub g1_blocks: usize,
    pub g1_data: usize,
    pub g2_blocks: usize,
    pub g2_data: usize,
}

impl EcBlocks {
    pub(crate) fn total_blocks(&self) -> usize {
        self.g1_blocks + self.g2_blocks
    }

    pub(crate) fn total_data(&self) -> usize {
        self.g1_blocks * self.g1_data + self.g2_blocks * self.g2_data
    }
}

/// Number of data-bearing modules in a symbol: everything outside the
/// function patterns and the format/version areas.
pub(crate) fn num_raw_modules(version: Version) -> usize {
    let ver = usize::from(version.value());
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let numalign = ver / 7 + 2;
        result -= (25 * numalign - 10) * numalign - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    result
}

/// Zero bits appended after the interleaved codeword stream to fill the
/// symbol exactly.
pub(crate) fn remainder_bits(version: Version) -> usize {
    num_raw_modules(version) % 8
}

pub(crate) fn num_data_codewords(version: Version, ecl: EcLevel) -> usize {
    let v = usize::from(version.value()) - 1;
    let e = ecl.ordinal();
    num_raw_modules(version) / 8
        - usize::from(ECC_CODEWORDS_PER_BLOCK[e][v]) * usize::from(NUM_ERROR_CORRECTION_BLOCKS[e][v])
}

pub(crate) fn ec_blocks(version: Version, ecl: EcLevel) -> EcBlocks {
    let v = usize::from(version.value()) - 1;
    let e = ecl.ordinal();
    let ec_per_block = usize::from(ECC_CODEWORDS_PER_BLOCK[e][v]);
    let num_blocks = usize::from(NUM_ERROR_CORRECTION_BLOCKS[e][v]);
    let raw_codewords = num_raw_modules(version) / 8;
    let g1_blocks = num_blocks - raw_codewords % num_blocks;
    let g1_data = raw_codewords / num_blocks - ec_per_block;
    let g2_blocks = num_blocks - g1_blocks;
    EcBlocks {
        ec_per_block,
        g1_blocks,
        g1_data,
        g2_blocks,
        g2_data: if g2_blocks == 0 { 0 } else { g1_data + 1 },
    }
}

/// Alignment-pattern centre coordinates, ascending; the same list applies to
/// rows and columns. Empty for version 1.
pub(crate) fn alignment_positions(version: Version) -> Vec<usize> {
    let ver = usize::from(version.value());
    if ver == 1 {
        return Vec::new();
    }
    let numalign = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        ((ver * 4 + numalign * 2 + 1) / (numalign * 2 - 2)) * 2
    };
    let size = version.size();
    let mut rest: Vec<usize> = Vec::with_capacity(numalign - 1);
    let mut p = size - 7;
    for _ in 0..numalign - 1 {
        rest.push(p);
        p -= step;
    }
    rest.reverse();
    let mut positions = Vec::with_capacity(numalign);
    positions.push(6);
    positions.extend(rest);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_modules_and_remainders() {
        assert_eq!(num_raw_modules(Version::new(1)), 208);
        assert_eq!(num_raw_modules(Version::new(2)), 359);
        assert_eq!(num_raw_modules(Version::new(7)), 1568);
        assert_eq!(num_raw_modules(Version::new(40)), 29648);
        assert_eq!(remainder_bits(Version::new(1)), 0);
        assert_eq!(remainder_bits(Version::new(2)), 7);
        assert_eq!(remainder_bits(Version::new(7)), 0);
        assert_eq!(remainder_bits(Version::new(14)), 3);
        assert_eq!(remainder_bits(Version::new(21)), 4);
        assert_eq!(remainder_bits(Version::new(28)), 3);
        assert_eq!(remainder_bits(Version::new(35)), 0);
    }

    #[test]
    fn version_one_capacities() {
        assert_eq!(num_data_codewords(Version::new(1), EcLevel::Low), 19);
        assert_eq!(num_data_codewords(Version::new(1), EcLevel::Medium), 16);
        assert_eq!(num_data_codewords(Version::new(1), EcLevel::Quartile), 13);
        assert_eq!(num_data_codewords(Version::new(1), EcLevel::High), 9);
        assert_eq!(num_data_codewords(Version::new(40), EcLevel::Low), 2956);
        assert_eq!(num_data_codewords(Version::new(40), EcLevel::High), 1276);
    }

    #[test]
    fn block_layout_known_values() {
        let b = ec_blocks(Version::new(1), EcLevel::Medium);
        assert_eq!(
            b,
            EcBlocks { ec_per_block: 10, g1_blocks: 1, g1_data: 16, g2_blocks: 0, g2_data: 0 }
        );
        // Version 5-H splits into 2 blocks of 11 and 2 blocks of 12.
        let b = ec_blocks(Version::new(5), EcLevel::High);
        assert_eq!(
            b,
            EcBlocks { ec_per_block: 22, g1_blocks: 2, g1_data: 11, g2_blocks: 2, g2_data: 12 }
        );
    }

    #[test]
    fn block_layout_is_consistent_everywhere() {
        for v in 1..=40u8 {
            let version = Version::new(v);
            for ecl in [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High] {
                let b = ec_blocks(version, ecl);
                assert_eq!(b.total_data(), num_data_codewords(version, ecl));
                assert_eq!(
                    b.total_data() + b.total_blocks() * b.ec_per_block,
                    num_raw_modules(version) / 8
                );
                if b.g2_blocks > 0 {
                    assert_eq!(b.g2_data, b.g1_data + 1);
                }
            }
        }
    }

    #[test]
    fn alignment_position_lists() {
        assert!(alignment_positions(Version::new(1)).is_empty());
        assert_eq!(alignment_positions(Version::new(2)), vec![6, 18]);
        assert_eq!(alignment_positions(Version::new(7)), vec![6, 22, 38]);
        assert_eq!(alignment_positions(Version::new(32)), vec![6, 34, 60, 86, 112, 138]);
        assert_eq!(alignment_positions(Version::new(40)), vec![6, 30, 58, 86, 114, 142, 170]);
    }
}
