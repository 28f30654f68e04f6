//! BCH-protected format and version information.

use crate::matrix::Matrix;
use crate::qrcode::{EcLevel, Mask, Version};

/// Generator polynomial of the BCH(15,5) format code.
const FORMAT_GEN: u32 = 0x537;

/// Fixed mask XORed onto the format word so it is never all-zero.
const FORMAT_MASK: u32 = 0x5412;

/// Generator polynomial of the BCH(18,6) version code.
const VERSION_GEN: u32 = 0x1f25;

/// The 15-bit format word for an error-correction level and mask pattern.
pub(crate) fn format_bits(ecl: EcLevel, mask: Mask) -> u32 {
    let data = u32::from(ecl.format_bits() << 3 | mask.value());
    let mut rem = data << 10;
    for i in (0..5).rev() {
        if rem & (1 << (i + 10)) != 0 {
            rem ^= FORMAT_GEN << i;
        }
    }
    ((data << 10) | rem) ^ FORMAT_MASK
}

/// The 18-bit version word; meaningful only for versions 7 and up.
pub(crate) fn version_bits(version: Version) -> u32 {
    let data = u32::from(version.value());
    let mut rem = data << 12;
    for i in (0..6).rev() {
        if rem & (1 << (i + 12)) != 0 {
            rem ^= VERSION_GEN << i;
        }
    }
    (data << 12) | rem
}

/// Writes the format word to both of its locations, least significant bit
/// closest to the top-left finder, and re-asserts the dark module.
pub(crate) fn write_format(matrix: &mut Matrix, ecl: EcLevel, mask: Mask) {
    let bits = format_bits(ecl, mask);
    let bit = |i: usize| bits >> i & 1 != 0;
    let size = matrix.size;

    // Copy along column 8, skipping the timing row.
    for i in 0..6 {
        matrix.set(i, 8, bit(i));
    }
    matrix.set(7, 8, bit(6));
    matrix.set(8, 8, bit(7));
    for i in 8..15 {
        matrix.set(size - 15 + i, 8, bit(i));
    }

    // Copy along row 8, skipping the timing column.
    for i in 0..8 {
        matrix.set(8, size - 1 - i, bit(i));
    }
    matrix.set(8, 7, bit(8));
    for i in 9..15 {
        matrix.set(8, 14 - i, bit(i));
    }

    matrix.set(size - 8, 8, true);
}

/// Writes the version word to its two 6x3 blocks (bottom-left and
/// top-right).
pub(crate) fn write_version(matrix: &mut Matrix, version: Version) {
    debug_assert!(version.value() >= 7);
    let bits = version_bits(version);
    let size = matrix.size;
    for i in 0..18 {
        let bit = bits >> i & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        matrix.set(a, b, bit);
        matrix.set(b, a, bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Residue of a word modulo a BCH generator of the given degree.
    fn bch_residue(word: u32, gen: u32, degree: u32, data_bits: u32) -> u32 {
        let mut rem = word;
        for i in (0..data_bits).rev() {
            if rem & (1 << (i + degree)) != 0 {
                rem ^= gen << i;
            }
        }
        rem
    }

    #[test]
    fn format_word_known_answers() {
        // Medium with mask 0 encodes to all-zero before the fixed mask.
        assert_eq!(format_bits(EcLevel::Medium, Mask::new(0)), 0x5412);
        assert_eq!(format_bits(EcLevel::Low, Mask::new(0)), 0x77c4);
    }

    #[test]
    fn format_words_are_valid_codewords() {
        for ecl in [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High] {
            for m in 0..8 {
                let word = format_bits(ecl, Mask::new(m)) ^ FORMAT_MASK;
                assert_eq!(bch_residue(word, FORMAT_GEN, 10, 5), 0);
                assert_eq!(word >> 10, u32::from(ecl.format_bits() << 3 | m));
            }
        }
    }

    #[test]
    fn version_word_known_answer() {
        assert_eq!(version_bits(Version::new(7)), 0x07c94);
    }

    #[test]
    fn version_words_are_valid_codewords() {
        for v in 7..=40u8 {
            let word = version_bits(Version::new(v));
            assert_eq!(bch_residue(word, VERSION_GEN, 12, 6), 0);
            assert_eq!(word >> 12, u32::from(v));
        }
    }

    #[test]
    fn format_placement_matches_both_copies() {
        let version = Version::new(2);
        let mut m = Matrix::new(version);
        let size = m.size;
        write_format(&mut m, EcLevel::Quartile, Mask::new(5));
        let bits = format_bits(EcLevel::Quartile, Mask::new(5));
        for i in 0..15 {
            let expect = bits >> i & 1 != 0;
            // Copy around the top-left finder.
            let around = match i {
                0..=5 => m.get(i, 8),
                6 => m.get(7, 8),
                7 => m.get(8, 8),
                8 => m.get(8, 7),
                _ => m.get(8, 14 - i),
            };
            // Split copy under the top-right and beside the bottom-left.
            let split = if i < 8 { m.get(8, size - 1 - i) } else { m.get(size - 15 + i, 8) };
            assert_eq!(around, expect, "bit {}", i);
            assert_eq!(split, expect, "bit {}", i);
        }
        assert!(m.get(size - 8, 8));
    }
}
