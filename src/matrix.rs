//! The module grid, its reserved-cell shadow and the zig-zag data placement.

use crate::qrcode::Version;
use crate::tables;

/// A square grid of modules plus a parallel reservation grid.
///
/// Reserved cells belong to function patterns or to the format/version
/// areas; data placement and masking must leave them alone. Coordinates are
/// `(row, col)` with the origin at the top-left corner.
pub(crate) struct Matrix {
    pub(crate) size: usize,
    pub(crate) modules: Vec<bool>,
    pub(crate) reserved: Vec<bool>,
}

impl Matrix {
    /// Builds the grid for `version` with every function pattern stamped and
    /// every format/version cell reserved. Data cells start out light.
    pub(crate) fn new(version: Version) -> Self {
        let size = version.size();
        let mut m = Self {
            size,
            modules: vec![false; size * size],
            reserved: vec![false; size * size],
        };
        m.draw_finder_patterns();
        m.draw_alignment_patterns(version);
        m.draw_timing_patterns();
        m.set_function(size - 8, 8, true); // permanent dark module
        m.reserve_format_areas();
        if version.value() >= 7 {
            m.reserve_version_areas();
        }
        m
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> bool {
        self.modules[self.index(row, col)]
    }

    /// Writes a module without touching the reservation grid. Used for data
    /// placement, masking and the late format/version writes.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, dark: bool) {
        let i = self.index(row, col);
        self.modules[i] = dark;
    }

    #[inline]
    pub(crate) fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved[self.index(row, col)]
    }

    /// Writes a function module and reserves its cell.
    fn set_function(&mut self, row: usize, col: usize, dark: bool) {
        let i = self.index(row, col);
        self.modules[i] = dark;
        self.reserved[i] = true;
    }

    fn reserve(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        self.reserved[i] = true;
    }

    /// The three 7x7 finder patterns with their light separators. The whole
    /// 8x8 footprint is reserved, dark or not.
    fn draw_finder_patterns(&mut self) {
        let size = self.size;
        for &(top, left) in &[(0, 0), (0, size - 8), (size - 8, 0)] {
            // Finder cell within the footprint; the separator row/column sits
            // on the side facing the symbol interior.
            let (pat_top, pat_left) = (
                if top == 0 { 0 } else { top + 1 },
                if left == 0 { 0 } else { left + 1 },
            );
            for dr in 0..8 {
                for dc in 0..8 {
                    let (row, col) = (top + dr, left + dc);
                    let pr = row as isize - pat_top as isize;
                    let pc = col as isize - pat_left as isize;
                    let in_pattern = (0..7).contains(&pr) && (0..7).contains(&pc);
                    let dark = in_pattern
                        && (pr == 0
                            || pr == 6
                            || pc == 0
                            || pc == 6
                            || ((2..=4).contains(&pr) && (2..=4).contains(&pc)));
                    self.set_function(row, col, dark);
                }
            }
        }
    }

    /// 5x5 alignment patterns at every centre pair, except where the pattern
    /// would overlap a finder footprint.
    fn draw_alignment_patterns(&mut self, version: Version) {
        let size = self.size;
        let positions = tables::alignment_positions(version);
        for &r in &positions {
            for &c in &positions {
                let in_corner = (r <= 8 && c <= 8)
                    || (r <= 8 && c >= size - 8)
                    || (r >= size - 8 && c <= 8);
                if in_corner {
                    continue;
                }
                for dr in -2i32..=2 {
                    for dc in -2i32..=2 {
                        let dist = dr.abs().max(dc.abs());
                        self.set_function(
                            (r as i32 + dr) as usize,
                            (c as i32 + dc) as usize,
                            dist != 1,
                        );
                    }
                }
            }
        }
    }

    /// Alternating modules along row 6 and column 6, skipping cells an
    /// alignment pattern already claimed.
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.size - 8 {
            if !self.is_reserved(6, i) {
                self.set_function(6, i, i % 2 == 0);
            }
            if !self.is_reserved(i, 6) {
                self.set_function(i, 6, i % 2 == 0);
            }
        }
    }

    /// Reserves the 15-bit format cells around the finders; their values are
    /// written only after the mask has been chosen.
    fn reserve_format_areas(&mut self) {
        let size = self.size;
        for i in 0..=8 {
            self.reserve(i, 8);
            self.reserve(8, i);
        }
        for i in 0..8 {
            self.reserve(8, size - 1 - i);
        }
        for i in 0..7 {
            self.reserve(size - 1 - i, 8);
        }
    }

    /// Reserves the two 6x3 version blocks of versions 7 and up.
    fn reserve_version_areas(&mut self) {
        let size = self.size;
        for row in size - 11..=size - 9 {
            for col in 0..6 {
                self.reserve(row, col);
                self.reserve(col, row);
            }
        }
    }

    /// Writes the codeword stream into the unreserved cells in zig-zag
    /// order. Bits beyond the codewords (the remainder bits) are light.
    pub(crate) fn place_data(&mut self, codewords: &[u8], total_bits: usize) {
        let size = self.size;
        debug_assert!(codewords.len() * 8 <= total_bits);
        let mut i = 0usize;
        let mut upward = true;
        let mut right = size - 1;
        loop {
            let right_col = if right == 6 { 5 } else { right };
            for v in 0..size {
                let row = if upward { size - 1 - v } else { v };
                for col in [right_col, right_col - 1] {
                    if self.is_reserved(row, col) {
                        continue;
                    }
                    let dark = i < codewords.len() * 8
                        && (codewords[i >> 3] >> (7 - (i & 7))) & 1 != 0;
                    self.set(row, col, dark);
                    i += 1;
                }
            }
            upward = !upward;
            if right_col == 1 {
                break;
            }
            right = right_col - 2;
        }
        debug_assert_eq!(i, total_bits);
    }

    pub(crate) fn count_unreserved(&self) -> usize {
        self.reserved.iter().filter(|&&r| !r).count()
    }
}
