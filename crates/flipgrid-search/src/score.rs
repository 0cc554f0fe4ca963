// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Scorer
//!
//! The single hot path of the search: count how many grid rows become
//! uniform under a candidate flip mask. Invoked up to `2^columns` times
//! per solve, so it allocates nothing and short-circuits each row on the
//! first mismatch. The mask is applied virtually per comparison; the grid
//! is never touched.

use flipgrid_model::{grid::Grid, solution::FlipMask};

/// Counts the rows of `grid` whose cells are all equal after flipping the
/// columns selected by `mask`.
///
/// A row is uniform when every mask-adjusted cell matches the previous
/// one, walking left to right. Single-cell rows are trivially uniform;
/// zero-width rows never are.
#[inline]
pub fn uniform_rows(grid: &Grid, mask: FlipMask) -> u32 {
    let bits = mask.bits();
    let mut score = 0u32;
    for row in grid.rows() {
        if row_is_uniform(row, bits) {
            score += 1;
        }
    }
    score
}

/// Returns the flip bit for `column`; columns beyond the mask width are
/// never flipped.
#[inline(always)]
fn flip_bit(bits: u32, column: usize) -> u8 {
    if column < u32::BITS as usize {
        ((bits >> column) & 1) as u8
    } else {
        0
    }
}

#[inline(always)]
fn row_is_uniform(row: &[u8], bits: u32) -> bool {
    let Some((&first, rest)) = row.split_first() else {
        return false;
    };

    // Each cell is flipped exactly when its column bit is set; the
    // previous adjusted value carries over so every cell is adjusted once.
    let mut prev = first ^ flip_bit(bits, 0);
    for (offset, &cell) in rest.iter().enumerate() {
        let adjusted = cell ^ flip_bit(bits, offset + 1);
        if adjusted != prev {
            return false;
        }
        prev = adjusted;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(bits: u32) -> FlipMask {
        FlipMask::new(bits)
    }

    /// The grid from the module documentation of the original puzzle:
    /// rows 1 and 3 are uniform with no flips.
    fn documentation_grid() -> Grid {
        Grid::from_rows(vec![
            vec![0u8, 0, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 1, 1, 1],
            vec![0, 1, 1, 1, 0],
        ])
    }

    #[test]
    fn test_zero_flip_score_of_documentation_grid() {
        assert_eq!(uniform_rows(&documentation_grid(), FlipMask::EMPTY), 2);
    }

    #[test]
    fn test_flipping_makes_rows_uniform() {
        // Row [0, 1]: flipping column 1 yields [0, 0].
        let grid = Grid::from_rows(vec![vec![0u8, 1]]);
        assert_eq!(uniform_rows(&grid, FlipMask::EMPTY), 0);
        assert_eq!(uniform_rows(&grid, mask(0b10)), 1);
        // Flipping column 0 instead yields [1, 1], also uniform.
        assert_eq!(uniform_rows(&grid, mask(0b01)), 1);
    }

    #[test]
    fn test_mask_matching_row_pattern_scores_it() {
        // Flipping exactly the set cells of a row zeroes it out.
        let grid = Grid::from_rows(vec![vec![0u8, 0, 1, 1, 0], vec![1, 0, 1, 0, 1]]);
        assert_eq!(uniform_rows(&grid, mask(0b01100)), 1);
        assert_eq!(uniform_rows(&grid, mask(0b10101)), 1);
    }

    #[test]
    fn test_complementary_masks_score_identically() {
        let grid = documentation_grid();
        let full = grid.full_mask().bits();
        for bits in 0..grid.candidate_limit() as u32 {
            assert_eq!(
                uniform_rows(&grid, mask(bits)),
                uniform_rows(&grid, mask(bits ^ full)),
                "mask {:#b} and its complement disagree",
                bits
            );
        }
    }

    #[test]
    fn test_single_column_rows_are_always_uniform() {
        let grid = Grid::from_rows(vec![vec![0u8], vec![1], vec![0]]);
        assert_eq!(uniform_rows(&grid, FlipMask::EMPTY), 3);
        assert_eq!(uniform_rows(&grid, mask(0b1)), 3);
    }

    #[test]
    fn test_zero_width_rows_never_score() {
        let grid = Grid::from_rows(vec![Vec::<u8>::new(), Vec::new()]);
        assert_eq!(uniform_rows(&grid, FlipMask::EMPTY), 0);
    }

    #[test]
    fn test_score_is_bounded_by_row_count() {
        let grid = documentation_grid();
        for bits in 0..grid.candidate_limit() as u32 {
            let score = uniform_rows(&grid, mask(bits));
            assert!(score <= grid.num_rows() as u32);
        }
    }
}
