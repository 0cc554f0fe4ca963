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

//! # Binary Grid
//!
//! The rectangular grid of 0/1 cells that every search strategy reads and
//! none mutates. Construction is cheap and infallible; the validation
//! contract (`InvalidShape`, `TooManyColumns`) is a separate pure check
//! that each strategy runs before enumerating candidate flip masks, so a
//! malformed grid surfaces the same error no matter which strategy is
//! asked first.
//!
//! ## Highlights
//!
//! - Row-major storage with slice access per row, the layout the scorer's
//!   hot loop walks.
//! - Cell values are normalized to 0/1 on construction; any nonzero input
//!   byte counts as a set bit.
//! - `MAX_COLUMNS` bounds the search space to what a `u32` flip mask can
//!   address, one reserved bit below the full mask width.

use crate::solution::FlipMask;

/// Maximum number of grid columns the search supports.
///
/// One bit of the `u32` flip mask per column, minus one reserved bit,
/// mirroring the mask-width-minus-one convention of signed-integer mask
/// representations. Enumerating `2^columns` candidates makes anything near
/// this bound impractical regardless, so the narrow mask costs nothing.
pub const MAX_COLUMNS: usize = (u32::BITS - 1) as usize;

/// The error type for grid validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    InvalidShape {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row, which sets the expected width.
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
    /// The column count exceeds the supported flip-mask width.
    TooManyColumns {
        /// Number of columns in the grid.
        columns: usize,
        /// The supported maximum, [`MAX_COLUMNS`].
        max: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShape {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Non-rectangular grid: row {} has {} columns, expected {}",
                row, actual, expected
            ),
            Self::TooManyColumns { columns, max } => {
                write!(
                    f,
                    "Grid has {} columns, but at most {} are supported",
                    columns, max
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of binary cell values.
///
/// Immutable once constructed and shared by reference across all solver
/// worker threads without synchronization; flips are applied virtually
/// during scoring and never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Constructs a grid from row vectors, normalizing every nonzero cell
    /// to 1.
    ///
    /// Construction never fails; shape problems are reported by
    /// [`Grid::validate`] so that every strategy surfaces them through its
    /// own result.
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = u8>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| u8::from(cell != 0))
                    .collect::<Vec<u8>>()
            })
            .collect::<Vec<_>>();
        Self { rows }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns, taken from the first row.
    ///
    /// Zero for an empty grid. Only meaningful as a search bound once
    /// [`Grid::validate`] has confirmed the grid is rectangular.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        debug_assert!(
            row < self.num_rows(),
            "called `Grid::row` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows(),
            row
        );

        &self.rows[row]
    }

    /// Iterates over the rows as slices.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the cell value at `(row, column)`, either 0 or 1.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn value(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }

    /// Checks the search preconditions: every row must match the first
    /// row's length, and the column count must not exceed
    /// [`MAX_COLUMNS`].
    ///
    /// Pure check with no side effects. An empty grid is valid; the
    /// search over it is trivially solved.
    pub fn validate(&self) -> Result<(), GridError> {
        let columns = self.num_columns();

        if columns > MAX_COLUMNS {
            return Err(GridError::TooManyColumns {
                columns,
                max: MAX_COLUMNS,
            });
        }

        for (index, row) in self.rows.iter().enumerate().skip(1) {
            if row.len() != columns {
                return Err(GridError::InvalidShape {
                    row: index,
                    expected: columns,
                    actual: row.len(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of candidate flip masks the search enumerates,
    /// `2^columns - 1`.
    ///
    /// The all-ones mask is excluded: inverting every column yields the
    /// same uniformity set as inverting none, so the range `[0, limit)`
    /// already covers every distinct outcome.
    ///
    /// Only meaningful after [`Grid::validate`] has succeeded.
    #[inline]
    pub fn candidate_limit(&self) -> u64 {
        debug_assert!(
            self.num_columns() <= MAX_COLUMNS,
            "called `Grid::candidate_limit` on a grid with unsupported column count {}",
            self.num_columns()
        );

        (1u64 << self.num_columns()) - 1
    }

    /// Returns a flip mask covering every column of this grid.
    #[inline]
    pub fn full_mask(&self) -> FlipMask {
        FlipMask::new((self.candidate_limit() & u64::from(u32::MAX)) as u32)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid ({} x {})", self.num_rows(), self.num_columns())?;
        for row in &self.rows {
            write!(f, "   ")?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
