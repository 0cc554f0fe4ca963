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

//! # Flip Masks and Solutions
//!
//! The candidate representation shared by every search strategy: a
//! `FlipMask` selecting which columns to invert, and a `Solution` pairing
//! the mask with the number of rows it makes uniform.
//!
//! ## The comparison contract
//!
//! All strategies pick winners through one rule, exposed as the pure merge
//! function [`Solution::better`]: a higher score wins; at equal score,
//! fewer flipped columns win; an exact tie on both is a genuine tie and
//! either operand may survive. The rule is associative and commutative up
//! to exact ties, which is what makes parallel reduction and racing
//! register updates agree on the winning score.

/// A bit-pattern selecting which grid columns one candidate inverts.
///
/// Bit `i` set means "invert column `i` when scoring". Masks are plain
/// `Copy` words so candidates can live in atomics and cross task
/// boundaries by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipMask(u32);

impl FlipMask {
    /// The mask that flips no columns.
    pub const EMPTY: FlipMask = FlipMask(0);

    /// Creates a mask from raw bits.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        FlipMask(bits)
    }

    /// Returns the raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the number of columns this mask flips.
    #[inline]
    pub const fn flip_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if no columns are flipped.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `column` is flipped by this mask.
    #[inline]
    pub const fn flips_column(self, column: usize) -> bool {
        column < u32::BITS as usize && (self.0 >> column) & 1 == 1
    }
}

impl std::fmt::Display for FlipMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for column in 0..u32::BITS as usize {
            if self.flips_column(column) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", column)?;
                first = false;
            }
        }
        write!(f, "}}")
    }
}

/// The outcome of evaluating one flip mask: the number of uniform rows it
/// produces and the mask itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    score: u32,
    flips: FlipMask,
}

impl Solution {
    /// Creates a solution from a score and the mask that produced it.
    #[inline]
    pub const fn new(score: u32, flips: FlipMask) -> Self {
        Self { score, flips }
    }

    /// Returns the number of rows this solution makes uniform.
    #[inline]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the flip mask that produced this score.
    #[inline]
    pub const fn flips(&self) -> FlipMask {
        self.flips
    }

    /// Returns `true` if `self` strictly improves on `other`: a higher
    /// score, or the same score with fewer flipped columns.
    ///
    /// Exact ties on both fields do not count as improvements, which is
    /// what lets a shared best-solution register keep its first committed
    /// writer under a tie.
    #[inline]
    pub fn improves_on(&self, other: &Solution) -> bool {
        self.score > other.score
            || (self.score == other.score && self.flips.flip_count() < other.flips.flip_count())
    }

    /// The pure merge function: returns the better of two solutions,
    /// preferring `b` on an exact tie.
    #[inline]
    pub fn better(a: Solution, b: Solution) -> Solution {
        if a.improves_on(&b) { a } else { b }
    }

    /// [`Solution::better`] lifted over `Option`, with `None` as the
    /// identity element: `better_opt(None, x) == x` for every `x`. This is
    /// the reduction identity parallel folds seed with.
    #[inline]
    pub fn better_opt(a: Option<Solution>, b: Option<Solution>) -> Option<Solution> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Self::better(a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.flips.flip_count();
        write!(
            f,
            "score: {}, columns flipped: {} ({} flip{})",
            self.score,
            self.flips,
            count,
            if count == 1 { "" } else { "s" }
        )
    }
}
