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

//! # Flipgrid Model
//!
//! Immutable problem data for the column-flipping optimizer: the binary
//! `Grid` under search, the `FlipMask` selecting which columns a candidate
//! inverts, and the `Solution` value pairing a score with the mask that
//! produced it.
//!
//! ## Modules
//!
//! - `grid`: the rectangular binary grid, its validation contract
//!   (`InvalidShape`, `TooManyColumns`), and the supported column bound.
//! - `solution`: the `FlipMask` bit-pattern newtype and the `Solution`
//!   value type with the total order every search strategy shares.
//!
//! ## Purpose
//!
//! These types are constructed once, never mutated, and shared by
//! reference across all solver worker threads. Keeping them free of any
//! search machinery lets the strategy crates agree on one comparison rule
//! and one validation contract.

pub mod grid;
pub mod solution;
