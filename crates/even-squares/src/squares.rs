// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Squares of the even integers in a fixed half-open range.
//!
//! The range is `[RANGE_START, RANGE_END)`, i.e. `1..=20`. Every retained value
//! is squared and kept in ascending order of its root, so the result is always
//! the same ten values:
//!
//! ```text
//! [4, 16, 36, 64, 100, 144, 196, 256, 324, 400]
//! ```

use std::fmt;

use tracing::debug;

/// First integer considered (inclusive).
pub const RANGE_START: u32 = 1;

/// Upper bound of the range (exclusive).
pub const RANGE_END: u32 = 21;

/// Ordered squares of the even integers in `RANGE_START..RANGE_END`.
///
/// Rendered with `Display` as a bracketed list: `[4, 16, ..., 400]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvenSquares(Vec<u32>);

impl AsRef<[u32]> for EvenSquares {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for EvenSquares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Returns true when `n` has no remainder modulo 2.
pub fn is_even(n: u32) -> bool {
    n.is_multiple_of(2)
}

/// Squares every even integer in `RANGE_START..RANGE_END`, ascending.
///
/// Total over the fixed range: `20 * 20` fits in a `u32`.
pub fn compute_even_squares() -> EvenSquares {
    let values: Vec<u32> = (RANGE_START..RANGE_END)
        .filter(|&n| is_even(n))
        .map(|n| n * n)
        .collect();
    debug!(count = values.len(), "computed even squares");
    EvenSquares(values)
}
