//! Expected permutation total for the progress percentage
//!
//! A rack of N tiles has C(N, L) selections of length L, each with L! orderings,
//! so it contributes N! / (N - L)! orderings per length. The goal only feeds the
//! status display.

/// Total orderings across `sequences` resolved racks of `len` tiles
///
/// Returns `None` when the total does not fit in a `u64`.
///
/// # Examples
/// ```
/// use tile_solver::progress::permutation_goal;
///
/// // CAT: 3 singles + 6 pairs + 6 full orderings
/// assert_eq!(permutation_goal(3, 1), Some(15));
/// assert_eq!(permutation_goal(3, 26), Some(390));
/// assert_eq!(permutation_goal(32, 1), None);
/// ```
#[must_use]
pub fn permutation_goal(len: usize, sequences: u64) -> Option<u64> {
    let len = u64::try_from(len).ok()?;
    let mut per_rack: u64 = 0;
    let mut falling: u64 = 1;
    for taken in 0..len {
        falling = falling.checked_mul(len - taken)?;
        per_rack = per_rack.checked_add(falling)?;
    }
    per_rack.checked_mul(sequences)
}
