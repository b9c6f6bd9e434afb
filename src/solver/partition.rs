//! Work partitioning
//!
//! The search space of an N-tile rack is every (selection, ordering) pair, where a
//! selection is a non-empty set of positions. A [`WorkUnit`] owns a disjoint slice
//! of that space, and splitting a unit yields children that cover exactly the
//! parent's slice:
//!
//! - Full selection: one [`WorkUnit::Orderings`] per position, fixing that
//!   position as the leading tile.
//! - Every smaller selection leaves out at least one optional position. It
//!   belongs to the unit that deletes its *first* omitted position, where the
//!   optional positions before it become required.
//!
//! Positions, not letter values, are partitioned, so repeated letters are
//! neither dropped nor counted twice.

use super::permutation::{Visitor, permute};
use super::subsequence::for_each_subsequence;
use std::ops::ControlFlow;

/// Residual length above which units are split when no threshold is configured
pub const DEFAULT_SPLIT_THRESHOLD: usize = 8;

/// An independently solvable slice of the search space
///
/// Positions index into a resolved rack and are always stored in ascending
/// order except for the chosen prefix of `Orderings`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkUnit {
    /// Every non-empty selection holding all of `required` and any of `optional`, in every order
    Subsequences {
        required: Box<[u8]>,
        optional: Box<[u8]>,
    },
    /// Every ordering of `prefix` and `rest` together that starts with `prefix`
    Orderings { prefix: Box<[u8]>, rest: Box<[u8]> },
}

impl WorkUnit {
    /// The unsplit unit covering an entire rack of `len` tiles
    ///
    /// # Panics
    /// Panics if `len` exceeds 256 positions; racks are capped well below that.
    #[must_use]
    pub fn whole(len: usize) -> Self {
        let optional = (0..len)
            .map(|p| u8::try_from(p).expect("rack length fits in a byte"))
            .collect();
        Self::Subsequences {
            required: Box::default(),
            optional,
        }
    }

    /// Number of tiles still free to move within this unit
    #[must_use]
    pub fn residual_len(&self) -> usize {
        match self {
            Self::Subsequences { required, optional } => required.len() + optional.len(),
            Self::Orderings { rest, .. } => rest.len(),
        }
    }

    /// Split into children that cover this unit's slice exactly once
    ///
    /// Returns an empty list for a unit that cannot be split further.
    #[must_use]
    pub fn split(&self) -> Vec<Self> {
        match self {
            Self::Subsequences { required, optional } => split_subsequences(required, optional),
            Self::Orderings { prefix, rest } => (0..rest.len())
                .map(|i| Self::Orderings {
                    prefix: prefix.iter().chain(&rest[i..=i]).copied().collect(),
                    rest: without(rest, i),
                })
                .collect(),
        }
    }

    /// Walk every ordering this unit owns, spelled with letters from `source`
    ///
    /// `scratch` is reused across selections so no allocation happens per
    /// candidate. Passing `source = [0, 1, .., N-1]` spells each ordering as its
    /// position list.
    pub fn for_each_ordering<V>(
        &self,
        source: &[u8],
        scratch: &mut Vec<u8>,
        visitor: &mut V,
    ) -> ControlFlow<()>
    where
        V: Visitor + ?Sized,
    {
        match self {
            Self::Subsequences { required, optional } => {
                for_each_subsequence(required, optional, &mut |selection: &[u8]| {
                    spell(source, selection, scratch);
                    permute(scratch, 0, visitor)
                })
            }
            Self::Orderings { prefix, rest } => {
                spell(source, prefix, scratch);
                scratch.extend(rest.iter().map(|&p| source[usize::from(p)]));
                permute(scratch, prefix.len(), visitor)
            }
        }
    }
}

fn split_subsequences(required: &[u8], optional: &[u8]) -> Vec<WorkUnit> {
    let all: Vec<u8> = required.iter().chain(optional).copied().collect();
    let mut children = Vec::with_capacity(all.len() + optional.len());

    // Full selection, keyed by leading position
    for (i, &lead) in all.iter().enumerate() {
        children.push(WorkUnit::Orderings {
            prefix: Box::new([lead]),
            rest: without(&all, i),
        });
    }

    // Smaller selections, keyed by the first optional position left out
    for j in 0..optional.len() {
        let required: Box<[u8]> = required.iter().chain(&optional[..j]).copied().collect();
        let optional: Box<[u8]> = optional[j + 1..].into();
        if required.is_empty() && optional.is_empty() {
            continue;
        }
        children.push(WorkUnit::Subsequences { required, optional });
    }

    children
}

fn without(positions: &[u8], index: usize) -> Box<[u8]> {
    positions[..index]
        .iter()
        .chain(&positions[index + 1..])
        .copied()
        .collect()
}

fn spell(source: &[u8], positions: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.extend(positions.iter().map(|&p| source[usize::from(p)]));
}

/// Splits a rack's search space into units of bounded residual length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPartitioner {
    threshold: usize,
}

impl WorkPartitioner {
    /// Units with more than `threshold` free tiles are split again
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Partition the search space of a `len`-tile rack
    ///
    /// Any rack of two or more tiles is split at least once, into one
    /// leading-tile unit and one deletion unit per position. Children with more
    /// than `threshold` free tiles are split again. The returned units are
    /// disjoint and together cover every (selection, ordering) pair exactly
    /// once. Emission order is unspecified.
    ///
    /// # Examples
    /// ```
    /// use tile_solver::solver::{WorkPartitioner, WorkUnit};
    ///
    /// // 5 leading-tile units plus 5 deletion units, all below the threshold
    /// assert_eq!(WorkPartitioner::new(8).partition(5).len(), 10);
    ///
    /// // A single tile has nothing to split
    /// assert_eq!(WorkPartitioner::new(8).partition(1), vec![WorkUnit::whole(1)]);
    /// ```
    #[must_use]
    pub fn partition(&self, len: usize) -> Vec<WorkUnit> {
        if len == 0 {
            return Vec::new();
        }

        let root = WorkUnit::whole(len);
        let mut units = Vec::new();
        let mut pending = if len > 1 { root.split() } else { vec![root] };
        while let Some(unit) = pending.pop() {
            if unit.residual_len() > self.threshold {
                let children = unit.split();
                if !children.is_empty() {
                    pending.extend(children);
                    continue;
                }
            }
            units.push(unit);
        }
        units
    }
}

impl Default for WorkPartitioner {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_THRESHOLD)
    }
}
