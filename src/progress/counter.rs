//! Sharded permutation counter
//!
//! Each pool worker owns one cache-line-sized bucket, so the hot path is a single
//! uncontended relaxed add. The total is only computed when somebody reads it.

use std::sync::atomic::{AtomicU64, Ordering};

#[repr(align(64))]
#[derive(Debug, Default)]
struct Bucket(AtomicU64);

/// Number of permutations evaluated so far in one run
///
/// Bucket 0 is shared by callers outside the worker pool (sequential mode, tests);
/// pool worker `i` uses bucket `i + 1`.
#[derive(Debug)]
pub struct ProgressCounter {
    buckets: Box<[Bucket]>,
}

impl ProgressCounter {
    /// Create a counter with one bucket per pool worker plus a shared one
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            buckets: (0..=workers).map(|_| Bucket::default()).collect(),
        }
    }

    /// Count one evaluated permutation
    #[inline]
    pub fn increment(&self) {
        self.bucket().0.fetch_add(1, Ordering::Relaxed);
    }

    /// Sum of all buckets
    ///
    /// Never decreases between successive reads. May trail concurrent
    /// increments slightly; exact once every worker has finished.
    #[must_use]
    pub fn current_count(&self) -> u64 {
        self.buckets
            .iter()
            .map(|bucket| bucket.0.load(Ordering::Relaxed))
            .sum()
    }

    #[inline]
    fn bucket(&self) -> &Bucket {
        rayon::current_thread_index()
            .and_then(|index| self.buckets.get(index + 1))
            .unwrap_or(&self.buckets[0])
    }
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new(0)
    }
}
