//! In-place permutation of a tile selection
//!
//! Swap-based recursion: choose each remaining tile for the current slot, recurse,
//! swap back. Working space is the selection buffer itself.

use std::ops::ControlFlow;

/// Receives every complete ordering produced by [`permute`]
pub trait Visitor {
    /// Handle one complete ordering
    ///
    /// The slice is only valid for the duration of the call.
    fn visit(&mut self, candidate: &[u8]);

    /// Checked before every recursive step; returning true abandons the walk
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Emit every ordering of `tiles` that keeps `tiles[..start]` in place
///
/// With `start == 0` this visits all m! orderings of an m-tile selection,
/// tracked by position, so repeated letters produce repeated strings. The buffer
/// is restored to its original order before returning, unless the visitor
/// cancelled the walk.
///
/// Returns `ControlFlow::Break` if the visitor cancelled.
///
/// # Examples
/// ```
/// use tile_solver::solver::{Visitor, permute};
///
/// struct Collect(Vec<String>);
///
/// impl Visitor for Collect {
///     fn visit(&mut self, candidate: &[u8]) {
///         self.0.push(String::from_utf8_lossy(candidate).into_owned());
///     }
/// }
///
/// let mut tiles = *b"CAT";
/// let mut seen = Collect(Vec::new());
/// let _ = permute(&mut tiles, 0, &mut seen);
/// assert_eq!(seen.0.len(), 6);
/// assert_eq!(&tiles, b"CAT");
/// ```
pub fn permute<V>(tiles: &mut [u8], start: usize, visitor: &mut V) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    if visitor.is_cancelled() {
        return ControlFlow::Break(());
    }

    if start >= tiles.len() {
        visitor.visit(tiles);
        return ControlFlow::Continue(());
    }

    for i in start..tiles.len() {
        tiles.swap(start, i);
        let flow = permute(tiles, start + 1, visitor);
        tiles.swap(start, i);
        if flow.is_break() {
            return flow;
        }
    }

    ControlFlow::Continue(())
}
