//! Subsequence enumeration
//!
//! Subsequences are tracked by position, so a rack with repeated letters yields
//! selections that later spell the same string. Those collapse in the solution set.

use std::ops::ControlFlow;

/// Visit every non-empty selection containing all of `required` plus any subset of `optional`
///
/// Selections are passed as ascending position lists when both inputs are
/// ascending and every required position precedes every optional one, which is
/// how the partitioner builds them. With `required` empty and `optional = 0..N`
/// this emits all 2^N - 1 non-empty subsequences of an N-tile rack exactly once.
///
/// The callback can stop the walk early by returning `ControlFlow::Break`.
///
/// # Examples
/// ```
/// use std::ops::ControlFlow;
/// use tile_solver::solver::for_each_subsequence;
///
/// let mut seen = Vec::new();
/// let _ = for_each_subsequence(&[], &[0, 1, 2], &mut |selection: &[u8]| {
///     seen.push(selection.to_vec());
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen.len(), 7);
/// ```
pub fn for_each_subsequence<F>(required: &[u8], optional: &[u8], visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&[u8]) -> ControlFlow<()>,
{
    let mut selection = Vec::with_capacity(required.len() + optional.len());
    selection.extend_from_slice(required);
    select(&mut selection, optional, visit)
}

fn select<F>(selection: &mut Vec<u8>, optional: &[u8], visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&[u8]) -> ControlFlow<()>,
{
    let Some((&position, remaining)) = optional.split_first() else {
        if selection.is_empty() {
            return ControlFlow::Continue(());
        }
        return visit(selection);
    };

    selection.push(position);
    let flow = select(selection, remaining, visit);
    selection.pop();
    if flow.is_break() {
        return flow;
    }

    select(selection, remaining, visit)
}
