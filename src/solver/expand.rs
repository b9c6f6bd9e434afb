//! Blank tile expansion
//!
//! Replaces every wildcard with each letter of the alphabet, branching once per blank.
//! Substitutions are decoded from an index on demand, so 26^k racks never have
//! to be held in memory at once.

use crate::core::{ALPHABET, ResolvedTiles, Tile, TileSequence};

/// Number of resolved racks produced for `wildcards` blanks (26^k)
///
/// Returns `None` if the count does not fit in a `u64`.
#[must_use]
pub fn expansion_count(wildcards: usize) -> Option<u64> {
    let exponent = u32::try_from(wildcards).ok()?;
    (ALPHABET.len() as u64).checked_pow(exponent)
}

/// Every blank substitution of one rack, addressed by index
///
/// Index `i` reads as a base-26 number with the first blank as its most
/// significant digit, so the first blank varies slowest.
#[derive(Debug, Clone)]
pub struct WildcardExpansion {
    template: Box<[u8]>,
    blanks: Box<[usize]>,
    count: u64,
}

impl WildcardExpansion {
    /// Number of resolved racks
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.count
    }

    /// Always false: even a rack without blanks resolves to itself
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The `index`-th resolved rack, `None` past the end
    #[must_use]
    pub fn get(&self, index: u64) -> Option<ResolvedTiles> {
        if index >= self.count {
            return None;
        }

        let mut letters = self.template.to_vec();
        let mut rest = index;
        for &position in self.blanks.iter().rev() {
            letters[position] = ALPHABET[(rest % ALPHABET.len() as u64) as usize];
            rest /= ALPHABET.len() as u64;
        }
        Some(ResolvedTiles::from_letters(letters))
    }

    /// Resolved racks in index order
    pub fn racks(&self) -> impl Iterator<Item = ResolvedTiles> + '_ {
        (0..self.count).filter_map(|index| self.get(index))
    }
}

/// Expand every wildcard into concrete letters
///
/// Describes exactly 26^k racks for k blanks, preserving length and every
/// non-blank position. A rack without blanks comes back unchanged as the only
/// element.
///
/// # Panics
/// Panics if the rack has more blanks than a `u64` count allows. Parsing caps
/// blanks well below that.
///
/// # Examples
/// ```
/// use tile_solver::core::TileSequence;
/// use tile_solver::solver::expand_wildcards;
///
/// let rack = TileSequence::parse("C*T", '*').unwrap();
/// let expansion = expand_wildcards(&rack);
/// assert_eq!(expansion.len(), 26);
/// assert_eq!(expansion.get(0).unwrap().to_string(), "CAT");
/// assert_eq!(expansion.get(25).unwrap().to_string(), "CZT");
/// assert!(expansion.get(26).is_none());
/// ```
#[must_use]
pub fn expand_wildcards(rack: &TileSequence) -> WildcardExpansion {
    let mut template = Vec::with_capacity(rack.len());
    let mut blanks = Vec::new();
    for (position, tile) in rack.tiles().iter().enumerate() {
        match tile {
            Tile::Letter(b) => template.push(*b),
            Tile::Wildcard => {
                blanks.push(position);
                template.push(ALPHABET[0]);
            }
        }
    }

    let count = expansion_count(blanks.len()).expect("blank count is capped at parse");
    WildcardExpansion {
        template: template.into(),
        blanks: blanks.into(),
        count,
    }
}
