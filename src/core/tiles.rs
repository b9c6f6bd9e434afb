//! Tile rack representation
//!
//! A `TileSequence` is the raw rack as typed by the user: letters plus blanks.
//! `ResolvedTiles` is the same rack after every blank has been replaced by a letter.

use std::fmt;

/// Longest rack accepted. Positions are stored as bytes by the partitioner.
pub const MAX_TILES: usize = 32;

/// Most blanks accepted, so the 26^k substitution count fits in a `u64`
pub const MAX_WILDCARDS: usize = 13;

/// Letters a blank can stand for, in substitution order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single tile on the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A concrete uppercase ASCII letter
    Letter(u8),
    /// A blank that stands for any letter
    Wildcard,
}

/// Error type for invalid racks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    Empty,
    TooLong(usize),
    TooManyWildcards(usize),
    InvalidCharacter(char),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input must contain at least one tile"),
            Self::TooLong(len) => {
                write!(f, "Input may hold at most {MAX_TILES} tiles, got {len}")
            }
            Self::TooManyWildcards(count) => {
                write!(f, "Input may hold at most {MAX_WILDCARDS} blanks, got {count}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Input contains '{c}', expected letters A-Z or the wildcard")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// The ordered tiles to solve, possibly containing wildcards
///
/// Length is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSequence {
    tiles: Box<[Tile]>,
    wildcard: char,
}

impl TileSequence {
    /// Parse a rack, treating `wildcard` as a blank tile
    ///
    /// Letters are upper-cased; anything that is neither an ASCII letter nor the
    /// wildcard marker is rejected.
    ///
    /// # Errors
    /// Returns `TileError` if:
    /// - The input is empty
    /// - The input is longer than [`MAX_TILES`]
    /// - The input has more than [`MAX_WILDCARDS`] blanks
    /// - The input contains any other character
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::TileSequence;
    ///
    /// let rack = TileSequence::parse("c*t", '*').unwrap();
    /// assert_eq!(rack.len(), 3);
    /// assert_eq!(rack.wildcard_count(), 1);
    /// assert_eq!(rack.to_string(), "C*T");
    ///
    /// assert!(TileSequence::parse("c4t", '*').is_err());
    /// ```
    pub fn parse(input: &str, wildcard: char) -> Result<Self, TileError> {
        let tiles = input
            .chars()
            .map(|c| {
                if c == wildcard {
                    Ok(Tile::Wildcard)
                } else if c.is_ascii_alphabetic() {
                    Ok(Tile::Letter(c.to_ascii_uppercase() as u8))
                } else {
                    Err(TileError::InvalidCharacter(c))
                }
            })
            .collect::<Result<Box<[Tile]>, _>>()?;

        if tiles.is_empty() {
            return Err(TileError::Empty);
        }
        if tiles.len() > MAX_TILES {
            return Err(TileError::TooLong(tiles.len()));
        }
        let blanks = tiles.iter().filter(|&&t| t == Tile::Wildcard).count();
        if blanks > MAX_WILDCARDS {
            return Err(TileError::TooManyWildcards(blanks));
        }

        Ok(Self { tiles, wildcard })
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: parsing rejects empty racks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of blank tiles
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Wildcard).count()
    }
}

impl fmt::Display for TileSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            match tile {
                Tile::Letter(b) => write!(f, "{}", char::from(*b))?,
                Tile::Wildcard => write!(f, "{}", self.wildcard)?,
            }
        }
        Ok(())
    }
}

/// A rack with every blank substituted
///
/// Holds uppercase ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedTiles {
    letters: Box<[u8]>,
}

impl ResolvedTiles {
    pub(crate) fn from_letters(letters: impl Into<Box<[u8]>>) -> Self {
        let letters = letters.into();
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for ResolvedTiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only ASCII letters are ever stored
        f.write_str(&String::from_utf8_lossy(&self.letters))
    }
}
