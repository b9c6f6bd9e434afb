//! Core domain types for tile solving
//!
//! Racks, resolved racks and the dictionary. Everything here is immutable once built
//! and safe to share across worker threads.

mod dictionary;
mod tiles;

pub use dictionary::Dictionary;
pub use tiles::{ALPHABET, MAX_TILES, MAX_WILDCARDS, ResolvedTiles, Tile, TileError, TileSequence};
