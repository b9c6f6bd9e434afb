//! Word list loading
//!
//! Reads a plain text file with one word per line into a [`Dictionary`].

use crate::core::Dictionary;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for a word list that cannot be used
#[derive(Debug)]
pub enum DictionaryError {
    Unreadable { path: PathBuf, source: io::Error },
    Empty(PathBuf),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
            Self::Empty(path) => write!(f, "Dictionary {} contains no words", path.display()),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty(_) => None,
        }
    }
}

/// Load a dictionary from a file
///
/// Lines are trimmed and upper-cased; blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no words.
///
/// # Examples
/// ```no_run
/// use tile_solver::wordlists::load_dictionary;
///
/// let dictionary = load_dictionary("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_words(content.lines());
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    log::debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}
