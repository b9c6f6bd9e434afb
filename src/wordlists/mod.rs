//! Word lists

pub mod loader;

pub use loader::{DictionaryError, load_dictionary};
