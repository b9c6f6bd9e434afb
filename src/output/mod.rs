//! Terminal output
//!
//! The run header and summary, the solution stream and the live status line.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::Console;
pub use display::{print_header, print_summary};
