//! # Source Preprocessing
//!
//! Turns raw input (a string, a rope, or pre-split lines) into numbered
//! [`SourceLine`]s with terminators removed. `\r\n`, `\n` and a lone `\r`
//! all end a line.

pub mod lines;

pub use lines::{SourceLine, lines_from_rope, normalize_lines, split_lines};
