//! # Inline Parsing
//!
//! Cursor-based span tokenization with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing and after link reference
//! definitions have been collected, over the text of one paragraph or
//! heading at a time.
//!
//! - Code spans suppress all other inline parsing inside them
//! - Links, images and autolinks are recognized outside raw zones
//! - Emphasis and strikethrough delimiter runs are collected during the scan
//!   and matched afterwards
//!
//! ## Modules
//!
//! - **`index`**: `SpanIndex`, code span and bracket positions computed once
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`types`**: `Piece` and `DelimiterRun`, the pre-resolution output
//! - **`emphasis`**: delimiter-run matching
//! - **`parser`**: `tokenize_spans()` with `try_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[not a link](x)` `` parses as a single
//! code span, and `` *foo`*` `` leaves the first `*` literal.

pub mod emphasis;
pub mod index;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize_spans;
