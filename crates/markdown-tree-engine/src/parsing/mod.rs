//! # Parsing
//!
//! Markdown text to `Document`, in four passes:
//!
//! 1. **source**: split the input into numbered lines
//! 2. **blocks**: build the container and leaf block structure
//! 3. **refs**: collect link reference definitions from paragraph starts
//! 4. **assemble**: tokenize paragraph and heading text into spans
//!
//! Every pass is total. Malformed markup degrades to literal text.

pub mod assemble;
pub mod blocks;
pub mod cursor;
pub mod decode;
pub mod inline;
pub mod refs;
pub mod source;

use serde::{Deserialize, Serialize};
use xi_rope::Rope;

use crate::models::Document;

use source::SourceLine;

/// Knobs for a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Bound on quote/list item nesting and on inline nesting. Markers and
    /// delimiters past the bound are kept as literal text.
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Parses markdown text with default options.
pub fn parse(text: &str) -> Document {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Document {
    parse_source(&source::split_lines(text), options)
}

/// Parses pre-split lines. Each entry is split again on any embedded line
/// terminators.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Document {
    parse_source(&source::normalize_lines(lines), &ParseOptions::default())
}

pub fn parse_rope(rope: &Rope) -> Document {
    parse_source(&source::lines_from_rope(rope), &ParseOptions::default())
}

fn parse_source(lines: &[SourceLine], options: &ParseOptions) -> Document {
    let mut raw = blocks::parse_blocks(lines, options);
    log::debug!("{} lines -> {} top-level blocks", lines.len(), raw.len());
    let refs = refs::collect_definitions(&mut raw);
    Document::new(assemble::assemble(raw, &refs, options.max_nesting_depth))
}

#[cfg(test)]
mod tests;
