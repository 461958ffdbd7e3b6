//! # Block Parsing
//!
//! Line-at-a-time block construction over an explicit container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line, and each remainder
//!    after a container prefix is stripped, becomes a `LineClass` holding
//!    its expanded indentation and blank status.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` matches the line
//!    against open containers, then hands the remainder to the ordered rule
//!    table in `open`.
//!
//! ## Modules
//!
//! - **`types`**: `RawBlock`, `RawItem`, `ContainerFrame`
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `LineClass` and tab expansion
//! - **`containers`**: `ContainerStack`, the arena of open containers
//! - **`open`**: the `(name, predicate, handler)` rule table
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Every list holds at least one item
//! - Quote and item nesting never exceeds the configured bound

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::LineClass;
pub use types::{ContainerFrame, RawBlock, RawItem};

use crate::parsing::{ParseOptions, source::SourceLine};

/// Segments lines into raw blocks. Never fails.
pub fn parse_blocks(lines: &[SourceLine], options: &ParseOptions) -> Vec<RawBlock> {
    let mut builder = BlockBuilder::new(options.max_nesting_depth);
    for line in lines {
        builder.push(line);
    }
    builder.finish()
}
