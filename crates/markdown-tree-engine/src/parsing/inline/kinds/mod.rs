//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`, a raw zone that suppresses other parsing
//! - **`Link`**: brackets, targets, destinations and titles
//! - **`Autolink`**: `<scheme:...>` and `<user@host>`
//! - **`Delimiter`**: `*`, `_` and `~` runs and their flanking rules
//!
//! The tokenizer calls these types; it never hardcodes `[`, `` ` `` or `*`.

pub mod autolink;
pub mod code_span;
pub mod delimiter;
pub mod link;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use delimiter::Delimiter;
pub use link::Link;
