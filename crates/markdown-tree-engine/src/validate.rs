//! Structural validation of a document tree.
//!
//! The parser only produces valid trees; this exists for trees built or
//! deserialized elsewhere. Validation stops at the first violation and the
//! error names the path of the offending node.

use thiserror::Error;

use crate::models::{BlockNode, Document, InlineNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{path}: heading_level must be between 1 and 6, found {level}")]
    HeadingLevel { path: String, level: u8 },

    #[error("{path}: spans must not be empty for a non-heading paragraph")]
    EmptyParagraph { path: String },

    #[error("{path}: items must not be empty")]
    EmptyList { path: String },

    #[error("{path}: list items must be `item` blocks, found `{found}`")]
    NotAnItem { path: String, found: &'static str },

    #[error("{path}: `item` blocks may only appear in a list's items")]
    StrayItem { path: String },

    #[error("{path}: language must not be empty when present")]
    EmptyLanguage { path: String },

    #[error("{path}: spans must not be empty for a styled span")]
    EmptyStyle { path: String },
}

/// Checks the structural invariants of `doc`.
pub fn validate(doc: &Document) -> Result<(), ValidationError> {
    for (i, block) in doc.blocks.iter().enumerate() {
        check_block(block, &format!("blocks[{i}]"))?;
    }
    Ok(())
}

fn check_block(block: &BlockNode, path: &str) -> Result<(), ValidationError> {
    match block {
        BlockNode::Paragraph {
            heading_level,
            spans,
        } => {
            match heading_level {
                Some(level) if !(1..=6).contains(level) => {
                    return Err(ValidationError::HeadingLevel {
                        path: format!("{path}.heading_level"),
                        level: *level,
                    });
                }
                None if spans.is_empty() => {
                    return Err(ValidationError::EmptyParagraph {
                        path: format!("{path}.spans"),
                    });
                }
                _ => {}
            }
            check_spans(spans, &format!("{path}.spans"))
        }
        BlockNode::HorizontalRule => Ok(()),
        BlockNode::List { items, .. } => {
            if items.is_empty() {
                return Err(ValidationError::EmptyList {
                    path: format!("{path}.items"),
                });
            }
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}.items[{i}]");
                let BlockNode::Item { parts } = item else {
                    return Err(ValidationError::NotAnItem {
                        path: item_path,
                        found: item.type_name(),
                    });
                };
                check_parts(parts, &item_path)?;
            }
            Ok(())
        }
        BlockNode::Item { .. } => Err(ValidationError::StrayItem {
            path: path.to_string(),
        }),
        BlockNode::CodeBlock { language, .. } => match language {
            Some(lang) if lang.is_empty() => Err(ValidationError::EmptyLanguage {
                path: format!("{path}.language"),
            }),
            _ => Ok(()),
        },
        BlockNode::Quote { parts } => check_parts(parts, path),
    }
}

fn check_parts(parts: &[BlockNode], path: &str) -> Result<(), ValidationError> {
    for (i, part) in parts.iter().enumerate() {
        check_block(part, &format!("{path}.parts[{i}]"))?;
    }
    Ok(())
}

fn check_spans(spans: &[InlineNode], path: &str) -> Result<(), ValidationError> {
    for (i, span) in spans.iter().enumerate() {
        let span_path = format!("{path}[{i}]");
        match span {
            InlineNode::Style { spans, .. } => {
                if spans.is_empty() {
                    return Err(ValidationError::EmptyStyle {
                        path: format!("{span_path}.spans"),
                    });
                }
                check_spans(spans, &format!("{span_path}.spans"))?;
            }
            InlineNode::Link { spans, .. } | InlineNode::LinkRefPlaceholder { spans } => {
                check_spans(spans, &format!("{span_path}.spans"))?;
            }
            _ => {}
        }
    }
    Ok(())
}
