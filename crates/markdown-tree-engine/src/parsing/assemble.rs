//! # Model Assembler
//!
//! Folds raw blocks into the final `BlockNode` tree, tokenizing paragraph
//! and heading text along the way.

use crate::models::{BlockNode, InlineNode};

use super::{
    blocks::{RawBlock, RawItem},
    inline::tokenize_spans,
    refs::LinkReferenceTable,
};

pub fn assemble(blocks: Vec<RawBlock>, refs: &LinkReferenceTable, max_depth: usize) -> Vec<BlockNode> {
    let assembler = Assembler { refs, max_depth };
    assembler.blocks(blocks)
}

struct Assembler<'a> {
    refs: &'a LinkReferenceTable,
    max_depth: usize,
}

impl Assembler<'_> {
    fn blocks(&self, blocks: Vec<RawBlock>) -> Vec<BlockNode> {
        blocks.into_iter().map(|b| self.block(b)).collect()
    }

    fn block(&self, block: RawBlock) -> BlockNode {
        match block {
            RawBlock::Paragraph { text } => BlockNode::Paragraph {
                heading_level: None,
                spans: self.spans(&text),
            },
            RawBlock::Heading { level, text } => BlockNode::Paragraph {
                heading_level: Some(level),
                spans: self.spans(&text),
            },
            RawBlock::HorizontalRule => BlockNode::HorizontalRule,
            RawBlock::List { start, items } => BlockNode::List {
                start,
                items: items.into_iter().map(|i| self.item(i)).collect(),
            },
            RawBlock::CodeBlock {
                language,
                lines,
                start_line_number,
            } => BlockNode::CodeBlock {
                language,
                lines,
                start_line_number,
            },
            RawBlock::Quote { parts } => BlockNode::Quote {
                parts: self.blocks(parts),
            },
        }
    }

    fn item(&self, item: RawItem) -> BlockNode {
        BlockNode::Item {
            parts: self.blocks(item.parts),
        }
    }

    fn spans(&self, text: &str) -> Vec<InlineNode> {
        if text.is_empty() {
            return Vec::new();
        }
        tokenize_spans(text, self.refs, self.max_depth)
    }
}
