use crate::models::InlineNode;

/// A run of emphasis or strikethrough delimiters awaiting a partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRun {
    pub ch: u8,
    /// Characters not yet consumed by a match.
    pub len: usize,
    /// Run length as scanned.
    pub orig_len: usize,
    pub can_open: bool,
    pub can_close: bool,
}

/// Intermediate tokenizer output: finished nodes interleaved with
/// unresolved delimiter runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Node { node: InlineNode, depth: usize },
    Delim(DelimiterRun),
}

impl Piece {
    pub fn node(node: InlineNode) -> Self {
        let depth = node.depth();
        Piece::Node { node, depth }
    }

    pub fn depth(&self) -> usize {
        match self {
            Piece::Node { depth, .. } => *depth,
            Piece::Delim(_) => 1,
        }
    }
}

/// Converts pieces to nodes: leftover delimiters become literal text and
/// adjacent text nodes are merged.
pub fn into_nodes(pieces: Vec<Piece>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let node = match piece {
            Piece::Node { node, .. } => node,
            Piece::Delim(run) if run.len == 0 => continue,
            Piece::Delim(run) => InlineNode::Text((run.ch as char).to_string().repeat(run.len)),
        };
        push_merged(&mut out, node);
    }
    out
}

/// Appends `node`, merging it into a preceding `Text`.
pub fn push_merged(out: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(next) = &node {
        if next.is_empty() {
            return;
        }
        if let Some(InlineNode::Text(prev)) = out.last_mut() {
            prev.push_str(next);
            return;
        }
    }
    out.push(node);
}
