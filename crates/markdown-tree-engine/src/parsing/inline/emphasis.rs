//! Delimiter-run matching for emphasis and strikethrough.
//!
//! Pieces are moved onto an output stack left to right. Each closing run
//! matches the nearest open run of its kind still on the stack: everything
//! above the opener is split off and wrapped, characters are consumed from
//! the inner side of both runs, and the closer is retried while it still has
//! characters left. Open runs are tracked per kind as indices into the
//! output stack, so a match never shifts pieces below the opener.

use crate::models::{InlineNode, StyleKind};

use super::{
    kinds::Delimiter,
    types::{DelimiterRun, Piece, into_nodes},
};

/// Open runs are tracked separately for `*`, `_`, `~` and `~~`.
const KINDS: usize = 4;

fn kind_slot(run: &DelimiterRun) -> usize {
    match run.ch {
        Delimiter::STAR => 0,
        Delimiter::UNDERSCORE => 1,
        _ if run.orig_len == 1 => 2,
        _ => 3,
    }
}

/// How many characters a match consumes and the styles it produces,
/// outermost first.
fn match_shape(opener_len: usize, closer: &DelimiterRun) -> (usize, &'static [StyleKind]) {
    if closer.ch == Delimiter::TILDE {
        (closer.len, &[StyleKind::Strikethrough])
    } else if opener_len >= 3 && closer.len >= 3 {
        (3, &[StyleKind::Bold, StyleKind::Italic])
    } else if opener_len >= 2 && closer.len >= 2 {
        (2, &[StyleKind::Bold])
    } else {
        (1, &[StyleKind::Italic])
    }
}

/// Resolves delimiter runs in `pieces` into `Style` nodes.
///
/// `base_depth` is the nesting already around these pieces; no style is
/// created that would nest deeper than `max_depth`.
pub fn resolve(pieces: Vec<Piece>, base_depth: usize, max_depth: usize) -> Vec<Piece> {
    let mut resolver = Resolver {
        out: Vec::with_capacity(pieces.len()),
        openers: Default::default(),
        base_depth,
        max_depth,
    };
    for piece in pieces {
        match piece {
            Piece::Delim(run) => resolver.delimiter(run),
            node => resolver.out.push(node),
        }
    }
    resolver.out
}

struct Resolver {
    out: Vec<Piece>,
    /// Indices into `out` of runs that may still open, innermost last.
    openers: [Vec<usize>; KINDS],
    base_depth: usize,
    max_depth: usize,
}

impl Resolver {
    fn delimiter(&mut self, mut run: DelimiterRun) {
        let slot = kind_slot(&run);
        if run.can_close {
            while run.len > 0 && self.close(slot, &mut run) {}
        }
        if run.len == 0 {
            return;
        }
        if run.can_open {
            self.openers[slot].push(self.out.len());
        }
        self.out.push(Piece::Delim(run));
    }

    /// Matches `closer` against the innermost open run of its kind.
    ///
    /// Returns false when nothing matched. A match refused by the depth
    /// bound also forgets every open run of that kind, so later closers of
    /// the kind cannot reach past this one.
    fn close(&mut self, slot: usize, closer: &mut DelimiterRun) -> bool {
        let Some(&oi) = self.openers[slot].last() else {
            return false;
        };
        let Some(Piece::Delim(opener)) = self.out.get(oi) else {
            self.openers[slot].clear();
            return false;
        };
        let (used, styles) = match_shape(opener.len, closer);

        let inner_depth = self.out[oi + 1..].iter().map(Piece::depth).max().unwrap_or(0);
        if self.base_depth + inner_depth + styles.len() > self.max_depth + 1 {
            log::debug!("emphasis nesting bound {} reached; delimiters kept as text", self.max_depth);
            self.openers[slot].clear();
            return false;
        }

        let inner = self.out.split_off(oi + 1);
        for stack in &mut self.openers {
            while stack.last().is_some_and(|&i| i > oi) {
                stack.pop();
            }
        }

        let mut spans = into_nodes(inner);
        for &kind in styles.iter().rev() {
            spans = vec![InlineNode::Style { kind, spans }];
        }
        let depth = inner_depth + styles.len();

        closer.len -= used;
        if let Some(Piece::Delim(opener)) = self.out.last_mut() {
            opener.len -= used;
            if opener.len == 0 {
                self.out.pop();
                self.openers[slot].pop();
            }
        }
        self.out
            .extend(spans.into_iter().map(|node| Piece::Node { node, depth }));
        true
    }
}
