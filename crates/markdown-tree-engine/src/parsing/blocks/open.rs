//! The ordered per-line rule table.
//!
//! After a line has been matched against the open containers, its remainder
//! is offered to each rule in order; the first rule whose predicate holds
//! handles it. Container openers (list items, quotes) hand the text after
//! their marker back for another pass through the table.

use super::{
    builder::{BlockBuilder, LeafState},
    classify::{CODE_INDENT, LineClass},
    kinds::{BlockQuote, CodeFence, Heading, ListMarker, Paragraph, ThematicBreak},
    types::{ContainerFrame, RawBlock},
};

pub enum Flow {
    Done,
    Continue(LineClass),
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&BlockBuilder, &LineClass) -> bool,
    pub apply: fn(&mut BlockBuilder, LineClass) -> Flow,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "fenced_content",
        applies: |b, _| matches!(b.leaf, LeafState::Fence { .. }),
        apply: fenced_content,
    },
    Rule {
        name: "blank",
        applies: |_, c| c.is_blank,
        apply: blank,
    },
    Rule {
        name: "fence_open",
        applies: |_, c| c.may_open() && CodeFence::open(c.content()).is_some(),
        apply: fence_open,
    },
    Rule {
        name: "indented_code",
        applies: |b, c| c.indent >= CODE_INDENT && !b.leaf.is_paragraph(),
        apply: indented_code,
    },
    Rule {
        name: "atx_heading",
        applies: |_, c| c.may_open() && Heading::atx(c.content()).is_some(),
        apply: atx_heading,
    },
    // Only a paragraph still open in the underline's own container can be
    // promoted; an underline that closed the container arrives with no leaf.
    Rule {
        name: "setext_heading",
        applies: |b, c| {
            b.leaf.is_paragraph() && c.may_open() && Heading::setext_level(c.content()).is_some()
        },
        apply: setext_heading,
    },
    Rule {
        name: "thematic_break",
        applies: |_, c| c.may_open() && ThematicBreak::matches(c.content()),
        apply: thematic_break,
    },
    Rule {
        name: "list_item",
        applies: |b, c| {
            c.may_open() && ListMarker::parse(c.content()).is_some() && b.can_nest()
        },
        apply: list_item,
    },
    Rule {
        name: "quote",
        applies: |b, c| BlockQuote::starts(c) && b.can_nest(),
        apply: quote,
    },
    Rule {
        name: "text",
        applies: |_, _| true,
        apply: text,
    },
];

/// Whether `c` would start a new block rather than lazily continue a
/// paragraph whose container did not match this line.
pub fn interrupts_paragraph(c: &LineClass) -> bool {
    if !c.may_open() {
        return false;
    }
    let content = c.content();
    CodeFence::open(content).is_some()
        || Heading::atx(content).is_some()
        || ThematicBreak::matches(content)
        || ListMarker::parse(content).is_some()
        || BlockQuote::starts(c)
}

fn fenced_content(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let LeafState::Fence {
        open,
        indent,
        lines,
        ..
    } = &mut b.leaf
    else {
        return text(b, c);
    };
    if c.indent < CODE_INDENT && CodeFence::closes(open, c.content()) {
        b.flush_leaf();
    } else {
        lines.push(c.strip_columns(*indent).text);
    }
    Flow::Done
}

fn blank(b: &mut BlockBuilder, c: LineClass) -> Flow {
    match &mut b.leaf {
        LeafState::Indented { lines } => lines.push(c.strip_columns(CODE_INDENT).text),
        _ => b.flush_leaf(),
    }
    Flow::Done
}

fn fence_open(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let Some(open) = CodeFence::open(c.content()) else {
        return text(b, c);
    };
    let start_line = b.line_number + 1;
    b.start_leaf(LeafState::Fence {
        open,
        indent: c.indent,
        lines: Vec::new(),
        start_line,
    });
    Flow::Done
}

fn indented_code(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let line = c.strip_columns(CODE_INDENT).text;
    match &mut b.leaf {
        LeafState::Indented { lines } => lines.push(line),
        _ => b.start_leaf(LeafState::Indented { lines: vec![line] }),
    }
    Flow::Done
}

fn atx_heading(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let Some((level, title)) = Heading::atx(c.content()) else {
        return text(b, c);
    };
    b.flush_leaf();
    b.containers.emit(RawBlock::Heading { level, text: title });
    Flow::Done
}

fn setext_heading(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let Some(level) = Heading::setext_level(c.content()) else {
        return text(b, c);
    };
    let LeafState::Paragraph { lines } = std::mem::replace(&mut b.leaf, LeafState::None) else {
        return text(b, c);
    };
    b.containers.emit(RawBlock::Heading {
        level,
        text: Paragraph::join(&lines),
    });
    Flow::Done
}

fn thematic_break(b: &mut BlockBuilder, c: LineClass) -> Flow {
    b.flush_leaf();
    let content = c.content().as_bytes();
    let continues_list = match b.containers.dangling_list() {
        Some(ContainerFrame::List { marker, .. }) => {
            marker.bullet() == content.first().copied()
                && matches!(content.get(1), Some(b' ' | b'\t'))
        }
        _ => false,
    };
    if continues_list && b.can_nest() {
        b.containers.push(ContainerFrame::Item {
            content_indent: c.indent + 2,
        });
    }
    b.containers.emit(RawBlock::HorizontalRule);
    Flow::Done
}

fn list_item(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let Some(m) = ListMarker::parse(c.content()) else {
        return text(b, c);
    };
    b.flush_leaf();

    let same_list = matches!(
        b.containers.dangling_list(),
        Some(ContainerFrame::List { marker, .. }) if *marker == m.marker
    );
    if !same_list {
        b.containers.close_dangling_list();
        b.containers.push(ContainerFrame::List {
            marker: m.marker,
            start: m.number,
        });
    }

    let rest = c.after(m.width);
    let padding = if rest.is_blank || rest.indent > CODE_INDENT {
        1
    } else {
        rest.indent
    };
    b.containers.push(ContainerFrame::Item {
        content_indent: c.indent + m.width + padding,
    });

    if rest.is_blank {
        Flow::Done
    } else {
        Flow::Continue(rest.strip_columns(padding))
    }
}

fn quote(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let Some(rest) = BlockQuote::strip_marker(&c) else {
        return text(b, c);
    };
    b.flush_leaf();
    b.containers.close_dangling_list();
    b.containers.push(ContainerFrame::Quote);
    Flow::Continue(rest)
}

fn text(b: &mut BlockBuilder, c: LineClass) -> Flow {
    let line = c.content().trim_start().to_string();
    match &mut b.leaf {
        LeafState::Paragraph { lines } => lines.push(line),
        _ => b.start_leaf(LeafState::Paragraph { lines: vec![line] }),
    }
    Flow::Done
}
