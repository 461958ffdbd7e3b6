use crate::parsing::source::SourceLine;

use super::{
    classify::LineClass,
    containers::ContainerStack,
    kinds::{BlockQuote, FenceOpen, IndentedCode, Paragraph},
    open::{Flow, RULES, interrupts_paragraph},
    types::{ContainerFrame, RawBlock},
};

/// The leaf block currently accepting lines, if any.
#[derive(Debug, Default)]
pub enum LeafState {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        open: FenceOpen,
        /// Indentation of the opening fence; stripped from content lines.
        indent: usize,
        lines: Vec<String>,
        /// 1-based line number of the first content line.
        start_line: usize,
    },
    Indented {
        lines: Vec<String>,
    },
}

impl LeafState {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, LeafState::Paragraph { .. })
    }
}

/// Line-at-a-time block state machine.
///
/// Each line is first matched against the open containers (outermost
/// first). A paragraph may swallow a line lazily when some containers did
/// not match; otherwise unmatched containers close and the remainder goes
/// through the rule table in `open`.
pub struct BlockBuilder {
    pub(super) containers: ContainerStack,
    pub(super) leaf: LeafState,
    pub(super) line_number: usize,
    max_depth: usize,
}

impl BlockBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            containers: ContainerStack::default(),
            leaf: LeafState::None,
            line_number: 0,
            max_depth,
        }
    }

    pub fn push(&mut self, line: &SourceLine) {
        self.line_number = line.number;
        let mut c = LineClass::new(&line.text, 0);

        let open = self.containers.depth();
        let mut matched = 0;
        while let Some(frame) = self.containers.frame(matched) {
            match frame {
                ContainerFrame::Quote => match BlockQuote::strip_marker(&c) {
                    Some(rest) => c = rest,
                    None => break,
                },
                ContainerFrame::List { .. } => {}
                ContainerFrame::Item { content_indent } => {
                    if !c.is_blank && c.indent < *content_indent {
                        break;
                    }
                    c = c.strip_columns(*content_indent);
                }
            }
            matched += 1;
        }

        if matched < open {
            if let LeafState::Paragraph { lines } = &mut self.leaf
                && !c.is_blank
                && !interrupts_paragraph(&c)
            {
                lines.push(c.content().trim_start().to_string());
                return;
            }
            self.flush_leaf();
            self.containers.truncate(matched);
        }

        self.apply_rules(c);
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        if let LeafState::Fence { start_line, .. } = &self.leaf {
            log::debug!(
                "code fence opened before line {start_line} closed implicitly at end of input"
            );
        }
        self.flush_leaf();
        self.containers.finish()
    }

    /// Whether another quote or list item may open at the current depth.
    pub(super) fn can_nest(&self) -> bool {
        let ok = self.containers.nesting() < self.max_depth;
        if !ok {
            log::debug!(
                "line {}: nesting bound {} reached, container marker kept as text",
                self.line_number,
                self.max_depth
            );
        }
        ok
    }

    /// Emits the current leaf block into the innermost container.
    pub(super) fn flush_leaf(&mut self) {
        let block = match std::mem::take(&mut self.leaf) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => RawBlock::Paragraph {
                text: Paragraph::join(&lines),
            },
            LeafState::Fence {
                open,
                lines,
                start_line,
                ..
            } => RawBlock::CodeBlock {
                language: open.language,
                lines,
                start_line_number: Some(start_line),
            },
            LeafState::Indented { mut lines } => {
                IndentedCode::trim_trailing_blank(&mut lines);
                RawBlock::CodeBlock {
                    language: None,
                    lines,
                    start_line_number: None,
                }
            }
        };
        self.containers.emit(block);
    }

    /// Replaces the current leaf with a new one.
    pub(super) fn start_leaf(&mut self, leaf: LeafState) {
        self.flush_leaf();
        self.containers.close_dangling_list();
        self.leaf = leaf;
    }

    fn apply_rules(&mut self, mut c: LineClass) {
        loop {
            let Some(rule) = RULES.iter().find(|r| (r.applies)(self, &c)) else {
                return;
            };
            log::trace!("line {}: {}", self.line_number, rule.name);
            match (rule.apply)(self, c) {
                Flow::Done => return,
                Flow::Continue(rest) => c = rest,
            }
        }
    }
}
