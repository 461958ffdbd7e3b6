use std::collections::HashMap;

use super::kinds::{CodeSpan, Link};

/// Code span and bracket positions for one tokenizer input, computed once.
///
/// The tokenizer consults this instead of rescanning for closers, which
/// keeps unmatched backtick runs and brackets from going quadratic.
#[derive(Debug, Default)]
pub struct SpanIndex {
    /// Opening run start -> (content start, content end, end of closing run).
    code_spans: HashMap<usize, (usize, usize, usize)>,
    /// `[` position -> matching `]` position.
    brackets: HashMap<usize, usize>,
}

impl SpanIndex {
    pub fn build(src: &str) -> Self {
        let mut index = SpanIndex::default();
        index.index_code_spans(src);
        index.index_brackets(src);
        index
    }

    pub fn code_span(&self, at: usize) -> Option<(usize, usize, usize)> {
        self.code_spans.get(&at).copied()
    }

    pub fn bracket_close(&self, at: usize) -> Option<usize> {
        self.brackets.get(&at).copied()
    }

    fn index_code_spans(&mut self, src: &str) {
        let b = src.as_bytes();

        // Every maximal backtick run, grouped by length. Closers may be
        // preceded by a backslash; escapes do not apply inside code.
        let mut runs: Vec<(usize, usize)> = Vec::new();
        let mut by_len: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            if b[i] == CodeSpan::TICK {
                let start = i;
                while i < b.len() && b[i] == CodeSpan::TICK {
                    i += 1;
                }
                runs.push((start, i - start));
                by_len.entry(i - start).or_default().push(start);
            } else {
                i += 1;
            }
        }
        if runs.len() < 2 {
            return;
        }

        // Walk openers left to right, skipping escaped runs and anything
        // already inside a matched span.
        let mut resume = 0;
        for &(start, len) in &runs {
            if start < resume || escaped(b, start) {
                continue;
            }
            let Some(candidates) = by_len.get(&len) else {
                continue;
            };
            let next = candidates.partition_point(|&p| p <= start);
            if let Some(&close) = candidates.get(next) {
                self.code_spans
                    .insert(start, (start + len, close, close + len));
                resume = close + len;
            }
        }
    }

    fn index_brackets(&mut self, src: &str) {
        let b = src.as_bytes();
        let mut stack = Vec::new();
        let mut i = 0;
        while i < b.len() {
            if let Some((_, _, end)) = self.code_span(i) {
                i = end;
                continue;
            }
            match b[i] {
                b'\\' => {
                    i += 2;
                    continue;
                }
                CodeSpan::TICK => {
                    while i < b.len() && b[i] == CodeSpan::TICK {
                        i += 1;
                    }
                    continue;
                }
                Link::OPEN => stack.push(i),
                Link::CLOSE => {
                    if let Some(open) = stack.pop() {
                        self.brackets.insert(open, i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
    }
}

/// Whether the byte at `at` is preceded by an odd number of backslashes.
fn escaped(b: &[u8], at: usize) -> bool {
    b[..at].iter().rev().take_while(|&&c| c == b'\\').count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_runs_of_equal_length() {
        let idx = SpanIndex::build("a ``b`c`` d");
        assert_eq!(idx.code_span(2), Some((4, 7, 9)));
        assert_eq!(idx.code_span(5), None);
    }

    #[test]
    fn unmatched_run_is_not_a_span() {
        let idx = SpanIndex::build("```a``");
        assert_eq!(idx.code_span(0), None);
        assert_eq!(idx.code_span(4), None);
    }

    #[test]
    fn escaped_opener_is_skipped() {
        let idx = SpanIndex::build(r"\`a` b`");
        assert_eq!(idx.code_span(1), None);
        assert_eq!(idx.code_span(3), Some((4, 6, 7)));
    }

    #[test]
    fn brackets_nest_and_skip_code() {
        let idx = SpanIndex::build("[a [b] `]` c]");
        assert_eq!(idx.bracket_close(0), Some(12));
        assert_eq!(idx.bracket_close(3), Some(5));
    }

    #[test]
    fn escaped_brackets_do_not_match() {
        let idx = SpanIndex::build(r"[a\]b]");
        assert_eq!(idx.bracket_close(0), Some(5));
    }
}
