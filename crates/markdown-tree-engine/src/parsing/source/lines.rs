use xi_rope::Rope;

/// A single input line with its terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original input.
    pub number: usize,
    /// The line text without its terminator.
    pub text: String,
}

/// Splits a string on `\r\n`, `\n` and `\r`.
///
/// A trailing terminator does not produce an extra empty line, so `"a\n"`
/// and `"a"` both yield one line. Empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<SourceLine> {
    let mut out = Vec::new();
    push_split(text, &mut out);
    out
}

/// Returns numbered lines for a rope.
///
/// Uses `lines_raw` so terminators are seen and handled here, including a
/// lone `\r` that the rope itself does not treat as a line end.
pub fn lines_from_rope(rope: &Rope) -> Vec<SourceLine> {
    let mut out = Vec::new();
    for line in rope.lines_raw(..) {
        push_split(&line, &mut out);
    }
    out
}

/// Normalizes pre-split input: every entry is split again on any embedded
/// terminators, and numbering is recomputed over the result.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<SourceLine> {
    let mut out = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            push_line(&mut out, String::new());
        } else {
            push_split(line, &mut out);
        }
    }
    out
}

fn push_split(text: &str, out: &mut Vec<SourceLine>) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                push_line(out, text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                push_line(out, text[start..i].to_string());
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        push_line(out, text[start..].to_string());
    }
}

fn push_line(out: &mut Vec<SourceLine>, text: String) {
    let number = out.len() + 1;
    out.push(SourceLine { number, text });
}
