/// Indented code block helpers.
pub struct IndentedCode;

impl IndentedCode {
    /// Drops trailing blank lines; interior blank lines are kept.
    pub fn trim_trailing_blank(lines: &mut Vec<String>) {
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_trailing_blank_lines() {
        let mut lines = vec![
            "a".to_string(),
            String::new(),
            "b".to_string(),
            "  ".to_string(),
            String::new(),
        ];
        IndentedCode::trim_trailing_blank(&mut lines);
        assert_eq!(lines, vec!["a", "", "b"]);
    }
}
