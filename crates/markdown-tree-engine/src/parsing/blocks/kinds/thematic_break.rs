/// Thematic break (horizontal rule) syntax: three or more of the same
/// character among `*`, `-`, `_`, interior spaces and tabs ignored.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'*', b'-', b'_'];
    pub const MIN_COUNT: usize = 3;

    pub fn matches(content: &str) -> bool {
        let mut marks = content.bytes().filter(|&b| b != b' ' && b != b'\t');
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for b in marks {
            if b != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_COUNT
    }
}
