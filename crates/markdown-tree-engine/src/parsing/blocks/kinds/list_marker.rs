/// The kind of marker that opened a list. Items continue a list only when
/// their marker has the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`.
    Bullet(u8),
    /// `N.` or `N)`, keyed by the delimiter.
    Ordered(u8),
}

/// A list marker recognized at the start of a line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub marker: ListMarker,
    /// Numeric value for ordered markers.
    pub number: Option<u64>,
    /// Byte width of the marker itself (without following whitespace).
    pub width: usize,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const DELIMITERS: [u8; 2] = [b'.', b')'];
    pub const MAX_DIGITS: usize = 9;

    /// Parses a marker followed by whitespace or the end of the line.
    pub fn parse(content: &str) -> Option<MarkerMatch> {
        let b = content.as_bytes();
        let first = *b.first()?;

        let (marker, number, width) = if Self::BULLETS.contains(&first) {
            (ListMarker::Bullet(first), None, 1)
        } else {
            let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delim = *b.get(digits)?;
            if !Self::DELIMITERS.contains(&delim) {
                return None;
            }
            let number = content[..digits].parse::<u64>().ok()?;
            (ListMarker::Ordered(delim), Some(number), digits + 1)
        };

        match b.get(width) {
            None | Some(b' ' | b'\t') => Some(MarkerMatch {
                marker,
                number,
                width,
            }),
            _ => None,
        }
    }

    /// The bullet character, for bullet lists.
    pub fn bullet(self) -> Option<u8> {
        match self {
            ListMarker::Bullet(c) => Some(c),
            ListMarker::Ordered(_) => None,
        }
    }
}
