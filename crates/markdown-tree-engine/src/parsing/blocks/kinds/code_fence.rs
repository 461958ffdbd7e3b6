use crate::parsing::decode::decode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            CodeFence::BACKTICK => Some(FenceKind::Backticks),
            CodeFence::TILDE => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }
}

/// An opening fence: the exact run that a closing fence must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Length of the opening run; a closer must be at least this long.
    pub len: usize,
    /// First word of the info string, escapes and references decoded.
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    /// Recognizes an opening fence in indentation-stripped `content`.
    pub fn open(content: &str) -> Option<FenceOpen> {
        let (kind, len) = Self::run(content)?;
        let info = content[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        let language = info
            .split_whitespace()
            .next()
            .map(|word| decode(word).into_owned())
            .filter(|lang| !lang.is_empty());
        Some(FenceOpen {
            kind,
            len,
            language,
        })
    }

    /// Whether `content` is a bare closing fence for `open`.
    pub fn closes(open: &FenceOpen, content: &str) -> bool {
        match Self::run(content) {
            Some((kind, len)) => {
                kind == open.kind && len >= open.len && content[len..].trim().is_empty()
            }
            None => false,
        }
    }

    fn run(content: &str) -> Option<(FenceKind, usize)> {
        let first = *content.as_bytes().first()?;
        let kind = FenceKind::from_byte(first)?;
        let len = content.bytes().take_while(|&b| b == kind.byte()).count();
        (len >= Self::MIN_LEN).then_some((kind, len))
    }
}
