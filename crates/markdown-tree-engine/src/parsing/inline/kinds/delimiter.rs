/// Emphasis and strikethrough delimiter characters.
pub struct Delimiter;

impl Delimiter {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';
    /// Tilde runs longer than this are always literal.
    pub const MAX_TILDE_RUN: usize = 2;

    pub fn is_delimiter(b: u8) -> bool {
        matches!(b, Self::STAR | Self::UNDERSCORE | Self::TILDE)
    }

    /// Computes `(can_open, can_close)` for a run of `ch` between `before`
    /// and `after` (the characters outside the run, if any).
    ///
    /// A run opens when the character after it is not whitespace and closes
    /// when the character before it is not whitespace. `_` runs also need a
    /// non-alphanumeric character on their outer side.
    pub fn flanking(ch: u8, before: Option<char>, after: Option<char>) -> (bool, bool) {
        let solid = |c: Option<char>| c.is_some_and(|c| !c.is_whitespace());
        let word = |c: Option<char>| c.is_some_and(char::is_alphanumeric);

        let mut can_open = solid(after);
        let mut can_close = solid(before);
        if ch == Self::UNDERSCORE {
            can_open &= !word(before);
            can_close &= !word(after);
        }
        (can_open, can_close)
    }
}
