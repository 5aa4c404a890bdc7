use crate::error::{CipherError, Result};

/// Lowest encodable character (space, U+0020).
pub const FIRST: char = ' ';
/// Highest encodable character (tilde, U+007E).
pub const LAST: char = '~';
/// Number of characters between `FIRST` and `LAST` inclusive.
pub const SIZE: u8 = (LAST as u8 - FIRST as u8) + 1;

pub fn contains(c: char) -> bool {
    (FIRST..=LAST).contains(&c)
}

/// A signed offset reduced into `0..SIZE`.
///
/// Reduction uses Euclidean modulo, so `-1` and `94` are the same shift and
/// every `i64` is accepted, `i64::MIN` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    pub fn new(offset: i64) -> Self {
        Shift(offset.rem_euclid(i64::from(SIZE)) as u8)
    }

    pub fn amount(self) -> u8 {
        self.0
    }

    /// The shift that undoes `self`.
    pub fn inverse(self) -> Self {
        Shift((SIZE - self.0) % SIZE)
    }

    /// Shifts one character, or `None` when it lies outside the alphabet.
    pub fn apply(self, c: char) -> Option<char> {
        if !contains(c) {
            return None;
        }
        let index = c as u8 - FIRST as u8;
        Some((((index + self.0) % SIZE) + FIRST as u8) as char)
    }
}

impl From<i64> for Shift {
    fn from(offset: i64) -> Self {
        Shift::new(offset)
    }
}

/// Shift a single character by `offset`, wrapping around the alphabet bounds.
pub fn shift_char(c: char, offset: i64) -> Result<char> {
    Shift::new(offset)
        .apply(c)
        .ok_or(CipherError::OutOfAlphabet { ch: c, position: 0 })
}
