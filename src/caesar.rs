use crate::alphabet::Shift;
use crate::error::{CipherError, Result};

fn apply_shift(text: &str, shift: Shift) -> Result<String> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            shift
                .apply(ch)
                .ok_or(CipherError::OutOfAlphabet { ch, position })
        })
        .collect()
}

/// Shift every character of `text` forward by `offset`.
///
/// Stops at the first character outside the alphabet and reports it
/// together with its character index.
pub fn encode(text: &str, offset: i64) -> Result<String> {
    let shift = Shift::new(offset);
    log::debug!(
        "[encode] {} chars, shift {}",
        text.chars().count(),
        shift.amount()
    );
    apply_shift(text, shift)
}

/// Reverse of [`encode`] for the same `offset`.
pub fn decode(text: &str, offset: i64) -> Result<String> {
    let shift = Shift::new(offset).inverse();
    log::debug!(
        "[decode] {} chars, shift {}",
        text.chars().count(),
        shift.amount()
    );
    apply_shift(text, shift)
}

/// A Caesar codec keyed by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCodec {
    offset: i64,
}

impl CaesarCodec {
    pub fn new(offset: i64) -> Self {
        CaesarCodec { offset }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn encode<T>(&self, input: T) -> Result<String>
    where
        T: AsRef<str>,
    {
        encode(input.as_ref(), self.offset)
    }

    pub fn decode<T>(&self, input: T) -> Result<String>
    where
        T: AsRef<str>,
    {
        decode(input.as_ref(), self.offset)
    }
}
