use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// `position` counts characters, not bytes.
    #[error("character {ch:?} at position {position} is outside the printable alphabet")]
    OutOfAlphabet { ch: char, position: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::CipherError;

    #[test]
    fn out_of_alphabet_message() {
        let err = CipherError::OutOfAlphabet {
            ch: '\u{1}',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "character '\\u{1}' at position 3 is outside the printable alphabet"
        );
    }
}
