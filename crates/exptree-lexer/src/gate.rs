//! Input gate.
//!
//! Rejects any character outside the configured alphabet, the four operators,
//! parentheses and whitespace before the parser ever sees the input.

use crate::token::{classify, Alphabet, CharClass};
use crate::GateError;

/// Validate raw user input against `alphabet`.
///
/// Positions in the returned error are character indices into `input`
/// as given, whitespace included.
pub fn validate(input: &str, alphabet: Alphabet) -> Result<(), GateError> {
    let mut saw_content = false;

    for (position, ch) in input.chars().enumerate() {
        match classify(ch, alphabet) {
            CharClass::Whitespace => {}
            CharClass::Other => return Err(GateError::Rejected { found: ch, position }),
            _ => saw_content = true,
        }
    }

    if saw_content {
        Ok(())
    } else {
        Err(GateError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_arithmetic() {
        assert_eq!(validate("(2+2)*(55+8)", Alphabet::Digits), Ok(()));
        assert_eq!(validate("a * (b - 4) / c", Alphabet::Alphanumeric), Ok(()));
    }

    #[test]
    fn test_gate_does_not_check_structure() {
        assert_eq!(validate("((+", Alphabet::Digits), Ok(()));
    }

    #[test]
    fn test_rejects_letters_for_digits() {
        assert_eq!(
            validate("2 + x", Alphabet::Digits),
            Err(GateError::Rejected {
                found: 'x',
                position: 4
            })
        );
    }

    #[test]
    fn test_rejects_symbols() {
        assert_eq!(
            validate("2+@", Alphabet::Alphanumeric),
            Err(GateError::Rejected {
                found: '@',
                position: 2
            })
        );
        assert!(validate("2^3", Alphabet::Alphanumeric).is_err());
        assert!(validate("2.5", Alphabet::Digits).is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate("", Alphabet::Digits), Err(GateError::Empty));
        assert_eq!(validate(" \t\n", Alphabet::Alphanumeric), Err(GateError::Empty));
    }
}
