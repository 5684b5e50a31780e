//! exptree lexer
//!
//! Character-level front end for arithmetic expressions: the input gate that
//! checks raw text against a configured operand alphabet, the character
//! classes shared with the parser, and the whitespace-stripping cursor the
//! parser reads from.
//!
//! # Example
//!
//! ```
//! use exptree_lexer::{validate, Alphabet, Scanner};
//!
//! assert!(validate("2 + 3", Alphabet::Digits).is_ok());
//! let scanner = Scanner::new("2 + 3", Alphabet::Digits);
//! assert_eq!(scanner.normalized(), "2+3");
//! ```

pub mod gate;
pub mod scanner;
pub mod token;

pub use gate::validate;
pub use scanner::Scanner;
pub use token::{classify, Alphabet, CharClass, Operator, UnknownAlphabet};

/// Input rejected by the gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("Invalid expression: input is empty")]
    Empty,

    #[error("Invalid expression: character '{found}' at position {position} is not allowed")]
    Rejected { found: char, position: usize },
}
