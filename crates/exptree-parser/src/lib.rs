//! exptree parser
//!
//! Parses an arithmetic expression (operands, `+ - * /`, parentheses) into an
//! immutable binary [`ExpressionTree`]. Precedence comes from the grammar
//! layering and every operator is left-associative.
//!
//! # Example
//!
//! ```
//! use exptree_parser::parse;
//!
//! let tree = parse("2+3*4").unwrap();
//! assert_eq!(tree.to_string(), "(2 + (3 * 4))");
//! ```

pub mod ast;
pub mod config;
pub mod parser;

pub use ast::ExpressionTree;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT};
pub use exptree_lexer::{Alphabet, Operator};
pub use parser::Parser;

/// Parser error with position information.
///
/// Positions are 0-based character indices into the whitespace-stripped input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An operand or `(` was expected at `position`.
    #[error("Invalid character {} at position {position}", describe(.found))]
    InvalidCharacter { found: Option<char>, position: usize },

    /// A `)` was expected at `position`.
    #[error("Missing ')' at position {position}")]
    UnbalancedParen { position: usize },

    #[error("Unexpected '{found}' at position {position} after a complete expression")]
    TrailingInput { found: char, position: usize },

    #[error("Parentheses nested too deeply: depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("Expression too tall: tree height {height} exceeds the limit of {limit}")]
    TreeTooTall { height: usize, limit: usize },
}

impl ParseError {
    /// Position of the failure, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::InvalidCharacter { position, .. }
            | ParseError::UnbalancedParen { position }
            | ParseError::TrailingInput { position, .. } => Some(*position),
            ParseError::NestingTooDeep { .. } | ParseError::TreeTooTall { .. } => None,
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{ch}'"),
        None => "end of input".to_string(),
    }
}

/// Parse `source` with the default configuration.
pub fn parse(source: &str) -> Result<ExpressionTree, ParseError> {
    Parser::default().parse(source)
}
