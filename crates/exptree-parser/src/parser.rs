//! Expression parser.
//!
//! Recursive descent over three productions, one per precedence layer:
//!
//! ```text
//! Expr    := Term ( ('+' | '-') Term )*
//! Term    := Factor ( ('*' | '/') Factor )*
//! Factor  := '(' Expr ')' | Operand
//! ```
//!
//! Each production receives the cursor explicitly and folds repeated
//! operators to the left, so `8-3-2` becomes `(8-3)-2`.

use exptree_lexer::{CharClass, Operator, Scanner};

use crate::ast::ExpressionTree;
use crate::config::ParserConfig;
use crate::ParseError;

/// A subtree together with its height (a leaf has height 1).
pub(crate) type Parsed = (ExpressionTree, usize);

/// Arithmetic expression parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse `source` into an expression tree.
    ///
    /// Whitespace is stripped first; error positions index into the
    /// stripped string. The whole input must form one expression.
    pub fn parse(&self, source: &str) -> Result<ExpressionTree, ParseError> {
        let mut scanner = Scanner::new(source, self.config.alphabet);
        let (tree, _) = self.parse_expr(&mut scanner, 0)?;

        if let Some(found) = scanner.peek() {
            return Err(ParseError::TrailingInput {
                found,
                position: scanner.pos(),
            });
        }

        Ok(tree)
    }

    /// `Expr := Term ( ('+' | '-') Term )*`
    pub(crate) fn parse_expr(
        &self,
        scanner: &mut Scanner,
        depth: usize,
    ) -> Result<Parsed, ParseError> {
        let mut node = self.parse_term(scanner, depth)?;

        while let Some(op) = peek_operator(scanner).filter(|op| op.is_additive()) {
            scanner.advance();
            let right = self.parse_term(scanner, depth)?;
            node = self.fold(op, node, right)?;
        }

        Ok(node)
    }

    /// `Term := Factor ( ('*' | '/') Factor )*`
    pub(crate) fn parse_term(
        &self,
        scanner: &mut Scanner,
        depth: usize,
    ) -> Result<Parsed, ParseError> {
        let mut node = self.parse_factor(scanner, depth)?;

        while let Some(op) = peek_operator(scanner).filter(|op| op.is_multiplicative()) {
            scanner.advance();
            let right = self.parse_factor(scanner, depth)?;
            node = self.fold(op, node, right)?;
        }

        Ok(node)
    }

    /// `Factor := '(' Expr ')' | Operand`
    pub(crate) fn parse_factor(
        &self,
        scanner: &mut Scanner,
        depth: usize,
    ) -> Result<Parsed, ParseError> {
        if scanner.eat('(') {
            let depth = depth + 1;
            if depth > self.config.max_depth {
                return Err(ParseError::NestingTooDeep {
                    depth,
                    limit: self.config.max_depth,
                });
            }

            let node = self.parse_expr(scanner, depth)?;

            if !scanner.eat(')') {
                return Err(ParseError::UnbalancedParen {
                    position: scanner.pos(),
                });
            }
            return Ok(node);
        }

        match scanner.take_operand() {
            Some(operand) => Ok((ExpressionTree::leaf(operand), 1)),
            None => Err(ParseError::InvalidCharacter {
                found: scanner.peek(),
                position: scanner.pos(),
            }),
        }
    }

    /// Join two subtrees under `op`, enforcing the height limit.
    fn fold(&self, op: Operator, left: Parsed, right: Parsed) -> Result<Parsed, ParseError> {
        let height = left.1.max(right.1) + 1;
        if height > self.config.max_height {
            return Err(ParseError::TreeTooTall {
                height,
                limit: self.config.max_height,
            });
        }
        Ok((ExpressionTree::binary(op, left.0, right.0), height))
    }
}

fn peek_operator(scanner: &Scanner) -> Option<Operator> {
    match scanner.peek_class() {
        Some(CharClass::Operator(op)) => Some(op),
        _ => None,
    }
}
