use exptree_lexer::Alphabet;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default limit on tree height. Operator chains like `1+1+...+1` add a
/// level per operator without any parentheses.
pub const DEFAULT_MAX_HEIGHT: usize = 512;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Characters an operand may contain.
    pub alphabet: Alphabet,
    /// Maximum parenthesis nesting before the parse fails with
    /// [`ParseError::NestingTooDeep`](crate::ParseError::NestingTooDeep).
    pub max_depth: usize,
    /// Maximum tree height (a lone operand has height 1) before the parse
    /// fails with [`ParseError::TreeTooTall`](crate::ParseError::TreeTooTall).
    /// Bounds every recursive walk of the tree, including `Display` and
    /// serialization.
    pub max_height: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl ParserConfig {
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }
}
