use std::fmt;
use std::str::FromStr;

/// The set of characters an operand may be built from.
///
/// Both alphabets are valid deployments: a numeric-only calculator tree, or
/// the identifier-friendly variant that also accepts ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `0-9`
    Digits,
    /// `0-9a-zA-Z`
    #[default]
    Alphanumeric,
}

impl Alphabet {
    /// Check whether `ch` may appear inside an operand.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Alphabet::Digits => ch.is_ascii_digit(),
            Alphabet::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Digits => "digits",
            Alphabet::Alphanumeric => "alphanumeric",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an alphabet name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown alphabet '{0}' (expected 'digits' or 'alphanumeric')")]
pub struct UnknownAlphabet(pub String);

impl FromStr for Alphabet {
    type Err = UnknownAlphabet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digits" => Ok(Alphabet::Digits),
            "alphanumeric" => Ok(Alphabet::Alphanumeric),
            _ => Err(UnknownAlphabet(s.to_string())),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The symbol used as this operator's label.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// `+` and `-`, the loosely binding layer of the grammar.
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }

    /// `*` and `/`, the tightly binding layer of the grammar.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Character classification shared by the input gate and the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Operand,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Whitespace,
    Other,
}

/// Classify a single character against the given alphabet.
pub fn classify(ch: char, alphabet: Alphabet) -> CharClass {
    if alphabet.accepts(ch) {
        return CharClass::Operand;
    }
    if let Some(op) = Operator::from_char(ch) {
        return CharClass::Operator(op);
    }
    match ch {
        '(' => CharClass::OpenParen,
        ')' => CharClass::CloseParen,
        c if c.is_whitespace() => CharClass::Whitespace,
        _ => CharClass::Other,
    }
}
