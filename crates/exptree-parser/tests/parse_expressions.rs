use exptree_parser::{parse, Alphabet, ExpressionTree, Operator, ParseError, Parser, ParserConfig};
use pretty_assertions::assert_eq;

fn digits_parser() -> Parser {
    Parser::new(ParserConfig::default().with_alphabet(Alphabet::Digits))
}

fn operand(tree: Option<&ExpressionTree>) -> Option<&str> {
    tree.and_then(|n| n.operand())
}

#[test]
fn test_precedence_tree_shape() {
    let tree = parse("2+3*4").unwrap();
    assert_eq!(tree.operator(), Some(Operator::Add));
    let right = tree.right().unwrap();
    assert_eq!(right.operator(), Some(Operator::Mul));
    assert_eq!(operand(right.left()), Some("3"));
    assert_eq!(operand(right.right()), Some("4"));
}

#[test]
fn test_left_associative_chain() {
    let tree = parse("8-3-2").unwrap();
    let left = tree.left().unwrap();
    assert_eq!(left.operator(), Some(Operator::Sub));
    assert_eq!(operand(left.left()), Some("8"));
    assert_eq!(operand(left.right()), Some("3"));
    assert_eq!(operand(tree.right()), Some("2"));
}

#[test]
fn test_parenthesized_override() {
    let tree = parse("(2+3)*4").unwrap();
    assert_eq!(tree.operator(), Some(Operator::Mul));
    assert_eq!(tree.left().and_then(|n| n.operator()), Some(Operator::Add));
    assert_eq!(operand(tree.right()), Some("4"));
}

#[test]
fn test_nested_groups() {
    let tree = parse("((a+b)*(c-d))/e").unwrap();
    assert_eq!(tree.to_string(), "(((a + b) * (c - d)) / e)");
    assert_eq!(tree.node_count(), 9);
    assert_eq!(tree.depth(), 4);
}

#[test]
fn test_same_input_gives_equal_trees() {
    let source = "x * (y + 10) - z / 2";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_different_grouping_gives_different_trees() {
    assert_ne!(parse("a-b-c").unwrap(), parse("a-(b-c)").unwrap());
}

#[test]
fn test_digits_only_deployment() {
    let parser = digits_parser();
    assert_eq!(parser.parse("12*(3+45)").unwrap().to_string(), "(12 * (3 + 45))");
    assert_eq!(
        parser.parse("12*b").unwrap_err(),
        ParseError::InvalidCharacter {
            found: Some('b'),
            position: 3
        }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse("2+@").unwrap_err().to_string(),
        "Invalid character '@' at position 2"
    );
    assert_eq!(
        parse("2*").unwrap_err().to_string(),
        "Invalid character end of input at position 2"
    );
    assert_eq!(
        parse("(2+3").unwrap_err().to_string(),
        "Missing ')' at position 4"
    );
    assert_eq!(
        parse("1)").unwrap_err().to_string(),
        "Unexpected ')' at position 1 after a complete expression"
    );
}

#[test]
fn test_error_positions() {
    assert_eq!(parse("(2+3").unwrap_err().position(), Some(4));
    assert_eq!(parse("2 + @").unwrap_err().position(), Some(2));
    let parser = Parser::new(ParserConfig::default().with_max_depth(0));
    assert_eq!(parser.parse("(1)").unwrap_err().position(), None);
}

#[test]
fn test_gate_then_parse() {
    let source = "a * (b + 3)";
    exptree_lexer::validate(source, Alphabet::Alphanumeric).unwrap();
    assert!(parse(source).is_ok());

    // The gate only checks characters; structure errors surface from the parser.
    let source = "a * (b + 3";
    exptree_lexer::validate(source, Alphabet::Alphanumeric).unwrap();
    assert_eq!(
        parse(source).unwrap_err(),
        ParseError::UnbalancedParen { position: 6 }
    );
}
