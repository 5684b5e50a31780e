//! WASM bindings for exptree.
//!
//! Exposes the two actions of the expression-tree page to JavaScript:
//! `generate()` returns the tree view a renderer lays out, and `traverse()`
//! returns the label sequence for a chosen order. Both run the input gate
//! before parsing and throw a JS error on failure.

use exptree_lexer::{Alphabet, GateError, UnknownAlphabet};
use exptree_parser::{ExpressionTree, ParseError, Parser, ParserConfig};
use exptree_traverse::{Order, UnknownOrder};
use wasm_bindgen::prelude::*;

/// Anything that can stop the gate → parse → traverse pipeline.
#[derive(Debug, thiserror::Error)]
enum PipelineError {
    #[error(transparent)]
    Alphabet(#[from] UnknownAlphabet),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Order(#[from] UnknownOrder),
}

fn build_tree(source: &str, alphabet: &str) -> Result<ExpressionTree, PipelineError> {
    let alphabet: Alphabet = alphabet.parse()?;
    exptree_lexer::validate(source, alphabet)?;
    let parser = Parser::new(ParserConfig::default().with_alphabet(alphabet));
    Ok(parser.parse(source)?)
}

fn traversal_labels(source: &str, order: &str, alphabet: &str) -> Result<Vec<String>, PipelineError> {
    let order: Order = order.parse()?;
    let tree = build_tree(source, alphabet)?;
    Ok(exptree_traverse::traverse(&tree, order)
        .into_iter()
        .map(String::from)
        .collect())
}

/// Parse an expression into a plain JS tree.
///
/// Leaves are `{ kind: "leaf", operand }`, operator nodes are
/// `{ kind: "operator", operator, left, right }`.
/// `alphabet` is `"digits"` or `"alphanumeric"`.
#[wasm_bindgen]
pub fn generate(source: &str, alphabet: &str) -> Result<JsValue, JsError> {
    let tree = build_tree(source, alphabet).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&tree).map_err(|e| JsError::new(&e.to_string()))
}

/// Traverse an expression's tree, returning its labels as a JS array.
///
/// `order` is `"preorder"`, `"inorder"` or `"postorder"` (the Spanish names
/// are accepted too).
#[wasm_bindgen]
pub fn traverse(source: &str, order: &str, alphabet: &str) -> Result<js_sys::Array, JsError> {
    let labels =
        traversal_labels(source, order, alphabet).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(labels.into_iter().map(JsValue::from).collect())
}

/// Check raw input against the gate without parsing.
#[wasm_bindgen]
pub fn validate(source: &str, alphabet: &str) -> bool {
    alphabet
        .parse::<Alphabet>()
        .is_ok_and(|alphabet| exptree_lexer::validate(source, alphabet).is_ok())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
