//! Binary expression tree.
//!
//! A tree is either a leaf holding an operand or an operator node that owns
//! exactly two subtrees. Trees are only produced by a successful parse and
//! expose no mutating API.

use std::fmt;

use exptree_lexer::Operator;
use serde::{Serialize, Serializer};

/// A parsed arithmetic expression.
///
/// Serializes as the read-only view handed to renderers:
///
/// ```text
/// {"kind":"leaf","operand":"2"}
/// {"kind":"operator","operator":"+","left":{..},"right":{..}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpressionTree {
    /// A number or identifier. Never empty.
    Leaf { operand: String },

    /// `left <operator> right`
    Operator {
        #[serde(serialize_with = "serialize_operator")]
        operator: Operator,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
}

fn serialize_operator<S: Serializer>(op: &Operator, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(op.symbol())
}

impl ExpressionTree {
    pub(crate) fn leaf(operand: String) -> Self {
        debug_assert!(!operand.is_empty());
        ExpressionTree::Leaf { operand }
    }

    pub(crate) fn binary(operator: Operator, left: ExpressionTree, right: ExpressionTree) -> Self {
        ExpressionTree::Operator {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node's label: the operand for a leaf, the operator symbol otherwise.
    pub fn label(&self) -> &str {
        match self {
            ExpressionTree::Leaf { operand } => operand.as_str(),
            ExpressionTree::Operator { operator, .. } => operator.symbol(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExpressionTree::Leaf { .. })
    }

    pub fn operand(&self) -> Option<&str> {
        match self {
            ExpressionTree::Leaf { operand } => Some(operand.as_str()),
            ExpressionTree::Operator { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            ExpressionTree::Leaf { .. } => None,
            ExpressionTree::Operator { operator, .. } => Some(*operator),
        }
    }

    pub fn left(&self) -> Option<&ExpressionTree> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&ExpressionTree> {
        self.children().map(|(_, right)| right)
    }

    /// Both children of an operator node, `None` for a leaf.
    pub fn children(&self) -> Option<(&ExpressionTree, &ExpressionTree)> {
        match self {
            ExpressionTree::Leaf { .. } => None,
            ExpressionTree::Operator { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some((left, right)) = node.children() {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Number of levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some((left, right)) = node.children() {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }
}

// Long operator chains like `1+1+...+1` grow the tree one level per operator,
// so subtrees are detached onto a heap stack instead of dropped recursively.
impl Drop for ExpressionTree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut ExpressionTree, pending: &mut Vec<ExpressionTree>) {
    if let ExpressionTree::Operator { left, right, .. } = node {
        for child in [left, right] {
            if !child.is_leaf() {
                pending.push(std::mem::replace(
                    child.as_mut(),
                    ExpressionTree::Leaf {
                        operand: String::new(),
                    },
                ));
            }
        }
    }
}

/// Fully parenthesized infix form, e.g. `((8 - 3) - 2)`.
impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionTree::Leaf { operand } => f.write_str(operand),
            ExpressionTree::Operator {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
        }
    }
}
