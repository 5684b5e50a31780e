//! exptree traversal
//!
//! Linearizes an [`ExpressionTree`] into its node labels in one of three
//! [`Order`]s. The walk is read-only, visits every node once and keeps an
//! explicit stack, so tree height never touches the call stack.
//!
//! ```text
//! ExpressionTree → traverse(tree, order) → ["2", "3", "+"]
//! ```

pub mod order;

pub use order::{Order, UnknownOrder};

use exptree_parser::ExpressionTree;

/// Pending work on the traversal stack.
enum Step<'a> {
    /// Expand a subtree according to the order.
    Visit(&'a ExpressionTree),
    /// Emit a single node's label.
    Emit(&'a ExpressionTree),
}

/// Collect the labels of `tree` in the given order.
///
/// Labels borrow from the tree; operator labels are their symbols.
/// The result always holds exactly `tree.node_count()` labels.
pub fn traverse(tree: &ExpressionTree, order: Order) -> Vec<&str> {
    let mut labels = Vec::new();
    let mut stack = vec![Step::Visit(tree)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(node) => labels.push(node.label()),
            Step::Visit(node) => match node.children() {
                None => labels.push(node.label()),
                // Pushed in reverse of the visit sequence.
                Some((left, right)) => match order {
                    Order::Preorder => {
                        stack.extend([Step::Visit(right), Step::Emit(node), Step::Visit(left)])
                    }
                    Order::Inorder => {
                        stack.extend([Step::Emit(node), Step::Visit(right), Step::Visit(left)])
                    }
                    Order::Postorder => {
                        stack.extend([Step::Visit(right), Step::Visit(left), Step::Emit(node)])
                    }
                },
            },
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use exptree_parser::{parse, Parser, ParserConfig};
    use pretty_assertions::assert_eq;

    fn labels(source: &str, order: Order) -> Vec<String> {
        let tree = parse(source).unwrap();
        traverse(&tree, order).into_iter().map(String::from).collect()
    }

    fn joined(source: &str, order: Order) -> String {
        labels(source, order).join(" ")
    }

    #[test]
    fn test_preorder_is_left_node_right() {
        assert_eq!(joined("2+3*4", Order::Preorder), "2 + 3 * 4");
        assert_eq!(joined("(2+2)*(55+8)", Order::Preorder), "2 + 2 * 55 + 8");
    }

    #[test]
    fn test_inorder_is_left_right_node() {
        assert_eq!(joined("(2+2)*(55+8)", Order::Inorder), "2 2 + 55 8 + *");
        assert_eq!(joined("8-3-2", Order::Inorder), "8 3 - 2 -");
    }

    #[test]
    fn test_postorder_is_node_left_right() {
        assert_eq!(joined("2+3*4", Order::Postorder), "+ 2 * 3 4");
        assert_eq!(joined("(2+2)*(55+8)", Order::Postorder), "* + 2 2 + 55 8");
    }

    #[test]
    fn test_leaf_only() {
        for order in Order::ALL {
            assert_eq!(labels("42", order), vec!["42"]);
        }
    }

    #[test]
    fn test_identifiers_keep_full_operand() {
        assert_eq!(joined("rate*(x1-y2)", Order::Inorder), "rate x1 y2 - *");
    }

    #[test]
    fn test_every_node_visited_once() {
        let tree = parse("a*(b+c)/d-e*f+(g-h)").unwrap();
        let count = tree.node_count();
        for order in Order::ALL {
            let seq = traverse(&tree, order);
            assert_eq!(seq.len(), count, "{order} should emit {count} labels");
            let mut sorted = seq.clone();
            sorted.sort_unstable();
            let mut expected = traverse(&tree, Order::Preorder);
            expected.sort_unstable();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_deep_left_chain() {
        let source = vec!["1"; 50_000].join("+");
        let parser = Parser::new(ParserConfig::default().with_max_height(50_000));
        let tree = parser.parse(&source).unwrap();
        for order in Order::ALL {
            assert_eq!(traverse(&tree, order).len(), 99_999);
        }
        assert_eq!(traverse(&tree, Order::Postorder)[..3].to_vec(), vec!["+", "+", "+"]);
        assert_eq!(traverse(&tree, Order::Inorder)[..3].to_vec(), vec!["1", "1", "+"]);
    }
}
