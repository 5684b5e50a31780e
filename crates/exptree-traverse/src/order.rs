use std::fmt;
use std::str::FromStr;

/// Traversal order.
///
/// The names follow the classroom convention the tool was built for, which
/// does not match the textbook definitions:
///
/// | Order       | Sequence for a node with children L, R |
/// |-------------|----------------------------------------|
/// | `Preorder`  | L, node, R                             |
/// | `Inorder`   | L, R, node                             |
/// | `Postorder` | node, L, R                             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Preorder,
    Inorder,
    Postorder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];

    pub fn name(self) -> &'static str {
        match self {
            Order::Preorder => "preorder",
            Order::Inorder => "inorder",
            Order::Postorder => "postorder",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an order name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown traversal order '{0}' (expected preorder, inorder or postorder)")]
pub struct UnknownOrder(pub String);

impl FromStr for Order {
    type Err = UnknownOrder;

    /// Accepts the English names and the Spanish `preorden`, `inorden`,
    /// `postorden`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preorder" | "preorden" => Ok(Order::Preorder),
            "inorder" | "inorden" => Ok(Order::Inorder),
            "postorder" | "postorden" => Ok(Order::Postorder),
            _ => Err(UnknownOrder(s.to_string())),
        }
    }
}
