use std::fmt::{self, Display};

/// A node of a binary decision tree.
///
/// Every internal node owns exactly two children, so a tree is a strict
/// binary tree built once and only read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<V> {
    /// Terminal node holding the prediction.
    Leaf { value: V },
    /// Split node, `left` receives the rows matching the tree's split rule
    /// on `split_feature` against `split_value`.
    Internal {
        split_feature: usize,
        split_value: f64,
        left: Box<Node<V>>,
        right: Box<Node<V>>,
    },
}

impl<V> Node<V> {
    pub fn leaf(value: V) -> Self {
        Node::Leaf { value }
    }

    pub fn internal(split_feature: usize, split_value: f64, left: Node<V>, right: Node<V>) -> Self {
        Node::Internal {
            split_feature,
            split_value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// Number of leaves under the left child of this node, used to number
    /// leaves in pre-order.
    pub(crate) fn n_left_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, .. } => left.n_leaves(),
        }
    }
}

impl<V: Display> Display for Node<V> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf { value } => write!(f, "leaf={}", value),
            Node::Internal {
                split_feature,
                split_value,
                ..
            } => write!(f, "[{} : {}]", split_feature, split_value),
        }
    }
}
