use crate::data::Matrix;
use crate::node::Node;
use crate::objective::{majority_class, mean, n_distinct_classes};
use crate::splitter::{GiniSplitter, SplitInfo, SplitRule, Splitter, SquaredErrorSplitter};
use log::debug;
use std::fmt::{self, Display};

/// A fitted binary decision tree.
///
/// `V` is the leaf value, a class id for classification trees and the
/// mean target for regression trees. The tree is built in one pass and is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<V> {
    pub root: Node<V>,
    /// Routing rule shared by every internal node.
    pub split_rule: SplitRule,
    pub depth: usize,
    pub n_leaves: usize,
    /// Number of features of the training data.
    pub n_features: usize,
}

impl<V> Tree<V> {
    fn from_root(root: Node<V>, split_rule: SplitRule, n_features: usize) -> Self {
        Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            root,
            split_rule,
            n_features,
        }
    }
}

impl Tree<usize> {
    /// Grow a classification tree on the rows in `index`.
    ///
    /// `index` may repeat rows, which is how bootstrap samples are fitted.
    /// A node becomes a leaf holding its majority class when `max_depth` is
    /// reached (the root is at depth 0), when it has at most one row, when it
    /// is pure, or when no split leaves both sides non-empty.
    ///
    /// * `data` - Feature matrix.
    /// * `y` - Class id of every row of `data`, below [`crate::constants::MAX_CLASSES`].
    /// * `index` - Rows to fit on, non-empty.
    /// * `max_depth` - Optional depth limit.
    pub fn fit_classification(data: &Matrix<f64>, y: &[usize], index: &[usize], max_depth: Option<usize>) -> Self {
        let grower = ClassificationGrower {
            splitter: GiniSplitter,
            data,
            y,
            max_depth,
        };
        let root = grower.grow(index, 0);
        Tree::from_root(root, grower.splitter.split_rule(), data.cols)
    }
}

impl Tree<f64> {
    /// Grow a regression tree on the rows in `index`.
    ///
    /// The root is always searched for a split regardless of its size. Below
    /// the root, with depth counted from 1 at the root, the children of a
    /// split become leaves once `max_depth` is reached; otherwise a child
    /// with at most `min_samples_split` rows becomes a leaf and a larger one
    /// is split again. Leaves hold the mean target of their rows.
    ///
    /// * `data` - Feature matrix.
    /// * `y` - Target of every row of `data`.
    /// * `index` - Rows to fit on, non-empty.
    /// * `max_depth` - Optional depth limit.
    /// * `min_samples_split` - Children with this many rows or fewer become leaves.
    pub fn fit_regression(
        data: &Matrix<f64>,
        y: &[f64],
        index: &[usize],
        max_depth: Option<usize>,
        min_samples_split: usize,
    ) -> Self {
        let grower = RegressionGrower {
            splitter: SquaredErrorSplitter,
            data,
            y,
            max_depth,
            min_samples_split,
        };
        let root = match grower.splitter.best_split(data, y, index) {
            Some(split) => grower.grow_split(split, 1),
            None => grower.terminal(index),
        };
        Tree::from_root(root, grower.splitter.split_rule(), data.cols)
    }
}

#[inline]
fn reached(max_depth: Option<usize>, depth: usize) -> bool {
    matches!(max_depth, Some(d) if depth >= d)
}

struct ClassificationGrower<'a, 'b> {
    splitter: GiniSplitter,
    data: &'a Matrix<'b, f64>,
    y: &'a [usize],
    max_depth: Option<usize>,
}

impl<'a, 'b> ClassificationGrower<'a, 'b> {
    fn grow(&self, index: &[usize], depth: usize) -> Node<usize> {
        let labels: Vec<usize> = index.iter().map(|&i| self.y[i]).collect();
        let majority = majority_class(&labels);
        if reached(self.max_depth, depth) || index.len() <= 1 || n_distinct_classes(&labels) == 1 {
            return Node::leaf(majority);
        }
        match self.splitter.best_split(self.data, self.y, index) {
            Some(SplitInfo {
                split_feature,
                split_value,
                left_index,
                right_index,
                ..
            }) => Node::internal(
                split_feature,
                split_value,
                self.grow(&left_index, depth + 1),
                self.grow(&right_index, depth + 1),
            ),
            None => {
                debug!("No valid split for {} rows at depth {}, adding a leaf.", index.len(), depth);
                Node::leaf(majority)
            }
        }
    }
}

struct RegressionGrower<'a, 'b> {
    splitter: SquaredErrorSplitter,
    data: &'a Matrix<'b, f64>,
    y: &'a [f64],
    max_depth: Option<usize>,
    min_samples_split: usize,
}

impl<'a, 'b> RegressionGrower<'a, 'b> {
    fn terminal(&self, index: &[usize]) -> Node<f64> {
        let targets: Vec<f64> = index.iter().map(|&i| self.y[i]).collect();
        Node::leaf(mean(&targets))
    }

    /// Turn a split found at `depth` into an internal node. The splitter
    /// never returns an empty side, so both children always get their own rows.
    fn grow_split(&self, split: SplitInfo, depth: usize) -> Node<f64> {
        let (left, right) = if reached(self.max_depth, depth) {
            (self.terminal(&split.left_index), self.terminal(&split.right_index))
        } else {
            (
                self.grow_child(&split.left_index, depth),
                self.grow_child(&split.right_index, depth),
            )
        };
        Node::internal(split.split_feature, split.split_value, left, right)
    }

    fn grow_child(&self, index: &[usize], depth: usize) -> Node<f64> {
        if index.len() <= self.min_samples_split {
            return self.terminal(index);
        }
        match self.splitter.best_split(self.data, self.y, index) {
            Some(split) => self.grow_split(split, depth + 1),
            None => {
                debug!("No valid split for {} rows at depth {}, adding a leaf.", index.len(), depth + 1);
                self.terminal(index)
            }
        }
    }
}

impl<V: Display> Display for Tree<V> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(&Node<V>, usize)> = vec![(&self.root, 0)];
        let mut r = String::new();
        while let Some((node, depth)) = print_buffer.pop() {
            r += format!("{}{}\n", "      ".repeat(depth), node).as_str();
            if let Node::Internal { left, right, .. } = node {
                print_buffer.push((right.as_ref(), depth + 1));
                print_buffer.push((left.as_ref(), depth + 1));
            }
        }
        write!(f, "{}", r)
    }
}
