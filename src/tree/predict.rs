//! Tree Prediction Methods
//!
//! Single-sample traversal of a fitted tree, and batch prediction over a matrix.
use super::tree::Tree;
use crate::data::Matrix;
use crate::errors::SaplingError;
use crate::node::Node;
use rayon::prelude::*;

#[inline]
fn feature_value(row: &[f64], feature: usize) -> Result<f64, SaplingError> {
    row.get(feature)
        .copied()
        .ok_or(SaplingError::FeatureOutOfRange(feature, row.len()))
}

impl<V: Copy + Send + Sync> Tree<V> {
    /// Predict a single sample by walking from the root to a leaf.
    ///
    /// Fails if the sample is shorter than a feature index on its path.
    pub fn predict_row(&self, row: &[f64]) -> Result<V, SaplingError> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return Ok(*value),
                Node::Internal {
                    split_feature,
                    split_value,
                    left,
                    right,
                } => {
                    node = if self.split_rule.goes_left(feature_value(row, *split_feature)?, *split_value) {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    /// Predict every row of the matrix, in row order.
    ///
    /// * `data` - The feature matrix.
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<V>, SaplingError> {
        data.check_shape()?;
        if parallel {
            data.index
                .par_iter()
                .map(|i| self.predict_row(&data.get_row(*i)))
                .collect()
        } else {
            data.index.iter().map(|i| self.predict_row(&data.get_row(*i))).collect()
        }
    }

    /// Index of the leaf a sample lands in, leaves numbered in pre-order
    /// (left subtree before right subtree). Matches the order of [`Tree::leaf_values`].
    pub fn apply_row(&self, row: &[f64]) -> Result<usize, SaplingError> {
        let mut node = &self.root;
        let mut leaf_idx = 0;
        while let Node::Internal {
            split_feature,
            split_value,
            left,
            right,
        } = node
        {
            if self.split_rule.goes_left(feature_value(row, *split_feature)?, *split_value) {
                node = left.as_ref();
            } else {
                leaf_idx += node.n_left_leaves();
                node = right.as_ref();
            }
        }
        Ok(leaf_idx)
    }

    /// Values of all leaves in pre-order.
    pub fn leaf_values(&self) -> Vec<V> {
        let mut values = Vec::with_capacity(self.n_leaves);
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { value } => values.push(*value),
                Node::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        values
    }
}
