//! Splitter
//!
//! Exhaustive best split search over every feature and candidate threshold.
//! The classification and regression searches share the same loop and only
//! differ in the candidate thresholds, the side a value equal to the
//! threshold falls on, and the node cost.
use crate::data::Matrix;
use crate::objective::{gini_impurity, sum_squared_error};
use serde::{Deserialize, Serialize};

/// Comparison used to route a feature value to the left child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitRule {
    /// `value <= threshold` goes left.
    LessOrEqual,
    /// `value < threshold` goes left.
    Less,
}

impl SplitRule {
    #[inline]
    pub fn goes_left(&self, value: f64, threshold: f64) -> bool {
        match self {
            SplitRule::LessOrEqual => value <= threshold,
            SplitRule::Less => value < threshold,
        }
    }
}

/// The winning candidate of a split search.
///
/// Both index sets are non-empty and keep the row order of the searched node.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub split_value: f64,
    /// Size weighted cost of the two children, lower is better.
    pub split_score: f64,
    pub left_index: Vec<usize>,
    pub right_index: Vec<usize>,
}

/// Split search over the rows of a node.
pub trait Splitter {
    /// Per row target type, class ids or real targets.
    type Target: Copy;

    /// Side a value equal to the threshold goes to.
    fn split_rule(&self) -> SplitRule;

    /// Thresholds to try for a feature, in evaluation order.
    fn candidate_thresholds(&self, data: &Matrix<f64>, index: &[usize], feature: usize) -> Vec<f64>;

    /// Cost of a non-empty set of rows.
    fn node_cost(&self, y: &[Self::Target], index: &[usize]) -> f64;

    /// Partition the rows on a feature and threshold, keeping row order.
    fn partition(&self, data: &Matrix<f64>, index: &[usize], feature: usize, threshold: f64) -> (Vec<usize>, Vec<usize>) {
        let rule = self.split_rule();
        index
            .iter()
            .partition(|&&i| rule.goes_left(*data.get(i, feature), threshold))
    }

    /// Find the feature and threshold minimizing
    /// `(|L| * cost(L) + |R| * cost(R)) / n`.
    ///
    /// Candidates leaving either side empty are skipped. The first candidate
    /// reaching the minimum wins, so earlier features and earlier thresholds
    /// take precedence. Returns `None` when every candidate was skipped.
    fn best_split(&self, data: &Matrix<f64>, y: &[Self::Target], index: &[usize]) -> Option<SplitInfo> {
        let n_total = index.len() as f64;
        let mut best: Option<SplitInfo> = None;
        for feature in 0..data.cols {
            for threshold in self.candidate_thresholds(data, index, feature) {
                let (left_index, right_index) = self.partition(data, index, feature, threshold);
                if left_index.is_empty() || right_index.is_empty() {
                    continue;
                }
                let split_score = (left_index.len() as f64 * self.node_cost(y, &left_index)
                    + right_index.len() as f64 * self.node_cost(y, &right_index))
                    / n_total;
                if best.as_ref().map_or(true, |b| split_score < b.split_score) {
                    best = Some(SplitInfo {
                        split_feature: feature,
                        split_value: threshold,
                        split_score,
                        left_index,
                        right_index,
                    });
                }
            }
        }
        best
    }
}

/// Classification splitter.
///
/// Tries each distinct value of a feature in ascending order, sends values
/// `<=` the threshold left and scores children with Gini impurity.
#[derive(Clone, Copy, Debug, Default)]
pub struct GiniSplitter;

impl Splitter for GiniSplitter {
    type Target = usize;

    fn split_rule(&self) -> SplitRule {
        SplitRule::LessOrEqual
    }

    fn candidate_thresholds(&self, data: &Matrix<f64>, index: &[usize], feature: usize) -> Vec<f64> {
        let mut values: Vec<f64> = index.iter().map(|&i| *data.get(i, feature)).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        values
    }

    fn node_cost(&self, y: &[usize], index: &[usize]) -> f64 {
        let labels: Vec<usize> = index.iter().map(|&i| y[i]).collect();
        gini_impurity(&labels)
    }
}

/// Regression splitter.
///
/// Tries every row's raw value of a feature in row order, duplicates
/// included, sends values `<` the threshold left and scores children with
/// their summed squared error.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredErrorSplitter;

impl Splitter for SquaredErrorSplitter {
    type Target = f64;

    fn split_rule(&self) -> SplitRule {
        SplitRule::Less
    }

    fn candidate_thresholds(&self, data: &Matrix<f64>, index: &[usize], feature: usize) -> Vec<f64> {
        index.iter().map(|&i| *data.get(i, feature)).collect()
    }

    fn node_cost(&self, y: &[f64], index: &[usize]) -> f64 {
        let targets: Vec<f64> = index.iter().map(|&i| y[i]).collect();
        sum_squared_error(&targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_split_rule() {
        assert!(SplitRule::LessOrEqual.goes_left(1.0, 1.0));
        assert!(!SplitRule::Less.goes_left(1.0, 1.0));
        assert!(SplitRule::Less.goes_left(0.5, 1.0));
        assert!(!SplitRule::LessOrEqual.goes_left(1.5, 1.0));
    }

    #[test]
    fn test_gini_best_split() {
        let data_vec = vec![0., 1., 2., 3.];
        let data = Matrix::new(&data_vec, 4, 1);
        let y = vec![0, 0, 1, 1];
        let split = GiniSplitter.best_split(&data, &y, &data.index).unwrap();
        assert_eq!(split.split_feature, 0);
        assert_eq!(split.split_value, 1.0);
        assert_eq!(split.split_score, 0.0);
        assert_eq!(split.left_index, vec![0, 1]);
        assert_eq!(split.right_index, vec![2, 3]);
    }

    #[test]
    fn test_gini_thresholds_distinct_sorted() {
        let data_vec = vec![3., 1., 3., 2., 1.];
        let data = Matrix::new(&data_vec, 5, 1);
        let t = GiniSplitter.candidate_thresholds(&data, &data.index, 0);
        assert_eq!(t, vec![1., 2., 3.]);
    }

    #[test]
    fn test_squared_error_thresholds_raw_order() {
        let data_vec = vec![3., 1., 3., 2., 1.];
        let data = Matrix::new(&data_vec, 5, 1);
        let t = SquaredErrorSplitter.candidate_thresholds(&data, &[4, 0, 2], 0);
        assert_eq!(t, vec![1., 3., 3.]);
    }

    #[test]
    fn test_squared_error_best_split() {
        let data_vec = vec![1., 2., 3., 4.];
        let data = Matrix::new(&data_vec, 4, 1);
        let y = vec![1., 2., 3., 4.];
        let split = SquaredErrorSplitter.best_split(&data, &y, &data.index).unwrap();
        // Threshold 3 with `<` gives {1, 2} | {3, 4}.
        assert_eq!(split.split_value, 3.0);
        assert_eq!(split.split_score, 0.5);
        assert_eq!(split.left_index, vec![0, 1]);
        assert_eq!(split.right_index, vec![2, 3]);
    }

    #[test]
    fn test_boundary_value_side() {
        // Both searches split between 1 and 2, but describe it with different thresholds.
        let data_vec = vec![1., 1., 2., 2.];
        let data = Matrix::new(&data_vec, 4, 1);
        let cls = GiniSplitter.best_split(&data, &[0, 0, 1, 1], &data.index).unwrap();
        assert_eq!(cls.split_value, 1.0);
        let reg = SquaredErrorSplitter
            .best_split(&data, &[0., 0., 5., 5.], &data.index)
            .unwrap();
        assert_eq!(reg.split_value, 2.0);
        assert_eq!(cls.left_index, reg.left_index);
    }

    #[test]
    fn test_first_feature_wins_ties() {
        // Both columns separate the classes perfectly.
        let data_vec = vec![0., 0., 1., 1., 5., 5., 9., 9.];
        let data = Matrix::new(&data_vec, 4, 2);
        let split = GiniSplitter.best_split(&data, &[0, 0, 1, 1], &data.index).unwrap();
        assert_eq!(split.split_feature, 0);
        assert_eq!(split.split_value, 0.0);
    }

    #[test]
    fn test_no_split_for_constant_features() {
        let data_vec = vec![2., 2., 2., 7., 7., 7.];
        let data = Matrix::new(&data_vec, 3, 2);
        assert!(GiniSplitter.best_split(&data, &[0, 1, 0], &data.index).is_none());
        assert!(SquaredErrorSplitter
            .best_split(&data, &[0., 1., 2.], &data.index)
            .is_none());
        assert!(GiniSplitter.best_split(&data, &[0, 1, 0], &[1]).is_none());
    }

    #[test]
    fn test_split_never_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = 30;
        let cols = 3;
        let data_vec: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(0..5) as f64).collect();
        let data = Matrix::new(&data_vec, rows, cols);
        let y_cls: Vec<usize> = (0..rows).map(|_| rng.gen_range(0..3)).collect();
        let y_reg: Vec<f64> = (0..rows).map(|_| rng.gen_range(-1.0..1.0)).collect();
        for _ in 0..50 {
            let n = rng.gen_range(1..rows);
            let index: Vec<usize> = (0..n).map(|_| rng.gen_range(0..rows)).collect();
            if let Some(s) = GiniSplitter.best_split(&data, &y_cls, &index) {
                assert!(!s.left_index.is_empty() && !s.right_index.is_empty());
                assert_eq!(s.left_index.len() + s.right_index.len(), index.len());
            }
            if let Some(s) = SquaredErrorSplitter.best_split(&data, &y_reg, &index) {
                assert!(!s.left_index.is_empty() && !s.right_index.is_empty());
                assert_eq!(s.left_index.len() + s.right_index.len(), index.len());
            }
        }
    }
}
