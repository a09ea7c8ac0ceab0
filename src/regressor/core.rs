use crate::config::RegressorConfig;
use crate::data::Matrix;
use crate::errors::SaplingError;
use crate::tree::Tree;
use log::info;

/// Single regression tree.
///
/// Leaves predict the mean target of the training rows that reached them.
#[derive(Clone, Debug, Default)]
pub struct DecisionTreeRegressor {
    pub cfg: RegressorConfig,
    pub tree: Option<Tree<f64>>,
}

impl DecisionTreeRegressor {
    /// Regression tree
    ///
    /// * `max_depth` - Depth limit, the root counts as depth 1. `None` disables it.
    /// * `min_samples_split` - Children with this many rows or fewer become leaves.
    pub fn new(max_depth: Option<usize>, min_samples_split: usize) -> Self {
        Self::from_config(RegressorConfig {
            max_depth,
            min_samples_split,
            ..Default::default()
        })
    }

    /// Create an unfitted regressor from a configuration.
    pub fn from_config(cfg: RegressorConfig) -> Self {
        DecisionTreeRegressor { cfg, tree: None }
    }

    /// Fit the tree, replacing the tree of an earlier fit.
    ///
    /// * `data` - Feature matrix, one row per sample.
    /// * `y` - Target of every row.
    pub fn fit(&mut self, data: &Matrix<f64>, y: &[f64]) -> Result<(), SaplingError> {
        data.validate()?;
        if y.len() != data.rows {
            return Err(SaplingError::ShapeMismatch(data.rows, y.len()));
        }
        // Targets are reported as the column after the last feature.
        if let Some(row) = y.iter().position(|v| v.is_nan()) {
            return Err(SaplingError::NANValueFound(row, data.cols));
        }

        let tree = Tree::fit_regression(
            data,
            y,
            &data.index,
            self.cfg.max_depth,
            self.cfg.min_samples_split,
        );
        if self.cfg.verbose {
            info!(
                "Finished training a regression tree, tree.depth: {}, tree.n_leaves: {}",
                tree.depth, tree.n_leaves
            );
        }
        self.tree = Some(tree);
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    // Set methods for parameters

    /// Set the depth limit of the tree.
    /// * `max_depth` - `None` disables the limit.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the size under which children stop splitting.
    /// * `min_samples_split` - Children with this many rows or fewer become leaves.
    pub fn set_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.cfg.min_samples_split = min_samples_split;
        self
    }

    /// Set whether to log a summary after fit.
    pub fn set_verbose(mut self, verbose: bool) -> Self {
        self.cfg.verbose = verbose;
        self
    }
}
