use super::core::DecisionTreeRegressor;
use crate::data::Matrix;
use crate::errors::SaplingError;
use crate::tree::Tree;

impl DecisionTreeRegressor {
    fn fitted_tree(&self) -> Result<&Tree<f64>, SaplingError> {
        self.tree.as_ref().ok_or(SaplingError::NotFitted)
    }

    /// Predict a single sample.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, SaplingError> {
        self.fitted_tree()?.predict_row(row)
    }

    /// Generate predictions for the given data, parallel to its rows.
    ///
    /// * `data` - The feature matrix.
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<f64>, SaplingError> {
        let tree = self.fitted_tree()?;
        if data.cols != tree.n_features {
            return Err(SaplingError::ShapeMismatch(tree.n_features, data.cols));
        }
        tree.predict(data, parallel)
    }
}
