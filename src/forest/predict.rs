//! Prediction Methods
//!
//! Per-tree votes and majority vote aggregation for the random forest.
use super::core::RandomForestClassifier;
use crate::data::Matrix;
use crate::errors::SaplingError;
use crate::objective::majority_vote;
use rayon::prelude::*;

impl RandomForestClassifier {
    fn check_input(&self, data: &Matrix<f64>) -> Result<(), SaplingError> {
        if !self.is_fitted() {
            return Err(SaplingError::NotFitted);
        }
        if data.cols != self.n_features {
            return Err(SaplingError::ShapeMismatch(self.n_features, data.cols));
        }
        data.check_shape()
    }

    /// Vote count per class for a single sample, one vote per tree.
    pub fn predict_row_votes(&self, row: &[f64]) -> Result<Vec<usize>, SaplingError> {
        if !self.is_fitted() {
            return Err(SaplingError::NotFitted);
        }
        let mut votes = vec![0; self.n_classes];
        for tree in &self.trees {
            let class = tree.predict_row(row)?;
            if class >= votes.len() {
                votes.resize(class + 1, 0);
            }
            votes[class] += 1;
        }
        Ok(votes)
    }

    /// Predict a single sample, the most voted class with ties going to the lowest class id.
    pub fn predict_row(&self, row: &[f64]) -> Result<usize, SaplingError> {
        Ok(majority_vote(&self.predict_row_votes(row)?))
    }

    /// Vote counts for every row of the matrix.
    ///
    /// * `data` - The feature matrix.
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict_votes(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<Vec<usize>>, SaplingError> {
        self.check_input(data)?;
        if parallel {
            data.index
                .par_iter()
                .map(|i| self.predict_row_votes(&data.get_row(*i)))
                .collect()
        } else {
            data.index
                .iter()
                .map(|i| self.predict_row_votes(&data.get_row(*i)))
                .collect()
        }
    }

    /// Generate class predictions for the given data, parallel to its rows.
    ///
    /// * `data` - The feature matrix.
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<usize>, SaplingError> {
        Ok(self
            .predict_votes(data, parallel)?
            .iter()
            .map(|votes| majority_vote(votes))
            .collect())
    }
}
