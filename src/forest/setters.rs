use crate::RandomForestClassifier;

impl RandomForestClassifier {
    // Set methods for parameters

    /// Set the number of trees of the forest.
    /// * `n_estimators` - Number of bootstrapped trees, must be positive at fit time.
    pub fn set_n_estimators(mut self, n_estimators: usize) -> Self {
        self.cfg.n_estimators = n_estimators;
        self
    }

    /// Set the depth limit of every tree.
    /// * `max_depth` - `None` grows until leaves are pure.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the seed of the bootstrap sampling.
    /// * `seed` - Integer value used to seed the random number generators.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set the logging frequency.
    /// * `log_iterations` - Log a line every N trees, zero disables logging.
    pub fn set_log_iterations(mut self, log_iterations: usize) -> Self {
        self.cfg.log_iterations = log_iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SaplingError;
    use crate::{Matrix, RandomForestClassifier};

    #[test]
    fn test_setters() {
        let forest = RandomForestClassifier::default()
            .set_n_estimators(4)
            .set_max_depth(Some(2))
            .set_seed(9)
            .set_log_iterations(1);
        assert_eq!(forest.cfg.n_estimators, 4);
        assert_eq!(forest.cfg.max_depth, Some(2));
        assert_eq!(forest.cfg.seed, 9);
        assert_eq!(forest.cfg.log_iterations, 1);
    }

    #[test]
    fn test_zero_estimators_rejected_at_fit() {
        let mut forest = RandomForestClassifier::default().set_n_estimators(0);
        let data_vec = vec![1., 2.];
        let data = Matrix::new(&data_vec, 2, 1);
        assert!(matches!(forest.fit(&data, &[0, 1]), Err(SaplingError::InvalidParameter(..))));
    }
}
