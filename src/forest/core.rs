use crate::config::ForestConfig;
use crate::constants::MAX_CLASSES;
use crate::data::Matrix;
use crate::errors::SaplingError;
use crate::sampler::{BootstrapSampler, Sampler};
use crate::tree::Tree;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Random forest classifier.
///
/// An ordered collection of classification trees, each grown on its own
/// bootstrap sample of the training rows, combined by majority vote.
#[derive(Clone, Debug, Default)]
pub struct RandomForestClassifier {
    pub cfg: ForestConfig,
    pub trees: Vec<Tree<usize>>,
    /// Number of features seen during fit.
    pub n_features: usize,
    /// One more than the largest class id seen during fit.
    pub n_classes: usize,
}

impl RandomForestClassifier {
    /// Random forest classifier
    ///
    /// * `n_estimators` - Number of trees to grow.
    /// * `max_depth` - Depth limit of every tree, `None` grows until leaves are pure.
    /// * `seed` - Integer value used to seed the bootstrap sampling.
    pub fn new(n_estimators: usize, max_depth: Option<usize>, seed: u64) -> Result<Self, SaplingError> {
        Self::from_config(ForestConfig {
            n_estimators,
            max_depth,
            seed,
            ..Default::default()
        })
    }

    /// Create an unfitted forest from a configuration.
    pub fn from_config(cfg: ForestConfig) -> Result<Self, SaplingError> {
        cfg.validate()?;
        Ok(RandomForestClassifier {
            cfg,
            ..Default::default()
        })
    }

    /// Fit the forest, replacing any trees from an earlier fit.
    ///
    /// Tree `i` is grown on a bootstrap sample drawn with a generator seeded
    /// from `seed + i`, so the forest only depends on the data and the
    /// configuration.
    ///
    /// * `data` - Feature matrix, one row per sample.
    /// * `y` - Class id of every row, classes are `0..n_classes`.
    pub fn fit(&mut self, data: &Matrix<f64>, y: &[usize]) -> Result<(), SaplingError> {
        self.cfg.validate()?;
        data.validate()?;
        if y.len() != data.rows {
            return Err(SaplingError::ShapeMismatch(data.rows, y.len()));
        }
        let max_label = y.iter().copied().max().unwrap_or(0);
        if max_label >= MAX_CLASSES {
            return Err(SaplingError::InvalidParameter(
                "y".to_string(),
                format!("class ids below {}", MAX_CLASSES),
                max_label.to_string(),
            ));
        }
        let n_classes = max_label + 1;

        let start = Instant::now();
        let mut sampler = BootstrapSampler;
        let mut trees = Vec::with_capacity(self.cfg.n_estimators);
        for i in 0..self.cfg.n_estimators {
            let mut rng = StdRng::seed_from_u64(self.cfg.seed.wrapping_add(i as u64));
            let (chosen, _) = sampler.sample(&mut rng, &data.index);
            let tree = Tree::fit_classification(data, y, &chosen, self.cfg.max_depth);

            if self.cfg.log_iterations > 0 && i % self.cfg.log_iterations == 0 {
                info!("tree {}, tree.depth: {}, tree.n_leaves: {}", i, tree.depth, tree.n_leaves);
            }
            trees.push(tree);
        }

        self.trees = trees;
        self.n_features = data.cols;
        self.n_classes = n_classes;

        if self.cfg.log_iterations > 0 {
            info!(
                "Finished training a forest with {0} trees in {1} seconds.",
                self.trees.len(),
                start.elapsed().as_secs()
            );
        }
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// One noisy blob per class along the first feature.
    fn blobs(rng: &mut StdRng, rows: usize) -> (Vec<f64>, Vec<usize>) {
        let y: Vec<usize> = (0..rows).map(|i| i % 3).collect();
        let x0: Vec<f64> = y.iter().map(|&c| c as f64 * 4.0 + rng.gen_range(-1.5..1.5)).collect();
        let x1: Vec<f64> = (0..rows).map(|_| rng.gen_range(0.0..1.0)).collect();
        (x0.into_iter().chain(x1).collect(), y)
    }

    #[test]
    fn test_forest_fit() {
        let mut rng = StdRng::seed_from_u64(0);
        let (data_vec, y) = blobs(&mut rng, 150);
        let data = Matrix::new(&data_vec, 150, 2);
        let mut forest = RandomForestClassifier::new(10, Some(4), 42).unwrap();
        assert!(!forest.is_fitted());
        forest.fit(&data, &y).unwrap();
        assert!(forest.is_fitted());
        assert_eq!(forest.trees.len(), 10);
        assert_eq!(forest.n_features, 2);
        assert_eq!(forest.n_classes, 3);
        assert!(forest.trees.iter().all(|t| t.depth <= 4));
    }

    #[test]
    fn test_forest_fit_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(1);
        let (data_vec, y) = blobs(&mut rng, 90);
        let data = Matrix::new(&data_vec, 90, 2);
        let mut a = RandomForestClassifier::new(5, None, 7).unwrap();
        let mut b = RandomForestClassifier::new(5, None, 7).unwrap();
        a.fit(&data, &y).unwrap();
        b.fit(&data, &y).unwrap();
        assert_eq!(a.trees, b.trees);
    }

    #[test]
    fn test_forest_trees_differ() {
        let mut rng = StdRng::seed_from_u64(2);
        let (data_vec, y) = blobs(&mut rng, 90);
        let data = Matrix::new(&data_vec, 90, 2);
        let mut forest = RandomForestClassifier::new(2, None, 0).unwrap();
        forest.fit(&data, &y).unwrap();
        assert_ne!(forest.trees[0], forest.trees[1]);
    }

    #[test]
    fn test_forest_fit_errors() {
        assert!(matches!(
            RandomForestClassifier::new(0, None, 0),
            Err(SaplingError::InvalidParameter(..))
        ));
        let mut forest = RandomForestClassifier::new(3, None, 0).unwrap();
        let data_vec = vec![1., 2., 3.];
        let data = Matrix::new(&data_vec, 3, 1);
        assert_eq!(forest.fit(&data, &[0, 1]), Err(SaplingError::ShapeMismatch(3, 2)));
        let empty: Vec<f64> = Vec::new();
        let data = Matrix::new(&empty, 0, 1);
        assert_eq!(forest.fit(&data, &[]), Err(SaplingError::EmptyDataset));
        let nan_vec = vec![1., f64::NAN];
        let data = Matrix::new(&nan_vec, 2, 1);
        assert_eq!(forest.fit(&data, &[0, 1]), Err(SaplingError::NANValueFound(1, 0)));
        assert!(!forest.is_fitted());
    }

    #[test]
    fn test_forest_fit_label_range() {
        let data_vec = vec![0., 1.];
        let data = Matrix::new(&data_vec, 2, 1);
        let mut forest = RandomForestClassifier::new(3, None, 0).unwrap();
        assert!(matches!(
            forest.fit(&data, &[0, usize::MAX]),
            Err(SaplingError::InvalidParameter(..))
        ));
        assert!(matches!(
            forest.fit(&data, &[0, MAX_CLASSES]),
            Err(SaplingError::InvalidParameter(..))
        ));
        assert!(!forest.is_fitted());

        forest.fit(&data, &[0, MAX_CLASSES - 1]).unwrap();
        assert_eq!(forest.n_classes, MAX_CLASSES);
    }
}
