//! Sampler
//!
//! Strategies for sampling the rows each ensemble member is fitted on.
use crate::data::Matrix;
use rand::rngs::StdRng;
use rand::Rng;

// A sampler can be used to subset the data prior to fitting a new tree.
pub trait Sampler {
    /// Sample the data, returning a tuple, where the first item is the samples
    /// chosen for training, and the second are the samples excluded.
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>);
}

/// Sampling with replacement, as many draws as there are rows.
///
/// The chosen rows keep their draw order and will usually contain
/// duplicates. The excluded rows are the out-of-bag rows that were never
/// drawn, in index order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BootstrapSampler;

impl Sampler for BootstrapSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let n = index.len();
        let mut drawn = vec![false; n];
        let mut chosen = Vec::with_capacity(n);
        for _ in 0..n {
            let pos = rng.gen_range(0..n);
            drawn[pos] = true;
            chosen.push(index[pos]);
        }
        let excluded = index
            .iter()
            .zip(drawn)
            .filter_map(|(i, d)| if d { None } else { Some(*i) })
            .collect();
        (chosen, excluded)
    }
}

/// Draw a bootstrap sample of the rows and their labels.
///
/// Returns the sampled features as a column major buffer with `data.rows`
/// rows and `data.cols` columns, and the labels parallel to it.
pub fn bootstrap_sample<T: Copy>(rng: &mut StdRng, data: &Matrix<f64>, y: &[T]) -> (Vec<f64>, Vec<T>) {
    let (chosen, _) = BootstrapSampler.sample(rng, &data.index);
    let mut sampled = Vec::with_capacity(chosen.len() * data.cols);
    for col in 0..data.cols {
        sampled.extend(chosen.iter().map(|&i| *data.get(i, col)));
    }
    let labels = chosen.iter().map(|&i| y[i]).collect();
    (sampled, labels)
}
