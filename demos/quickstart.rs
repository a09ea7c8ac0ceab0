//! Quickstart
//! ==========
//! Fit a random forest on two interleaved classes and a regression tree on
//! a noisy sine, both from plain feature rows.
//!
//! ```bash
//! cargo run --release --example quickstart
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sapling::data::rows_to_column_major;
use sapling::{DecisionTreeRegressor, Matrix, RandomForestClassifier};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(0);

    // ------------------------------------------------------------------
    // 1. Classification: label is 1 inside the unit circle
    // ------------------------------------------------------------------
    let rows: Vec<Vec<f64>> = (0..400)
        .map(|_| vec![rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)])
        .collect();
    let labels: Vec<usize> = rows
        .iter()
        .map(|r| usize::from(r[0] * r[0] + r[1] * r[1] < 1.0))
        .collect();
    let (train_rows, test_rows) = rows.split_at(300);
    let (train_labels, test_labels) = labels.split_at(300);

    let (train_vec, n_rows, n_cols) = rows_to_column_major(train_rows)?;
    let train = Matrix::new(&train_vec, n_rows, n_cols);
    let mut forest = RandomForestClassifier::new(25, Some(6), 42)?;
    forest.fit(&train, train_labels)?;

    let (test_vec, n_rows, n_cols) = rows_to_column_major(test_rows)?;
    let test = Matrix::new(&test_vec, n_rows, n_cols);
    let preds = forest.predict(&test, true)?;
    let correct = preds.iter().zip(test_labels).filter(|(p, t)| p == t).count();
    println!("Forest accuracy: {:.3}", correct as f64 / test_labels.len() as f64);

    // ------------------------------------------------------------------
    // 2. Regression: noisy sine on [0, 2pi)
    // ------------------------------------------------------------------
    let x: Vec<f64> = (0..300).map(|_| rng.gen_range(0.0..std::f64::consts::TAU)).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() + rng.gen_range(-0.1..0.1)).collect();
    let data = Matrix::new(&x, x.len(), 1);
    let mut regressor = DecisionTreeRegressor::new(Some(5), 10);
    regressor.fit(&data, &y)?;
    let fitted = regressor.predict(&data, false)?;
    let mse = fitted.iter().zip(&y).map(|(p, t)| (p - t) * (p - t)).sum::<f64>() / y.len() as f64;
    println!("Regression tree training MSE: {:.4}", mse);
    if let Some(tree) = &regressor.tree {
        println!("depth {}, leaves {}", tree.depth, tree.n_leaves);
    }

    Ok(())
}
