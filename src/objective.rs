//! Objective
//!
//! Node cost functions used to score candidate splits, and the class
//! counting helpers behind majority leaves and majority votes.

/// Gini impurity of a set of class labels, `1 - sum(p_c^2)`.
///
/// The labels must be non-empty; an empty set has no class proportions and
/// is reported as pure.
pub fn gini_impurity(labels: &[usize]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let n = labels.len() as f64;
    let sum_sq: f64 = class_counts(labels)
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// Summed squared deviation of the targets from their mean.
///
/// Equal to `variance * n`. The targets must be non-empty.
pub fn sum_squared_error(targets: &[f64]) -> f64 {
    let m = mean(targets);
    targets.iter().map(|t| (t - m) * (t - m)).sum()
}

/// Arithmetic mean, `0.0` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Count table indexed by class id, sized to the largest label seen.
pub fn class_counts(labels: &[usize]) -> Vec<usize> {
    let size = labels.iter().max().map_or(0, |m| m + 1);
    let mut counts = vec![0; size];
    for &l in labels {
        counts[l] += 1;
    }
    counts
}

/// Number of different classes present in the labels.
pub fn n_distinct_classes(labels: &[usize]) -> usize {
    class_counts(labels).iter().filter(|&&c| c > 0).count()
}

/// Index of the largest count, the lowest index wins a tie.
pub fn majority_vote(counts: &[usize]) -> usize {
    let mut best = 0;
    let mut best_count = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > best_count {
            best = class;
            best_count = count;
        }
    }
    best
}

/// Most frequent class among the labels, ties go to the lowest class id.
pub fn majority_class(labels: &[usize]) -> usize {
    majority_vote(&class_counts(labels))
}
