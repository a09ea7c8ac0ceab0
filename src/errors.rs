//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use thiserror::Error;

/// Errors that can occur while fitting or predicting with a tree model.
#[derive(Debug, Error, PartialEq)]
pub enum SaplingError {
    /// Fit was called without any rows.
    #[error("Unable to fit a model on an empty dataset.")]
    EmptyDataset,
    /// First value is the expected length, second is what was passed.
    #[error("Shape mismatch, expected length {0} but {1} provided.")]
    ShapeMismatch(usize, usize),
    /// A feature row had a different length than the first row.
    #[error("Row {0} has {2} features, expected {1}.")]
    RaggedRows(usize, usize, usize),
    /// A sample does not have the feature a split refers to.
    #[error("Feature index {0} is out of range for a sample with {1} features.")]
    FeatureOutOfRange(usize, usize),
    /// NaN value found in the data, missing values are not supported.
    #[error("A NaN value was found at row {0}, column {1}; missing values are not supported.")]
    NANValueFound(usize, usize),
    /// Predict was called before fit.
    #[error("The model has not been fitted yet, call fit before predict.")]
    NotFitted,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Configuration could not be read.
    #[error("Unable to parse configuration: {0}")]
    UnableToParseConfig(String),
}
