// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod forest;
pub mod node;
pub mod objective;
pub mod regressor;
pub mod sampler;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use config::{ConfigIO, ForestConfig, RegressorConfig};
pub use data::Matrix;
pub use errors::SaplingError;
pub use forest::RandomForestClassifier;
pub use regressor::DecisionTreeRegressor;
