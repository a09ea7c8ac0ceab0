// public modules
pub mod core;
pub mod predict;

// private modules
mod setters;

pub use self::core::RandomForestClassifier;
