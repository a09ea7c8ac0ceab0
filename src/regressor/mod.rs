// public modules
pub mod core;
pub mod predict;

pub use self::core::DecisionTreeRegressor;
