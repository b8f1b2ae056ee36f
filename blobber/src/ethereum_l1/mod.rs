pub mod config;
pub mod execution_layer;
pub mod transaction;
