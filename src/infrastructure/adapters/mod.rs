//! Platform adapters

pub mod spark;

pub use spark::SparkClient;
