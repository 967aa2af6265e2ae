//! Domain traits - Abstractions for infrastructure implementations

pub mod api;

pub use api::SparkApi;
