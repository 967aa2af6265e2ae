//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: token sources and the optional config file
//! - Adapters: Spark REST client

pub mod config;
pub mod adapters;
