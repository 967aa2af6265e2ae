//! Application layer - Use cases
//! 
//! This layer contains:
//! - Parser: argv to Invocation
//! - Services: identifier resolution and command dispatch
//! - Output: record formatting
//! - Errors: usage, config and API errors

pub mod errors;
pub mod output;
pub mod parser;
pub mod services;
pub mod usage;
