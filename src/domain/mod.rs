//! Domain layer - Core types with no I/O
//!
//! This layer contains:
//! - Entities: commands, identifier kinds, Spark resources
//! - Traits: the Spark API seam implemented by infrastructure

pub mod entities;
pub mod traits;
