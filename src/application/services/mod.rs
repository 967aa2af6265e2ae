//! Application services

pub mod command_service;
pub mod resolver;

pub use command_service::CommandService;
pub use resolver::resolve;

#[cfg(test)]
mod tests;
