pub mod config;
pub mod logging;

pub mod error;
pub mod manifest;
pub mod registry;
pub mod resolver;
