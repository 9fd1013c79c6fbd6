//! Configuration for the formdrop server
//!

pub mod server_config;

pub use crate::config::server_config::ServerConfig;
