/// Environment variable helpers
pub mod config;
/// Request correlation ids
pub mod id;
/// Logging setup
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;
