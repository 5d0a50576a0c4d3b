mod cache;
mod database;
mod errors;
mod logging;
mod root;
mod server;
mod soa;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use soa::SoaConfig;
