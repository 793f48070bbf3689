mod database;
mod errors;
mod forwarding;
mod logging;
mod root;
mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use forwarding::ForwardingConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
