mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BookingConfig, Config, IdentityConfig, LatencyConfig, StorageConfig};
