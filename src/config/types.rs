use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::identity::{PasswordError, SecretHasher};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Where snapshots are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per snapshot key.
    /// Defaults to `<data dir>/pizzeria`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pizzeria")
        })
    }
}

/// Artificial latency of the simulated remote calls, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,
    #[serde(default = "default_fetch_tables_ms")]
    pub fetch_tables_ms: u64,
    #[serde(default = "default_create_booking_ms")]
    pub create_booking_ms: u64,
    #[serde(default = "default_cancel_booking_ms")]
    pub cancel_booking_ms: u64,
    #[serde(default = "default_remove_booking_ms")]
    pub remove_booking_ms: u64,
    #[serde(default = "default_menu_loading_ms")]
    pub menu_loading_ms: u64,
}

/// Booking service behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Probability that the simulated service reports the table as taken.
    #[serde(default = "default_conflict_rate")]
    pub conflict_rate: f64,
    /// Largest party accepted online.
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
}

/// Cost of the Argon2 hash protecting stored secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_hash_memory_kib")]
    pub hash_memory_kib: u32,
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
}

fn default_auth_ms() -> u64 {
    1500
}

fn default_fetch_tables_ms() -> u64 {
    1000
}

fn default_create_booking_ms() -> u64 {
    1500
}

fn default_cancel_booking_ms() -> u64 {
    1000
}

fn default_remove_booking_ms() -> u64 {
    800
}

fn default_menu_loading_ms() -> u64 {
    1000
}

fn default_conflict_rate() -> f64 {
    0.1
}

fn default_max_guests() -> u32 {
    crate::reservations::MAX_GUESTS
}

fn default_hash_memory_kib() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth_ms: default_auth_ms(),
            fetch_tables_ms: default_fetch_tables_ms(),
            create_booking_ms: default_create_booking_ms(),
            cancel_booking_ms: default_cancel_booking_ms(),
            remove_booking_ms: default_remove_booking_ms(),
            menu_loading_ms: default_menu_loading_ms(),
        }
    }
}

impl LatencyConfig {
    /// No artificial delay anywhere.
    pub fn instant() -> Self {
        Self {
            auth_ms: 0,
            fetch_tables_ms: 0,
            create_booking_ms: 0,
            cancel_booking_ms: 0,
            remove_booking_ms: 0,
            menu_loading_ms: 0,
        }
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn fetch_tables(&self) -> Duration {
        Duration::from_millis(self.fetch_tables_ms)
    }

    pub fn create_booking(&self) -> Duration {
        Duration::from_millis(self.create_booking_ms)
    }

    pub fn cancel_booking(&self) -> Duration {
        Duration::from_millis(self.cancel_booking_ms)
    }

    pub fn remove_booking(&self) -> Duration {
        Duration::from_millis(self.remove_booking_ms)
    }

    pub fn menu_loading(&self) -> Duration {
        Duration::from_millis(self.menu_loading_ms)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            conflict_rate: default_conflict_rate(),
            max_guests: default_max_guests(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: default_hash_memory_kib(),
            hash_iterations: default_hash_iterations(),
        }
    }
}

impl IdentityConfig {
    pub fn hasher(&self) -> Result<SecretHasher, PasswordError> {
        SecretHasher::with_cost(self.hash_memory_kib, self.hash_iterations)
    }
}
