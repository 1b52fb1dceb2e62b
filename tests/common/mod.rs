//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use pizzeria::config::{BookingConfig, Config, IdentityConfig, LatencyConfig};
use pizzeria::identity::{LoginRequest, RegisterRequest, SessionUser};
use pizzeria::persist::{KeyValueStorage, MemoryStorage};
use pizzeria::reservations::{BookingForm, BookingRequest, EventType, TableId};
use pizzeria::Pizzeria;
use tempfile::TempDir;

/// Config with no latency, no simulated conflicts and a cheap hash.
pub fn test_config() -> Config {
    Config {
        latency: LatencyConfig::instant(),
        booking: BookingConfig {
            conflict_rate: 0.0,
            ..BookingConfig::default()
        },
        identity: IdentityConfig {
            hash_memory_kib: 1024,
            hash_iterations: 1,
        },
        ..Config::default()
    }
}

pub fn app() -> Pizzeria {
    app_with_storage(Arc::new(MemoryStorage::new()))
}

pub fn app_with_storage(storage: Arc<dyn KeyValueStorage>) -> Pizzeria {
    Pizzeria::with_storage(test_config(), storage).expect("test config is valid")
}

pub fn register_request(name: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Register and return the signed-in session user.
pub async fn signed_in(app: &Pizzeria, name: &str, email: &str) -> SessionUser {
    app.identity()
        .register(register_request(name, email, "secret1"))
        .await
        .expect("register task");
    app.store()
        .select(|s| s.identity.current_user().cloned())
        .expect("registration signs in")
}

pub fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + ChronoDuration::days(1)
}

pub fn booking_request(user: &SessionUser, table_id: TableId, guests: u32) -> BookingRequest {
    BookingRequest {
        user_id: user.id,
        user_name: user.name.clone(),
        table_id,
        table_name: format!("Table #{}", table_id),
        date: tomorrow(),
        time: chrono::NaiveTime::from_hms_opt(19, 0, 0).expect("valid time"),
        guests,
        event_type: EventType::RegularVisit,
        name: user.name.clone(),
        phone: "+7 900 123 45 67".to_string(),
        email: user.email.clone(),
        comment: None,
    }
}

pub fn booking_form(table_id: TableId, guests: u32) -> BookingForm {
    BookingForm {
        table_id: Some(table_id),
        date: tomorrow().format("%Y-%m-%d").to_string(),
        time: "19:00".to_string(),
        guests,
        name: "Anna".to_string(),
        phone: "+7 900 123 45 67".to_string(),
        email: "anna@example.com".to_string(),
        event_type: EventType::Birthday,
        comment: String::new(),
    }
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
