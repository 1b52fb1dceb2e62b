//! Pizzeria storefront state engine.
//!
//! A single [`store::Store`] holds four slices (catalog, favorites, identity,
//! reservations). Views read projections and dispatch mutations; the identity
//! and reservation handlers run simulated remote calls on tokio tasks and feed
//! their outcome back as further mutations. Users, the current session and
//! bookings are mirrored to key/value storage by [`persist::SnapshotAdapter`].

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod favorites;
pub mod identity;
pub mod ids;
pub mod logging;
pub mod nav;
pub mod persist;
pub mod reservations;
pub mod slice;
pub mod store;

pub use app::{Pizzeria, StartupError};
pub use store::{Action, AppState, Store};
