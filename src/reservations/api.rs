//! Remote booking service seam.
//!
//! The slice only ever talks to a [`ReservationApi`]. The built-in
//! implementation simulates a network service with fixed latency; a real
//! backend can replace it without touching the slice.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

use crate::config::{BookingConfig, LatencyConfig};

use super::data::reference_tables;
use super::model::{Booking, BookingId, BookingRequest, Table};

/// Rejections a booking service may report. The display text is what the
/// slice stores as its error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Sorry, this table is already booked")]
    TableAlreadyBooked,

    #[error("Failed to load tables")]
    TablesUnavailable,

    #[error("Failed to cancel booking")]
    CancelFailed,

    #[error("Failed to remove booking")]
    RemoveFailed,
}

#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Current floor plan.
    async fn list_tables(&self) -> Result<Vec<Table>, ReservationError>;

    /// Ask the service to hold a table; returns the confirmed booking.
    async fn create_booking(&self, request: BookingRequest) -> Result<Booking, ReservationError>;

    /// Ask the service to cancel; returns the id to mark as cancelled.
    async fn cancel_booking(&self, id: BookingId) -> Result<BookingId, ReservationError>;

    /// Ask the service to forget a booking; returns the id to delete.
    async fn remove_booking(&self, id: BookingId) -> Result<BookingId, ReservationError>;
}

/// In-process stand-in for the booking service.
///
/// Every call sleeps for its configured latency. Creation fails with
/// probability `conflict_rate`, modelling another guest grabbing the table.
pub struct SimulatedReservationApi {
    latency: LatencyConfig,
    conflict_rate: f64,
    tables: Vec<Table>,
}

impl SimulatedReservationApi {
    pub fn new(latency: LatencyConfig, booking: &BookingConfig) -> Self {
        Self {
            latency,
            conflict_rate: booking.conflict_rate.clamp(0.0, 1.0),
            tables: reference_tables(),
        }
    }

    /// Replace the floor plan served by `list_tables`.
    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }

    async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn conflicts(&self) -> bool {
        self.conflict_rate > 0.0 && rand::thread_rng().gen_bool(self.conflict_rate)
    }
}

#[async_trait]
impl ReservationApi for SimulatedReservationApi {
    async fn list_tables(&self) -> Result<Vec<Table>, ReservationError> {
        Self::wait(self.latency.fetch_tables()).await;
        Ok(self.tables.clone())
    }

    async fn create_booking(&self, request: BookingRequest) -> Result<Booking, ReservationError> {
        Self::wait(self.latency.create_booking()).await;
        if self.conflicts() {
            tracing::debug!(table_id = request.table_id, "Simulated booking conflict");
            return Err(ReservationError::TableAlreadyBooked);
        }
        Ok(Booking::confirm(request))
    }

    async fn cancel_booking(&self, id: BookingId) -> Result<BookingId, ReservationError> {
        Self::wait(self.latency.cancel_booking()).await;
        Ok(id)
    }

    async fn remove_booking(&self, id: BookingId) -> Result<BookingId, ReservationError> {
        Self::wait(self.latency.remove_booking()).await;
        Ok(id)
    }
}
