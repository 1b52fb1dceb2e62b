//! State for the reservations slice.

use crate::slice::SliceState;

use super::history::HistoryQuery;
use super::model::{Booking, BookingId, Table, TableId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationState {
    pub tables: Vec<Table>,
    pub bookings: Vec<Booking>,
    /// Number of issued operations that have not resolved yet.
    pub in_flight: usize,
    /// Last domain rejection, kept until explicitly cleared.
    pub error: Option<String>,
    /// Set when a booking was committed; the view clears it after reacting.
    pub booking_success: bool,
    pub history: HistoryQuery,
}

impl SliceState for ReservationState {}

impl ReservationState {
    /// Initial state from the persisted booking list. Tables load later.
    pub fn restore(bookings: Vec<Booking>) -> Self {
        Self {
            bookings,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Whether any confirmed booking holds the table.
    pub fn is_table_held(&self, table_id: TableId) -> bool {
        self.bookings
            .iter()
            .any(|b| b.table_id == table_id && b.is_active())
    }

    /// Tables the booking form may offer for a party of `guests`.
    pub fn selectable_tables(&self, guests: u32) -> Vec<&Table> {
        self.tables
            .iter()
            .filter(|t| t.available && t.seats(guests))
            .collect()
    }

    /// Recompute one table's availability from the booking list.
    pub(super) fn refresh_table(&mut self, table_id: TableId) {
        let held = self.is_table_held(table_id);
        if let Some(table) = self.tables.iter_mut().find(|t| t.id == table_id) {
            table.available = !held;
        }
    }

    /// Recompute every table's availability from the booking list.
    pub(super) fn refresh_all_tables(&mut self) {
        let ids: Vec<TableId> = self.tables.iter().map(|t| t.id).collect();
        for id in ids {
            self.refresh_table(id);
        }
    }

    pub(super) fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    pub(super) fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
