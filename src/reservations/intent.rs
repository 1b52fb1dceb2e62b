//! Mutations for the reservations slice.
//!
//! Each remote operation contributes a `*Pending` message when issued and a
//! `*Fulfilled` or `*Rejected` message when it resolves.

use crate::slice::Mutation;

use super::history::SortKey;
use super::model::{Booking, BookingId, Table};

#[derive(Debug, Clone)]
pub enum ReservationMutation {
    FetchTablesPending,
    FetchTablesFulfilled(Vec<Table>),
    FetchTablesRejected(String),

    CreatePending,
    /// Commit a confirmed booking, unless its table was taken meanwhile.
    CreateFulfilled(Booking),
    CreateRejected(String),

    CancelPending,
    CancelFulfilled(BookingId),
    CancelRejected(String),

    RemovePending,
    RemoveFulfilled(BookingId),
    RemoveRejected(String),

    ClearBookingSuccess,
    ClearError,
    SetHistorySearch(String),
    SetHistorySort(SortKey),
}

impl Mutation for ReservationMutation {}
