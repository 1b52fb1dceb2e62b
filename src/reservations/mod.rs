//! Reservations slice: restaurant tables, bookings, and the simulated
//! booking service that feeds results back into the store.

mod api;
mod data;
mod handler;
mod history;
mod intent;
mod model;
mod reducer;
mod state;
mod validation;

pub use api::{ReservationApi, ReservationError, SimulatedReservationApi};
pub use data::reference_tables;
pub use handler::ReservationHandler;
pub use history::{user_bookings, HistoryQuery, ParseSortKeyError, SortKey};
pub use intent::ReservationMutation;
pub use model::{
    Booking, BookingId, BookingRequest, BookingStatus, EventType, ParseEventTypeError, Table,
    TableId,
};
pub use reducer::ReservationReducer;
pub use state::ReservationState;
pub use validation::{BookingField, BookingForm, ValidationErrors, MAX_GUESTS};
