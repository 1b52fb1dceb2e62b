//! Reducer for the reservations slice.

use crate::slice::Reducer;

use super::api::ReservationError;
use super::intent::ReservationMutation;
use super::model::BookingStatus;
use super::state::ReservationState;

pub struct ReservationReducer;

impl Reducer for ReservationReducer {
    type State = ReservationState;
    type Mutation = ReservationMutation;

    fn reduce(mut state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            ReservationMutation::FetchTablesPending => state.begin(),
            ReservationMutation::FetchTablesFulfilled(tables) => {
                state.settle();
                state.tables = tables;
                state.refresh_all_tables();
            }

            ReservationMutation::CreatePending => {
                state.begin();
                state.booking_success = false;
            }
            ReservationMutation::CreateFulfilled(booking) => {
                state.settle();
                // Optimistic check: the table may have been taken while the
                // request was in flight.
                let taken = state
                    .table(booking.table_id)
                    .is_some_and(|t| !t.available)
                    || state.is_table_held(booking.table_id);
                if taken {
                    tracing::info!(
                        table_id = booking.table_id,
                        "Booking rejected at commit: table already held"
                    );
                    state.error = Some(ReservationError::TableAlreadyBooked.to_string());
                    state.booking_success = false;
                } else {
                    tracing::info!(
                        booking_id = booking.id,
                        table_id = booking.table_id,
                        "Booking confirmed"
                    );
                    let table_id = booking.table_id;
                    state.bookings.push(booking);
                    state.refresh_table(table_id);
                    state.booking_success = true;
                }
            }
            ReservationMutation::CreateRejected(message) => {
                state.settle();
                state.error = Some(message);
                state.booking_success = false;
            }

            ReservationMutation::CancelPending | ReservationMutation::RemovePending => {
                state.begin()
            }
            ReservationMutation::CancelFulfilled(id) => {
                state.settle();
                match state.bookings.iter_mut().find(|b| b.id == id) {
                    Some(booking) => {
                        booking.status = BookingStatus::Cancelled;
                        let table_id = booking.table_id;
                        state.refresh_table(table_id);
                        tracing::info!(booking_id = id, "Booking cancelled");
                    }
                    None => tracing::warn!(booking_id = id, "Cancel for unknown booking ignored"),
                }
            }
            ReservationMutation::RemoveFulfilled(id) => {
                state.settle();
                match state.bookings.iter().position(|b| b.id == id) {
                    Some(index) => {
                        let booking = state.bookings.remove(index);
                        state.refresh_table(booking.table_id);
                        tracing::info!(booking_id = id, "Booking removed");
                    }
                    None => tracing::warn!(booking_id = id, "Remove for unknown booking ignored"),
                }
            }

            ReservationMutation::FetchTablesRejected(message)
            | ReservationMutation::CancelRejected(message)
            | ReservationMutation::RemoveRejected(message) => {
                state.settle();
                state.error = Some(message);
            }

            ReservationMutation::ClearBookingSuccess => state.booking_success = false,
            ReservationMutation::ClearError => state.error = None,
            ReservationMutation::SetHistorySearch(search) => state.history.search = search,
            ReservationMutation::SetHistorySort(sort) => state.history.sort = sort,
        }
        state
    }
}
