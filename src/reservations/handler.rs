//! Bridges the booking service and the reservations slice.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::store::Store;

use super::api::ReservationApi;
use super::history::SortKey;
use super::intent::ReservationMutation;
use super::model::{BookingId, BookingRequest};

/// Issues service calls and feeds their outcome back as mutations.
///
/// The pending message is dispatched before the call returns, so the slice
/// reports loading immediately. The returned handle resolves once the
/// outcome has been committed.
#[derive(Clone)]
pub struct ReservationHandler {
    store: Store,
    api: Arc<dyn ReservationApi>,
}

impl ReservationHandler {
    pub fn new(store: Store, api: Arc<dyn ReservationApi>) -> Self {
        Self { store, api }
    }

    pub fn fetch_tables(&self) -> JoinHandle<()> {
        self.store.dispatch(ReservationMutation::FetchTablesPending);
        let (store, api) = (self.store.clone(), self.api.clone());
        tokio::spawn(async move {
            match api.list_tables().await {
                Ok(tables) => store.dispatch(ReservationMutation::FetchTablesFulfilled(tables)),
                Err(e) => store.dispatch(ReservationMutation::FetchTablesRejected(e.to_string())),
            }
        })
    }

    pub fn create_booking(&self, request: BookingRequest) -> JoinHandle<()> {
        self.store.dispatch(ReservationMutation::CreatePending);
        let (store, api) = (self.store.clone(), self.api.clone());
        tokio::spawn(async move {
            match api.create_booking(request).await {
                Ok(booking) => store.dispatch(ReservationMutation::CreateFulfilled(booking)),
                Err(e) => {
                    tracing::info!(error = %e, "Booking rejected by service");
                    store.dispatch(ReservationMutation::CreateRejected(e.to_string()))
                }
            }
        })
    }

    pub fn cancel_booking(&self, id: BookingId) -> JoinHandle<()> {
        self.store.dispatch(ReservationMutation::CancelPending);
        let (store, api) = (self.store.clone(), self.api.clone());
        tokio::spawn(async move {
            match api.cancel_booking(id).await {
                Ok(id) => store.dispatch(ReservationMutation::CancelFulfilled(id)),
                Err(e) => store.dispatch(ReservationMutation::CancelRejected(e.to_string())),
            }
        })
    }

    pub fn remove_booking(&self, id: BookingId) -> JoinHandle<()> {
        self.store.dispatch(ReservationMutation::RemovePending);
        let (store, api) = (self.store.clone(), self.api.clone());
        tokio::spawn(async move {
            match api.remove_booking(id).await {
                Ok(id) => store.dispatch(ReservationMutation::RemoveFulfilled(id)),
                Err(e) => store.dispatch(ReservationMutation::RemoveRejected(e.to_string())),
            }
        })
    }

    pub fn clear_error(&self) {
        self.store.dispatch(ReservationMutation::ClearError);
    }

    pub fn clear_booking_success(&self) {
        self.store.dispatch(ReservationMutation::ClearBookingSuccess);
    }

    pub fn set_history_search(&self, search: impl Into<String>) {
        self.store
            .dispatch(ReservationMutation::SetHistorySearch(search.into()));
    }

    pub fn set_history_sort(&self, sort: SortKey) {
        self.store.dispatch(ReservationMutation::SetHistorySort(sort));
    }
}
