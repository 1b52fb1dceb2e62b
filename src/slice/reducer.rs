//! Reducer trait shared by all slices.

use super::mutation::Mutation;
use super::state::SliceState;

/// Applies mutations to one slice.
///
/// Reducers never perform I/O. Persistence and delayed work are the job of
/// the store and the side-effect handlers.
pub trait Reducer {
    type State: SliceState;
    type Mutation: Mutation;

    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State;
}
