//! Slice primitives for the store.
//!
//! Every partition of application state is a slice: a state value, the
//! mutation messages that may change it, and a reducer that applies them.
//!
//! ```text
//! Intent ──→ Handler ──→ Mutation ──→ Reducer ──→ SliceState ──→ View
//!    │                      ↑                                     │
//!    └──────────────────────┴─────────────────────────────────────┘
//! ```
//!
//! - **SliceState**: owned, clonable snapshot of one partition
//! - **Mutation**: a message a reducer knows how to apply
//! - **Reducer**: pure `(state, mutation) -> state` transition

mod mutation;
mod reducer;
mod state;

pub use mutation::Mutation;
pub use reducer::Reducer;
pub use state::SliceState;
