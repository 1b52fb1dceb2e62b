//! Marker trait for slice state.

/// State owned by a single slice.
///
/// `PartialEq` lets the store detect which fragments changed and need a
/// snapshot; `Default` is the state used when nothing was persisted.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
