//! Marker trait for slice mutation messages.

/// A message that a slice reducer applies to produce new state.
///
/// Mutations come from two places:
/// - synchronous user intents (set a filter, log out)
/// - resolutions of simulated remote calls (booking confirmed, login failed)
pub trait Mutation: std::fmt::Debug + Send + 'static {}
