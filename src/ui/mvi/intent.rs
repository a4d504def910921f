//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents carry everything the reducer needs, including values that are
/// impure to produce (fresh keys), so that reducing stays deterministic.
pub trait Intent: Send + 'static {}
