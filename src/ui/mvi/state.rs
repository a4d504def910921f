//! Base trait for view state.

/// Marker trait for state objects.
///
/// States are cloned to produce successors and compared to detect changes
/// worth re-rendering.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
