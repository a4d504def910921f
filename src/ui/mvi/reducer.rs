//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Apply `intent` to `state`. Must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
