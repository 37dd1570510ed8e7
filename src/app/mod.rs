//! Application layer: the presentation-owned state container and input
//! debouncing.

pub mod debounce;
pub mod state;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use state::AppState;
