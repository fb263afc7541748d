//! Application module - handles core application logic
//!
//! This module owns the view state and the operations that connect it to
//! the catalog backend, with platform-specific implementations for WASM
//! and no-WASM environments.

pub mod state;

pub use state::AppState;

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::*;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::*;
