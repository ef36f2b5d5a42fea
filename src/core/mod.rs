// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qplay::core::TypeName`
pub use error::PlayError;
pub use state::StateVector;

pub mod constants;
pub use constants::qplay_constants::{BAR_SCALE, DEFAULT_DECIMALS, DEFAULT_SYMBOL, MAX_DECIMALS};
