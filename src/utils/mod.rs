//! Shared utilities

pub mod error;

pub use error::{GateError, Result};
