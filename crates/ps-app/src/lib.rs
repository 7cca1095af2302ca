//! Shared application service layer for pumpselect.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing the form lifecycle (submit / reset / entry selection) and
//! the display formatting both frontends must agree on.

pub mod error;
pub mod format;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult, Field};
pub use format::{flow_text, power_text, pressure_text, psi_text};
pub use session::Session;
