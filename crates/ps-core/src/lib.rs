//! ps-core: stable foundation for pumpselect.
//!
//! Contains:
//! - units (uom SI types + constructors for the pump datasheet units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PsError, PsResult};
pub use numeric::*;
pub use units::*;
