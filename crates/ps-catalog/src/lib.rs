//! ps-catalog: the fixed PDS diaphragm metering pump product table.
//!
//! The catalog is compiled into the binary, never mutated at runtime, and
//! serves as the single source of truth for every frontend.

pub mod catalog;

pub use catalog::{CATALOG_LEN, PumpModel, all, by_model};
