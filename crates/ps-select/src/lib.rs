//! ps-select: the selection engine.
//!
//! Filters the static catalog against a user requirement pair and ranks the
//! qualifying models ascending by maximum flow rate, so the first entry is
//! the least-oversized match.

pub mod engine;

pub use engine::{Query, Ranking, SHORTLIST_LEN, SelectError, SelectResult, rank};
