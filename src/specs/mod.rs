// src/specs/mod.rs
pub mod match_row;

pub use match_row::{MatchRow, Normalized, Rejection, normalize, normalize_mode, schema_headers};
