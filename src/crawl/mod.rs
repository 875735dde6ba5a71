// src/crawl/mod.rs
mod frontier;
mod harvest;

pub use frontier::{Frontier, StepOutcome};
pub use harvest::{HarvestSummary, harvest};
