// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod api;
pub mod crawl;
pub mod csv;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod store;
