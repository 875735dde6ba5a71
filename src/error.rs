// src/error.rs
use thiserror::Error;

/// Anything that went wrong talking to the match API, at any layer.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no match ids returned for player {player}")]
    EmptyWindow { player: String },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("match {match_id}: expected {expected} {what}, found {found}")]
    ShapeMismatch {
        match_id: String,
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("table has no rows to derive a cursor from")]
    EmptyTable,

    #[error("table schema mismatch in {path}: {reason}")]
    SchemaMismatch { path: String, reason: String },

    #[error("no {mode} match found near seed player {seed}")]
    NoSeedMatch { seed: String, mode: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// What the frontier does with a failed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Drop this branch; the next step walks from a fresh cursor.
    RetryWithNewCursor,
    /// Structural problem. Stop and tell the operator.
    Fatal,
}

impl CrawlError {
    pub fn policy(&self) -> ErrorPolicy {
        match self {
            CrawlError::Fetch(_) => ErrorPolicy::RetryWithNewCursor,
            CrawlError::ShapeMismatch { .. } => ErrorPolicy::Fatal,
            CrawlError::EmptyTable => ErrorPolicy::Fatal,
            CrawlError::SchemaMismatch { .. } => ErrorPolicy::Fatal,
            CrawlError::NoSeedMatch { .. } => ErrorPolicy::Fatal,
            CrawlError::Io(_) => ErrorPolicy::Fatal,
            CrawlError::Csv(_) => ErrorPolicy::Fatal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.policy() == ErrorPolicy::RetryWithNewCursor
    }
}
