// src/api/mod.rs
use serde_json::Value;

use crate::error::FetchError;

mod riot;
pub use riot::RiotClient;

/// The three lookups the crawler needs from the match service.
/// The crawler never sees URLs, status codes or credentials; it only gets data or a `FetchError`.
pub trait MatchApi {
    /// Resolve a player name to its stable player identifier.
    fn player_identifier(&self, name: &str) -> Result<String, FetchError>;

    /// Match ids for `player_id`, newest first, skipping `offset` and returning at most `count`.
    fn match_window(&self, player_id: &str, offset: u32, count: u32) -> Result<Vec<String>, FetchError>;

    /// Full raw match document.
    fn fetch_match(&self, match_id: &str) -> Result<Value, FetchError>;
}

impl<A: MatchApi + ?Sized> MatchApi for &A {
    fn player_identifier(&self, name: &str) -> Result<String, FetchError> {
        (**self).player_identifier(name)
    }
    fn match_window(&self, player_id: &str, offset: u32, count: u32) -> Result<Vec<String>, FetchError> {
        (**self).match_window(player_id, offset, count)
    }
    fn fetch_match(&self, match_id: &str) -> Result<Value, FetchError> {
        (**self).fetch_match(match_id)
    }
}
