// src/api/riot.rs
use serde::Deserialize;
use serde_json::Value;

use super::MatchApi;
use crate::config::options::ApiOptions;
use crate::core::net::{Http, endpoint};
use crate::error::FetchError;

#[derive(Deserialize)]
struct PuuidDto {
    puuid: String,
}

/// Riot match-v5 client. Summoner lookups go to the platform host,
/// account and match lookups to the regional host.
pub struct RiotClient {
    http: Http,
    platform_host: String,
    regional_host: String,
}

impl RiotClient {
    pub fn new(opts: &ApiOptions) -> Result<Self, FetchError> {
        Ok(Self {
            http: Http::new(opts)?,
            platform_host: opts.platform_host.clone(),
            regional_host: opts.regional_host.clone(),
        })
    }
}

impl MatchApi for RiotClient {
    fn player_identifier(&self, name: &str) -> Result<String, FetchError> {
        // "GameName#TAG" is a Riot ID; bare names go through the legacy summoner lookup
        let url = match name.split_once('#') {
            Some((game_name, tag)) => endpoint(
                &self.regional_host,
                &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag],
                &[],
            )?,
            None => endpoint(
                &self.platform_host,
                &["lol", "summoner", "v4", "summoners", "by-name", name],
                &[],
            )?,
        };
        let dto: PuuidDto = self.http.get_json(url)?;
        log::debug!("Resolved {name} -> {}", dto.puuid);
        Ok(dto.puuid)
    }

    fn match_window(&self, player_id: &str, offset: u32, count: u32) -> Result<Vec<String>, FetchError> {
        let url = endpoint(
            &self.regional_host,
            &["lol", "match", "v5", "matches", "by-puuid", player_id, "ids"],
            &[("start", offset.to_string()), ("count", count.to_string())],
        )?;
        self.http.get_json(url)
    }

    fn fetch_match(&self, match_id: &str) -> Result<Value, FetchError> {
        let url = endpoint(&self.regional_host, &["lol", "match", "v5", "matches", match_id], &[])?;
        self.http.get_json(url)
    }
}
