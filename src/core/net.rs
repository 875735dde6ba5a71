// src/core/net.rs
// Blocking HTTPS GET returning decoded JSON. One client per process.

use std::{thread, time::Duration};

use reqwest::{Url, blocking::Client};
use serde::de::DeserializeOwned;

use crate::config::{consts::USER_AGENT, options::ApiOptions};
use crate::error::FetchError;

const TOKEN_HEADER: &str = "X-Riot-Token";

pub struct Http {
    client: Client,
    token: String,
    pause: Duration,
}

impl Http {
    pub fn new(opts: &ApiOptions) -> Result<Self, FetchError> {
        opts.validate()?;
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, token: opts.api_key.clone(), pause: opts.request_pause })
    }

    /// GET `url` and decode the body. Non-2xx is an error; the body is not inspected.
    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let result = self.client.get(url.clone()).header(TOKEN_HEADER, &self.token).send();
        thread::sleep(self.pause); // be polite, also on failure

        let resp = result.map_err(|e| FetchError::Transport(e.without_url().to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = resp.text().map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(format!("{e} ({url})")))
    }
}

/// Build `https://{host}/{segments...}?{query}`. Segments are percent-encoded,
/// so player names with spaces or `#` survive intact.
pub fn endpoint(host: &str, segments: &[&str], query: &[(&str, String)]) -> Result<Url, FetchError> {
    let mut url = Url::parse(&format!("https://{host}"))
        .map_err(|e| FetchError::Config(format!("bad host {host:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::Config(format!("host cannot carry a path: {host:?}")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_segments_and_query() {
        let url = endpoint(
            "na1.api.riotgames.com",
            &["lol", "summoner", "v4", "summoners", "by-name", "Some Player"],
            &[],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Some%20Player"
        );

        let url = endpoint(
            "americas.api.riotgames.com",
            &["lol", "match", "v5", "matches", "by-puuid", "abc", "ids"],
            &[("start", 7.to_string()), ("count", 5.to_string())],
        )
        .unwrap();
        assert_eq!(url.query(), Some("start=7&count=5"));
    }

    #[test]
    fn endpoint_rejects_garbage_host() {
        assert!(endpoint("not a host", &["x"], &[]).is_err());
    }
}
