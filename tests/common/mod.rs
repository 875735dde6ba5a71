// tests/common/mod.rs
//
// In-memory match service for crawler tests.
//
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use match_crawler::api::MatchApi;
use match_crawler::error::FetchError;
use serde_json::{Value, json};

pub const PERKS: [u32; 6] = [8005, 9111, 9104, 8014, 8139, 8135];

/// A match-v5 document whose participants are `{match_id}-p{slot}`.
pub fn match_doc(match_id: &str, mode: &str, players: usize) -> Value {
    let participants: Vec<Value> = (1..=players)
        .map(|slot| {
            let win = slot <= 5;
            let team_id = if win { 100 } else { 200 };
            let primary: Vec<Value> = PERKS[..4].iter().map(|p| json!({ "perk": p })).collect();
            let secondary: Vec<Value> = PERKS[4..].iter().map(|p| json!({ "perk": p })).collect();
            json!({
                "championId": 10 + slot,
                "championName": format!("Champ{slot}"),
                "participantId": slot,
                "perks": {
                    "statPerks": { "offense": 5005, "flex": 5008, "defense": 5001 },
                    "styles": [
                        { "style": 8000, "selections": primary },
                        { "style": 8300, "selections": secondary }
                    ]
                },
                "puuid": format!("{match_id}-p{slot}"),
                "summoner1Id": 4,
                "summoner2Id": 32,
                "summonerId": format!("sid-{slot}"),
                "summonerLevel": 100 + slot,
                "summonerName": format!("Player {slot}"),
                "teamId": team_id,
                "win": win
            })
        })
        .collect();
    json!({
        "metadata": { "matchId": match_id },
        "info": { "gameMode": mode, "participants": participants }
    })
}

pub struct FakeApi {
    /// name -> player id
    pub players: HashMap<String, String>,
    /// Shared history for every player. `None` = each player gets `{puuid}-m{k}`, k < 20.
    pub history: Option<Vec<String>>,
    /// Specific documents; anything else is generated with `mode` / `participants`.
    pub overrides: HashMap<String, Value>,
    /// Ids that answer 404.
    pub missing: Vec<String>,
    pub mode: String,
    pub participants: usize,
    pub fail_windows: bool,
    pub window_calls: Cell<usize>,
    pub match_calls: Cell<usize>,
}

impl FakeApi {
    pub fn new() -> Self {
        let mut players = HashMap::new();
        players.insert("Shiera".to_string(), "seed".to_string());
        Self {
            players,
            history: None,
            overrides: HashMap::new(),
            missing: Vec::new(),
            mode: "ARAM".to_string(),
            participants: 10,
            fail_windows: false,
            window_calls: Cell::new(0),
            match_calls: Cell::new(0),
        }
    }
}

impl MatchApi for FakeApi {
    fn player_identifier(&self, name: &str) -> Result<String, FetchError> {
        self.players.get(name).cloned().ok_or_else(|| FetchError::Status {
            status: 404,
            url: format!("fake://summoners/{name}"),
        })
    }

    fn match_window(&self, player_id: &str, offset: u32, count: u32) -> Result<Vec<String>, FetchError> {
        self.window_calls.set(self.window_calls.get() + 1);
        if self.fail_windows {
            return Err(FetchError::Transport("connection reset".into()));
        }
        let history = match &self.history {
            Some(h) => h.clone(),
            None => (0..20).map(|k| format!("{player_id}-m{k}")).collect(),
        };
        Ok(history.into_iter().skip(offset as usize).take(count as usize).collect())
    }

    fn fetch_match(&self, match_id: &str) -> Result<Value, FetchError> {
        self.match_calls.set(self.match_calls.get() + 1);
        if self.missing.iter().any(|m| m == match_id) {
            return Err(FetchError::Status { status: 404, url: format!("fake://matches/{match_id}") });
        }
        Ok(self
            .overrides
            .get(match_id)
            .cloned()
            .unwrap_or_else(|| match_doc(match_id, &self.mode, self.participants)))
    }
}
