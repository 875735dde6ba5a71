// src/specs/match_row.rs
//
// Flattens one match-v5 document into a single fixed-width row.
//
// Layout (stable, never reordered):
//   p1_<scalar>.. p10_<scalar>   10 x 14 columns
//   p1_perk1 .. p10_perk6        10 x 6 columns
//   matchId, gameMode

use serde_json::Value;

use crate::config::consts::{PERKS_PER_PLAYER, REQUIRED_GAME_MODE, SLOTS};
use crate::error::{CrawlError, FetchError};

/// Per-player fields, in column order. Dotted names are nested keys.
pub const SCALAR_FIELDS: [&str; 14] = [
    "championId",
    "championName",
    "participantId",
    "perks.statPerks.offense",
    "perks.statPerks.flex",
    "perks.statPerks.defense",
    "puuid",
    "summoner1Id",
    "summoner2Id",
    "summonerId",
    "summonerLevel",
    "summonerName",
    "teamId",
    "win",
];
pub const SCALAR_COUNT: usize = SCALAR_FIELDS.len();

pub const MATCH_ID_COL: &str = "matchId";
pub const GAME_MODE_COL: &str = "gameMode";
pub const PLAYER_ID_FIELD: &str = "puuid";

pub const fn columns_per_row() -> usize {
    SLOTS * (SCALAR_COUNT + PERKS_PER_PLAYER) + 2
}

/// Column name of a per-player field, `slot` in 1..=10.
pub fn slot_column(slot: usize, field: &str) -> String {
    format!("p{slot}_{field}")
}

pub fn schema_headers() -> Vec<String> {
    let mut headers = Vec::with_capacity(columns_per_row());
    for slot in 1..=SLOTS {
        for field in SCALAR_FIELDS {
            headers.push(slot_column(slot, field));
        }
    }
    for slot in 1..=SLOTS {
        for j in 1..=PERKS_PER_PLAYER {
            headers.push(slot_column(slot, &format!("perk{j}")));
        }
    }
    headers.push(MATCH_ID_COL.to_string());
    headers.push(GAME_MODE_COL.to_string());
    headers
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerCells {
    pub scalars: Vec<String>,
    pub perks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRow {
    pub match_id: String,
    pub game_mode: String,
    /// Slot order = API participant order
    pub players: Vec<PlayerCells>,
}

impl MatchRow {
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(columns_per_row());
        for p in &self.players {
            cells.extend(p.scalars.iter().cloned());
        }
        for p in &self.players {
            cells.extend(p.perks.iter().cloned());
        }
        cells.push(self.match_id.clone());
        cells.push(self.game_mode.clone());
        cells
    }

    /// Inverse of `to_cells`. `None` if the width is wrong.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        if cells.len() != columns_per_row() {
            return None;
        }
        let (scalar_block, rest) = cells.split_at(SLOTS * SCALAR_COUNT);
        let (perk_block, tail) = rest.split_at(SLOTS * PERKS_PER_PLAYER);

        let players = scalar_block
            .chunks(SCALAR_COUNT)
            .zip(perk_block.chunks(PERKS_PER_PLAYER))
            .map(|(s, p)| PlayerCells { scalars: s.to_vec(), perks: p.to_vec() })
            .collect();

        Some(Self { match_id: tail[0].clone(), game_mode: tail[1].clone(), players })
    }

    pub fn scalar(&self, slot: usize, field: &str) -> Option<&str> {
        let idx = SCALAR_FIELDS.iter().position(|f| *f == field)?;
        let player = self.players.get(slot.checked_sub(1)?)?;
        player.scalars.get(idx).map(String::as_str)
    }

    pub fn player_id(&self, slot: usize) -> Option<&str> {
        self.scalar(slot, PLAYER_ID_FIELD)
    }

    pub fn perks(&self, slot: usize) -> Option<&[String]> {
        let player = self.players.get(slot.checked_sub(1)?)?;
        Some(&player.perks)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    WrongGameMode { found: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalized {
    Row(MatchRow),
    Rejected(Rejection),
}

/// Normalize against the crawler's required mode.
pub fn normalize(raw: &Value, match_id: &str) -> Result<Normalized, CrawlError> {
    normalize_mode(raw, match_id, REQUIRED_GAME_MODE)
}

/// Validate the mode, then flatten participants.
/// - wrong mode          -> `Ok(Rejected)`, never an error
/// - missing structure   -> `FetchError::Malformed` (recoverable)
/// - participants != 10
///   or perks != 6       -> `ShapeMismatch` (fatal)
pub fn normalize_mode(raw: &Value, match_id: &str, mode: &str) -> Result<Normalized, CrawlError> {
    let found = game_mode(raw)
        .ok_or_else(|| malformed(match_id, "no gameMode in info or metadata"))?;
    if found != mode {
        return Ok(Normalized::Rejected(Rejection::WrongGameMode { found }));
    }

    let participants = raw
        .pointer("/info/participants")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(match_id, "info.participants is not a list"))?;
    if participants.len() != SLOTS {
        return Err(CrawlError::ShapeMismatch {
            match_id: match_id.to_string(),
            what: "participants".to_string(),
            expected: SLOTS,
            found: participants.len(),
        });
    }

    let mut players = Vec::with_capacity(SLOTS);
    for (i, participant) in participants.iter().enumerate() {
        let slot = i + 1;
        if !participant.is_object() {
            return Err(malformed(match_id, &format!("participant {slot} is not an object")));
        }
        let scalars = SCALAR_FIELDS
            .iter()
            .map(|field| scalar_cell(participant, field).ok_or_else(|| {
                malformed(match_id, &format!("p{slot}_{field} is not a scalar"))
            }))
            .collect::<Result<Vec<_>, _>>()?;
        let perks = perk_selections(participant, match_id, slot)?;
        if perks.len() != PERKS_PER_PLAYER {
            return Err(CrawlError::ShapeMismatch {
                match_id: match_id.to_string(),
                what: format!("perk selections in slot {slot}"),
                expected: PERKS_PER_PLAYER,
                found: perks.len(),
            });
        }
        players.push(PlayerCells { scalars, perks });
    }

    Ok(Normalized::Row(MatchRow {
        match_id: match_id.to_string(),
        game_mode: found,
        players,
    }))
}

/* ---------- helpers ---------- */

/// Declared mode: a string in `info`, else a string in `metadata`. A non-null
/// value of another type is kept in its JSON form so it can be rejected.
fn game_mode(raw: &Value) -> Option<String> {
    let declared = |pointer: &str| raw.pointer(pointer).filter(|v| !v.is_null());
    let info = declared("/info/gameMode");
    let meta = declared("/metadata/gameMode");

    info.and_then(Value::as_str)
        .or_else(|| meta.and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| info.or(meta).map(Value::to_string))
}

fn malformed(match_id: &str, what: &str) -> CrawlError {
    FetchError::Malformed(format!("match {match_id}: {what}")).into()
}

/// Missing or null -> empty cell. Nested values are not scalars.
fn scalar_cell(participant: &Value, dotted: &str) -> Option<String> {
    let pointer = format!("/{}", dotted.replace('.', "/"));
    match participant.pointer(&pointer) {
        None | Some(Value::Null) => Some(String::new()),
        Some(v) => render(v),
    }
}

fn render(v: &Value) -> Option<String> {
    match v {
        Value::Null => Some(String::new()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// All `perk` ids across `perks.styles[*].selections[*]`, in API order.
fn perk_selections(participant: &Value, match_id: &str, slot: usize) -> Result<Vec<String>, CrawlError> {
    let styles = participant
        .pointer("/perks/styles")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(match_id, &format!("p{slot} has no perks.styles list")))?;

    let mut out = Vec::with_capacity(PERKS_PER_PLAYER);
    for style in styles {
        let selections = style
            .get("selections")
            .and_then(Value::as_array)
            .ok_or_else(|| malformed(match_id, &format!("p{slot} style without selections")))?;
        for sel in selections {
            let perk = sel
                .get("perk")
                .filter(|v| !v.is_null())
                .and_then(render)
                .ok_or_else(|| malformed(match_id, &format!("p{slot} selection without perk")))?;
            out.push(perk);
        }
    }
    Ok(out)
}
