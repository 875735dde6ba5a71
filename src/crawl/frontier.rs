// src/crawl/frontier.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::rngs::StdRng;

use crate::api::MatchApi;
use crate::config::consts::{REQUIRED_GAME_MODE, SEED_WINDOW, SLOTS, WINDOW_MAX, WINDOW_MIN};
use crate::error::{CrawlError, FetchError};
use crate::specs::match_row::{PLAYER_ID_FIELD, slot_column};
use crate::specs::{Normalized, Rejection, normalize};
use crate::store::Table;

/// What one `step()` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// New row appended and persisted.
    Appended { cursor: String, match_id: String },
    /// Candidate was already seen; table rewritten unchanged.
    Duplicate { cursor: String, match_id: String },
    /// Candidate fetched but not the required game mode.
    Rejected { cursor: String, match_id: String, rejection: Rejection },
    /// Recoverable failure; the next step starts from a fresh cursor.
    Recovered { cursor: String, match_id: Option<String>, reason: String },
}

impl StepOutcome {
    pub fn cursor(&self) -> &str {
        match self {
            StepOutcome::Appended { cursor, .. }
            | StepOutcome::Duplicate { cursor, .. }
            | StepOutcome::Rejected { cursor, .. }
            | StepOutcome::Recovered { cursor, .. } => cursor,
        }
    }
}

/// Random walk over players: pick a player from a random slot of a random row,
/// look a few matches back in their history, keep the first unseen one.
pub struct Frontier<A, R = StdRng> {
    api: A,
    path: PathBuf,
    table: Table,
    seen: HashSet<String>,
    rng: R,
}

impl<A: MatchApi, R: Rng> Frontier<A, R> {
    /// Resume from `path`, or seed a new table from `seed`'s recent matches.
    pub fn initialize(api: A, path: impl Into<PathBuf>, seed: &str, rng: R) -> Result<Self, CrawlError> {
        let path = path.into();
        let table = if path.exists() {
            let table = Table::load(&path)?;
            log::info!("Loaded {} rows from {}", table.len(), path.display());
            table
        } else {
            let table = seed_table(&api, seed)?;
            table.save(&path)?;
            log::info!("Seeded {} from {seed}", path.display());
            table
        };
        let seen = table.seen_set();
        Ok(Self { api, path, table, seen, rng })
    }

    /// One crawl iteration. Only structural problems and persistence failures
    /// come back as `Err`; every fetch or rejection is folded into the outcome.
    pub fn step(&mut self) -> Result<StepOutcome, CrawlError> {
        self.reload()?;
        let cursor = self.derive_cursor()?;

        let mut candidate = None;
        match self.walk(&cursor, &mut candidate) {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_recoverable() => {
                log::warn!("Step from {cursor} abandoned: {e}");
                Ok(StepOutcome::Recovered { cursor, match_id: candidate, reason: e.to_string() })
            }
            Err(e) => {
                log::error!("Step from {cursor} failed: {e}");
                Err(e)
            }
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /* ---------- internals ---------- */

    fn reload(&mut self) -> Result<(), CrawlError> {
        self.table = Table::load(&self.path)?;
        self.seen.extend(self.table.seen_set());
        Ok(())
    }

    /// Player id from a uniformly random slot of a uniformly random row.
    fn derive_cursor(&mut self) -> Result<String, CrawlError> {
        if self.table.is_empty() {
            return Err(CrawlError::EmptyTable);
        }
        let slot = self.rng.gen_range(1..=SLOTS);
        let row = self.rng.gen_range(0..self.table.len());
        let cell = self.table.cell(row, &slot_column(slot, PLAYER_ID_FIELD)).unwrap_or_default();
        Ok(cell.to_string())
    }

    fn walk(&mut self, cursor: &str, candidate: &mut Option<String>) -> Result<StepOutcome, CrawlError> {
        if cursor.is_empty() {
            return Err(FetchError::Malformed("blank player id in table".into()).into());
        }

        // Skip the newest few matches: they are the likeliest to repeat the previous step.
        let offset = self.rng.gen_range(WINDOW_MIN..=WINDOW_MAX);
        let count = self.rng.gen_range(WINDOW_MIN..=WINDOW_MAX);
        let window = self.api.match_window(cursor, offset, count)?;
        let match_id = window
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::EmptyWindow { player: cursor.to_string() })?;
        *candidate = Some(match_id.clone());
        log::debug!("Cursor {cursor} -> candidate {match_id} (offset {offset}, count {count})");

        let cursor = cursor.to_string();
        if self.seen.contains(&match_id) {
            self.table.save(&self.path)?;
            return Ok(StepOutcome::Duplicate { cursor, match_id });
        }

        // Seen from here on, whether or not it turns into a row.
        self.seen.insert(match_id.clone());
        let raw = self.api.fetch_match(&match_id)?;

        match normalize(&raw, &match_id)? {
            Normalized::Row(row) => {
                self.table.push(&row);
                self.table.save(&self.path)?;
                log::info!("Appended {match_id} ({} rows)", self.table.len());
                Ok(StepOutcome::Appended { cursor, match_id })
            }
            Normalized::Rejected(rejection) => {
                log::debug!("Rejected {match_id}: {rejection:?}");
                Ok(StepOutcome::Rejected { cursor, match_id, rejection })
            }
        }
    }
}

/// First row of a fresh table: the first match of the required mode in the seed's recent history.
fn seed_table<A: MatchApi>(api: &A, seed: &str) -> Result<Table, CrawlError> {
    let puuid = api.player_identifier(seed)?;
    let window = api.match_window(&puuid, 0, SEED_WINDOW)?;

    for match_id in window {
        let raw = match api.fetch_match(&match_id) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Seed candidate {match_id}: {e}");
                continue;
            }
        };
        match normalize(&raw, &match_id) {
            Ok(Normalized::Row(row)) => {
                let mut table = Table::default();
                table.push(&row);
                return Ok(table);
            }
            Ok(Normalized::Rejected(_)) => continue,
            Err(e) if e.is_recoverable() => {
                log::warn!("Seed candidate {match_id}: {e}");
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Err(CrawlError::NoSeedMatch { seed: seed.to_string(), mode: REQUIRED_GAME_MODE.to_string() })
}
