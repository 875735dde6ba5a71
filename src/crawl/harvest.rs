// src/crawl/harvest.rs
use std::path::Path;

use crate::api::MatchApi;
use crate::error::CrawlError;
use crate::progress::Progress;
use crate::specs::{Normalized, normalize};
use crate::store::Table;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub fetched: usize,
    pub appended: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// Pull one player's `count` most recent matches into the table at `path`
/// (created if absent). Written once, and only if something was added; a fatal
/// error still writes the rows accepted before it.
pub fn harvest<A: MatchApi>(
    api: &A,
    path: &Path,
    player: &str,
    count: u32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<HarvestSummary, CrawlError> {
    let mut table = if path.exists() { Table::load(path)? } else { Table::default() };
    let mut seen = table.seen_set();

    let puuid = api.player_identifier(player)?;
    let match_ids = api.match_window(&puuid, 0, count)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(match_ids.len());
    }

    let mut summary = HarvestSummary::default();
    for match_id in match_ids {
        summary.fetched += 1;
        if !seen.insert(match_id.clone()) {
            summary.duplicates += 1;
            continue;
        }

        let normalized = api
            .fetch_match(&match_id)
            .map_err(CrawlError::from)
            .and_then(|raw| normalize(&raw, &match_id));

        match normalized {
            Ok(Normalized::Row(row)) => {
                table.push(&row);
                summary.appended += 1;
            }
            Ok(Normalized::Rejected(_)) => summary.rejected += 1,
            Err(e) if e.is_recoverable() => {
                log::warn!("Harvest {player}: skipping {match_id}: {e}");
                summary.failed += 1;
            }
            Err(e) => {
                // rows accepted so far are valid on their own
                if summary.appended > 0 {
                    table.save(path)?;
                }
                log::error!("Harvest {player}: aborted at {match_id} after {summary:?}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&match_id);
        }
    }

    if summary.appended > 0 {
        table.save(path)?;
    }
    log::info!("Harvest {player}: {summary:?}");

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
