// src/runner.rs
use std::thread;

use rand::Rng;

use crate::{
    api::MatchApi,
    config::options::CrawlOptions,
    crawl::{Frontier, StepOutcome},
    error::CrawlError,
    progress::Progress,
};

/// Counts per step outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub appended: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub recovered: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::Appended { .. } => self.appended += 1,
            StepOutcome::Duplicate { .. } => self.duplicates += 1,
            StepOutcome::Rejected { .. } => self.rejected += 1,
            StepOutcome::Recovered { .. } => self.recovered += 1,
        }
    }
}

/// Top-level crawl loop: `opts.batches` batches of `opts.steps` steps, sleeping
/// `opts.pause` between batches. `batches == 0` runs until a fatal error.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run<A: MatchApi, R: Rng>(
    frontier: &mut Frontier<A, R>,
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, CrawlError> {
    let mut summary = RunSummary::default();
    let forever = opts.batches == 0;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(if forever { 0 } else { opts.batches * opts.steps });
    }

    let mut batch = 0usize;
    let result: Result<(), CrawlError> = 'crawl: loop {
        if !forever && batch >= opts.batches {
            break Ok(());
        }
        if batch > 0 {
            thread::sleep(opts.pause);
        }
        batch += 1;

        for _ in 0..opts.steps {
            let outcome = match frontier.step() {
                Ok(outcome) => outcome,
                Err(e) => break 'crawl Err(e),
            };
            summary.record(&outcome);
            if let Some(p) = progress.as_deref_mut() {
                p.step_done(summary.steps, &outcome);
            }
        }
        log::info!("Batch {batch} done: {} rows in {}", frontier.table().len(), frontier.path().display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Batch {batch} done ({} rows)", frontier.table().len()));
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    log::info!("Crawl finished: {summary:?}");
    result.map(|_| summary)
}
