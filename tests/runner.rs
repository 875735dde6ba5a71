// tests/runner.rs
mod common;

use std::time::Duration;

use match_crawler::config::options::CrawlOptions;
use match_crawler::crawl::{Frontier, StepOutcome};
use match_crawler::error::CrawlError;
use match_crawler::progress::{NullProgress, Progress};
use match_crawler::runner::run;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use common::FakeApi;

#[derive(Default)]
struct Counter {
    begun: Option<usize>,
    steps: Vec<usize>,
    lines: usize,
    finished: bool,
}

impl Progress for Counter {
    fn begin(&mut self, total: usize) {
        self.begun = Some(total);
    }
    fn log(&mut self, _msg: &str) {
        self.lines += 1;
    }
    fn step_done(&mut self, index: usize, _outcome: &StepOutcome) {
        self.steps.push(index);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

fn opts(dir: &TempDir, steps: usize, batches: usize) -> CrawlOptions {
    CrawlOptions {
        table: dir.path().join("run.csv"),
        steps,
        batches,
        pause: Duration::ZERO,
        ..CrawlOptions::default()
    }
}

#[test]
fn runs_every_step_of_every_batch() {
    let dir = TempDir::new().unwrap();
    let opts = opts(&dir, 3, 2);
    let api = FakeApi::new();
    let mut frontier = Frontier::initialize(&api, &opts.table, &opts.seed, StdRng::seed_from_u64(6)).unwrap();

    let mut counter = Counter::default();
    let summary = run(&mut frontier, &opts, Some(&mut counter)).unwrap();

    assert_eq!(summary.steps, 6);
    assert_eq!(
        summary.appended + summary.duplicates + summary.rejected + summary.recovered,
        6
    );
    assert_eq!(frontier.table().len(), 1 + summary.appended);
    assert_eq!(counter.begun, Some(6));
    assert_eq!(counter.steps, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(counter.lines, 2);
    assert!(counter.finished);
}

#[test]
fn fatal_step_stops_the_run() {
    let dir = TempDir::new().unwrap();
    let opts = opts(&dir, 5, 3);

    // seed with a well-formed roster, then walk into a short one
    let good = FakeApi::new();
    Frontier::initialize(&good, &opts.table, &opts.seed, StdRng::seed_from_u64(1)).unwrap();

    let mut short = FakeApi::new();
    short.participants = 9;
    let mut frontier = Frontier::initialize(&short, &opts.table, &opts.seed, StdRng::seed_from_u64(1)).unwrap();

    let mut counter = Counter::default();
    let err = run(&mut frontier, &opts, Some(&mut counter)).unwrap_err();
    assert!(matches!(err, CrawlError::ShapeMismatch { .. }), "{err}");
    assert!(counter.steps.is_empty());
    assert!(counter.finished);
    assert_eq!(short.window_calls.get(), 1);
}

#[test]
fn runs_without_progress_sink() {
    let dir = TempDir::new().unwrap();
    let opts = opts(&dir, 4, 1);
    let api = FakeApi::new();
    let mut frontier = Frontier::initialize(&api, &opts.table, &opts.seed, StdRng::seed_from_u64(3)).unwrap();

    let summary = run(&mut frontier, &opts, None).unwrap();
    assert_eq!(summary.steps, 4);

    let again = run(&mut frontier, &opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(again.steps, 4);
    assert_eq!(frontier.table().len(), 1 + summary.appended + again.appended);
}
