// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::api::RiotClient;
use crate::config::consts::*;
use crate::config::options::{ApiOptions, CrawlOptions};
use crate::crawl::{Frontier, StepOutcome, harvest};
use crate::progress::Progress;

#[derive(Parser)]
#[command(name = "match_crawler")]
#[command(about = "Random-walk crawl of match history into a flat table", long_about = None)]
struct Cli {
    /// Table file (.csv or .tsv)
    #[arg(long, global = true, default_value_os_t = PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE))]
    table: PathBuf,

    /// API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: String,

    /// Platform host for summoner lookups
    #[arg(long, global = true, default_value = PLATFORM_HOST)]
    platform: String,

    /// Regional host for account and match lookups
    #[arg(long, global = true, default_value = REGIONAL_HOST)]
    region: String,

    /// Log debug lines to the debug log
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the table from the seed player's recent matches (no-op if it exists)
    Init {
        #[arg(long, default_value = SEED_PLAYER)]
        seed: String,
    },

    /// Random-walk crawl; initializes the table first if needed
    Crawl {
        #[arg(long, default_value = SEED_PLAYER)]
        seed: String,

        /// Steps per batch
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Number of batches (0 = until stopped)
        #[arg(long, default_value_t = 1)]
        batches: usize,

        /// Pause between batches, seconds
        #[arg(long, default_value_t = DEFAULT_PAUSE_SECS)]
        pause_secs: u64,

        /// Fixed RNG seed for a reproducible walk
        #[arg(long)]
        rng_seed: Option<u64>,
    },

    /// Add one player's most recent matches
    Harvest {
        /// Summoner name, or Riot ID as Name#TAG
        #[arg(long)]
        player: String,

        #[arg(long, default_value_t = SEED_WINDOW)]
        count: u32,
    },
}

/// Prints one line per step / match to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn step_done(&mut self, index: usize, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Appended { match_id, .. } => println!("[{index}] + {match_id}"),
            StepOutcome::Duplicate { match_id, .. } => println!("[{index}] = {match_id} (seen)"),
            StepOutcome::Rejected { match_id, rejection, .. } => {
                println!("[{index}] - {match_id} ({rejection:?})")
            }
            StepOutcome::Recovered { reason, .. } => println!("[{index}] ! {reason}"),
        }
    }

    fn item_done(&mut self, match_id: &str) {
        println!("{match_id}");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    crate::logging::init(level).wrap_err("installing the debug log")?;

    let mut api_opts = ApiOptions::new(cli.api_key);
    api_opts.platform_host = cli.platform;
    api_opts.regional_host = cli.region;
    let api = RiotClient::new(&api_opts)?;

    match cli.command {
        Commands::Init { seed } => {
            let frontier = Frontier::initialize(&api, &cli.table, &seed, StdRng::from_entropy())?;
            println!("{}: {} rows", frontier.path().display(), frontier.table().len());
        }
        Commands::Crawl { seed, steps, batches, pause_secs, rng_seed } => {
            let opts = CrawlOptions {
                table: cli.table,
                seed,
                steps,
                batches,
                pause: Duration::from_secs(pause_secs),
            };
            let rng = match rng_seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let mut frontier = Frontier::initialize(&api, &opts.table, &opts.seed, rng)
                .wrap_err_with(|| format!("initializing {}", opts.table.display()))?;
            let summary = crate::runner::run(&mut frontier, &opts, Some(&mut ConsoleProgress))?;
            println!("{summary:?}");
        }
        Commands::Harvest { player, count } => {
            let summary = harvest(&api, &cli.table, &player, count, Some(&mut ConsoleProgress))?;
            println!("{summary:?}");
        }
    }
    Ok(())
}
