//! Rank the top hashtags and tweet languages in a large line-delimited dump.
//!
//! Usage: `tweet-tally [source-file] [workers]`

use std::env;
use std::time::Instant;

use env_logger;
use tweet_tally::LanguageCatalog;

const DEFAULT_SOURCE: &str = "tinyTwitter.json";
const DEFAULT_WORKERS: u32 = 8;

fn main() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");

    env_logger::init_from_env(env);

    let mut args = env::args().skip(1);
    let source = args.next().unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let workers = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!(
                "Invalid worker count {:?}, falling back to {}",
                raw,
                DEFAULT_WORKERS
            );
            DEFAULT_WORKERS
        }),
        None => DEFAULT_WORKERS,
    };

    let catalog = LanguageCatalog::builtin();

    let started = Instant::now();
    log::info!("The application started");

    match tweet_tally::rank_features(&source, workers, &catalog) {
        Ok(report) => {
            print!("{}", report);
            log::info!(
                "The application finished, total execution time: {:?}",
                started.elapsed()
            );
        }
        Err(error) => log::error!("Failed to rank features, cause: {}", error),
    }
}
