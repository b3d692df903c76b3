//! Rank the top hashtags and tweet languages in a large line-delimited dump.
//!
//! The dump renders one big JSON array with one element per line. A fixed pool
//! of workers shards the lines by index, each worker tallies hashtags and
//! language codes over its shard, and after a rendezvous barrier a coordinator
//! merges the tallies and renders the top ten of each feature.

use std::fs::File;
use std::path::Path;

use failure::{Error, ResultExt};
use log;

mod catalog;
mod extract;
mod partition;
mod pool;
mod record;
mod report;
mod scan;
mod tally;

pub use crate::catalog::LanguageCatalog;
pub use crate::pool::WorkerPool;
pub use crate::report::RankedEntry;
pub use crate::tally::{FrequencyMap, Tally};

/// Run the whole pipeline over one source file and return the rendered report.
pub fn rank_features<P: AsRef<Path>>(
    source: P,
    workers: u32,
    catalog: &LanguageCatalog,
) -> Result<String, Error> {
    let source = source.as_ref();

    log::info!(
        "Rank hashtags and languages for file {} across {} workers",
        source.display(),
        workers
    );

    // Fail fast on an unreadable source instead of stalling the pool.
    File::open(source).context("Missing record source file")?;

    let global = WorkerPool::new(workers).run(source)?;

    Ok(report::render(&global, catalog))
}
