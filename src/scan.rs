//! Per-worker scanning pass over the record source.

use std::io::{self, BufRead, BufReader, Read};

use log;

use crate::extract;
use crate::partition;
use crate::record::{self, ParseOutcome};
use crate::tally::Tally;

/// Stream the whole source through this worker, tallying only the lines the
/// worker owns. Per-line decode failures are contained here; only I/O errors
/// on the source itself propagate.
pub fn scan_shard<R: Read>(source: R, rank: u32, workers: u32) -> Result<Tally, io::Error> {
    let buff_reader = BufReader::new(source);
    let mut tally = Tally::new();

    for (line_index, line) in buff_reader.lines().enumerate() {
        let line = line?;

        // Every worker reads every line; unowned lines are skip-discarded.
        if !partition::owns(line_index, rank, workers) {
            continue;
        }

        match record::parse_line(&line) {
            ParseOutcome::Parsed(record) => {
                for tag in extract::hashtags(&record.text) {
                    tally.bump_hashtag(tag);
                }
                tally.bump_language(record.language_code);
            }
            ParseOutcome::BenignStructural => (),
            ParseOutcome::Unexpected(diagnostic) => {
                log::warn!(
                    "Worker {} skipped malformed line {}, cause: {}",
                    rank,
                    line_index,
                    diagnostic
                );
            }
        }
    }

    Ok(tally)
}
