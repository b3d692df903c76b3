//! Tolerant line parsing.
//!
//! The source file renders one large JSON array with one element per line:
//! every record line carries a trailing `,` before the newline, the last one
//! the closing `]`. Lines are trimmed down to the bare object before decoding.

use serde::Deserialize;

/// One successfully decoded tweet, reduced to the two fields the pipeline uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub language_code: String,
    pub text: String,
}

/// Tagged outcome of parsing one line. Per-line failures never abort a worker.
#[derive(Debug)]
pub enum ParseOutcome {
    Parsed(Record),
    /// The line held only array-boundary punctuation. Expected, silent.
    BenignStructural,
    /// Any other decode failure. The caller logs it and skips the line.
    Unexpected(serde_json::Error),
}

#[derive(Deserialize)]
struct RawLine {
    doc: RawDoc,
}

#[derive(Deserialize)]
struct RawDoc {
    text: String,
    metadata: RawMetadata,
}

#[derive(Deserialize)]
struct RawMetadata {
    iso_language_code: String,
}

pub fn parse_line(line: &str) -> ParseOutcome {
    let payload = strip_structural_suffix(line);

    if payload.trim().chars().all(|c| c == '[' || c == ']') {
        return ParseOutcome::BenignStructural;
    }

    match serde_json::from_str::<RawLine>(payload) {
        Ok(raw) => ParseOutcome::Parsed(Record {
            language_code: raw.doc.metadata.iso_language_code,
            text: raw.doc.text,
        }),
        Err(error) => ParseOutcome::Unexpected(error),
    }
}

/// Drop the trailing list separator, or the final character (the closing
/// bracket on the last line) when there is none. The newline is already gone
/// by the time the line reader hands the line over.
fn strip_structural_suffix(line: &str) -> &str {
    match line.strip_suffix(',') {
        Some(rest) => rest,
        None => {
            let mut chars = line.chars();
            chars.next_back();
            chars.as_str()
        }
    }
}
