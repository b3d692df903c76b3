//! Hashtag extraction and normalization.
//!
//! The language code needs no extraction step, it is read straight off the
//! record; hashtags are pulled from the free-form tweet text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A run of word characters or apostrophes, or one sentence punctuation
    // mark. The first match inside a lower-cased `#` token is the tag body.
    static ref TOKEN_RUN: Regex = Regex::new(r"[\w']+|[.,!?;]").unwrap();
}

/// All normalized hashtags in a tweet text, duplicates included.
pub fn hashtags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.starts_with('#'))
        .filter_map(normalize)
        .collect()
}

/// Lower-case the token and keep its leading extractable run, `#`-prefixed.
/// A bare `#` has nothing to extract and yields no hashtag.
pub fn normalize(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();

    TOKEN_RUN
        .find(&lowered)
        .map(|body| format!("#{}", body.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding_and_trailing_punctuation() {
        let tags = hashtags("Hello #World #world!");

        assert_eq!(tags, vec!["#world", "#world"]);
    }

    #[test]
    fn test_non_hashtag_tokens_ignored() {
        assert!(hashtags("no tags here, none at all").is_empty());
    }

    #[test]
    fn test_bare_hash_skipped() {
        assert!(hashtags("lonely # mark").is_empty());
        assert_eq!(normalize("#"), None);
    }

    #[test]
    fn test_apostrophe_kept_in_run() {
        assert_eq!(normalize("#can't?"), Some("#can't".to_string()));
    }

    #[test]
    fn test_punctuation_only_tag() {
        assert_eq!(normalize("#!"), Some("#!".to_string()));
    }

    #[test]
    fn test_normalization_idempotent() {
        for token in &["#world", "#can't", "#!", "#2020"] {
            let once = normalize(token).unwrap();
            let twice = normalize(&once).unwrap();

            assert_eq!(once, twice);
        }
    }
}
