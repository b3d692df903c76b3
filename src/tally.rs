//! Per-worker frequency maps and their merge.

use std::collections::HashMap;

pub type FrequencyMap = HashMap<String, u64>;

/// The two distributions a worker accumulates over its shard. Mutated only by
/// its owning worker during the scan, then handed to the coordinator by value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tally {
    pub hashtags: FrequencyMap,
    pub languages: FrequencyMap,
}

impl Tally {
    pub fn new() -> Tally {
        Tally::default()
    }

    pub fn bump_hashtag(&mut self, tag: String) {
        *self.hashtags.entry(tag).or_insert(0) += 1;
    }

    pub fn bump_language(&mut self, code: String) {
        *self.languages.entry(code).or_insert(0) += 1;
    }

    /// Key-wise integer summation. Associative and commutative, so the gather
    /// order across workers does not affect the merged result.
    pub fn absorb(&mut self, other: Tally) {
        for (tag, count) in other.hashtags {
            *self.hashtags.entry(tag).or_insert(0) += count;
        }
        for (code, count) in other.languages {
            *self.languages.entry(code).or_insert(0) += count;
        }
    }
}
