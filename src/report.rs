//! Top-K selection and report rendering. Coordinator only.

use log;

use crate::catalog::LanguageCatalog;
use crate::tally::{FrequencyMap, Tally};

pub const TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

/// The highest-count entries of a merged map, count descending. Equal counts
/// are ordered by key so the ranking is reproducible across runs and pool
/// sizes.
pub fn top_k(map: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = map
        .iter()
        .map(|(key, &count)| RankedEntry {
            key: key.clone(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(k);

    ranked
}

/// Render both ranked sections, 1-indexed, blank line between them.
pub fn render(global: &Tally, catalog: &LanguageCatalog) -> String {
    let mut out = String::new();

    out.push_str("Top 10 Hashtags Are:\n");
    for (position, entry) in top_k(&global.hashtags, TOP_K).iter().enumerate() {
        out.push_str(&format!("{}. {}, {}\n", position + 1, entry.key, entry.count));
    }

    out.push('\n');

    out.push_str("Top 10 Languages Used Are:\n");
    for (position, entry) in top_k(&global.languages, TOP_K).iter().enumerate() {
        let name = match catalog.display_name(&entry.key) {
            Some(name) => name,
            None => {
                log::warn!("No display name for language code {}", entry.key);
                "Unknown"
            }
        };

        out.push_str(&format!(
            "{}. {}({}), {}\n",
            position + 1,
            name,
            entry.key,
            entry.count
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, u64)]) -> FrequencyMap {
        pairs
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_top_k_orders_by_count_then_key() {
        let map = map_of(&[("#b", 3), ("#d", 1), ("#a", 3), ("#c", 2)]);

        let keys: Vec<_> = top_k(&map, 10).into_iter().map(|e| e.key).collect();

        assert_eq!(keys, vec!["#a", "#b", "#c", "#d"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let map = map_of(&[("#a", 5), ("#b", 4), ("#c", 3)]);

        let ranked = top_k(&map, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "#a");
        assert_eq!(ranked[1].key, "#b");
    }

    #[test]
    fn test_render_both_sections() {
        let mut global = Tally::new();
        global.hashtags = map_of(&[("#world", 2), ("#monde", 1)]);
        global.languages = map_of(&[("en", 1), ("fr", 1)]);

        let report = render(&global, &LanguageCatalog::builtin());

        let expect = "Top 10 Hashtags Are:\n\
                      1. #world, 2\n\
                      2. #monde, 1\n\
                      \n\
                      Top 10 Languages Used Are:\n\
                      1. English(en), 1\n\
                      2. French(fr), 1\n";

        assert_eq!(report, expect);
    }

    #[test]
    fn test_unknown_code_renders_sentinel() {
        let mut global = Tally::new();
        global.languages = map_of(&[("zz", 7)]);

        let report = render(&global, &LanguageCatalog::builtin());

        assert!(report.contains("1. Unknown(zz), 7"));
    }
}
