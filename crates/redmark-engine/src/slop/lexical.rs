//! Lexical slop: stock phrases counted against the built-in lexicon,
//! plus any operator-supplied patterns, plus em-dash density.

use rustc_hash::FxHashMap;

use redmark_core::constants::{LEXICAL_HIT_WEIGHT, LEXICAL_SCORE_CAP};
use redmark_core::models::LexicalSignals;

use crate::patterns::slop_lexicon::lexicon;
use crate::patterns::PatternRule;

const TOP_PATTERNS: usize = 5;

pub fn analyze_lexical(text: &str, extra: &[PatternRule]) -> LexicalSignals {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();

    for hit in lexicon().scan(text) {
        *counts.entry(hit.phrase.to_string()).or_insert(0) += 1;
    }
    for rule in extra {
        let n = rule.occurrences(text);
        if n > 0 {
            *counts.entry(rule.id.clone()).or_insert(0) += n * rule.weight;
        }
    }

    let pattern_hits: u32 = counts.values().sum();
    let em_dashes = text.matches('\u{2014}').count() as u32;

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_PATTERNS);

    let raw = pattern_hits * LEXICAL_HIT_WEIGHT + em_dashes;
    LexicalSignals {
        score: raw.min(LEXICAL_SCORE_CAP),
        pattern_hits,
        em_dashes,
        top_patterns: ranked.into_iter().map(|(p, _)| p).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_scores_zero() {
        let s = analyze_lexical("Churn fell 0.9 points after the checklist shipped.", &[]);
        assert_eq!(s.score, 0);
        assert_eq!(s.pattern_hits, 0);
        assert!(s.top_patterns.is_empty());
    }

    #[test]
    fn hits_weigh_double_and_em_dashes_add_one() {
        let s = analyze_lexical(
            "We delve into the tapestry of options \u{2014} a game-changer.",
            &[],
        );
        assert_eq!(s.pattern_hits, 3);
        assert_eq!(s.em_dashes, 1);
        assert_eq!(s.score, 7);
    }

    #[test]
    fn score_is_capped() {
        let s = analyze_lexical(&"furthermore, we delve into it. ".repeat(30), &[]);
        assert_eq!(s.score, LEXICAL_SCORE_CAP);
        assert!(s.pattern_hits >= 60);
    }

    #[test]
    fn top_patterns_rank_by_count_then_name() {
        let s = analyze_lexical("delve delve delve leverage leverage robust", &[]);
        assert_eq!(s.top_patterns[0], "delve");
        assert_eq!(s.top_patterns[1], "leverage");
    }

    #[test]
    fn extra_rules_add_weighted_occurrences() {
        let rule = PatternRule {
            id: "house-style".to_string(),
            category: "buzzword".to_string(),
            regex: regex::Regex::new(r"(?i)\bnorth star\b").unwrap(),
            weight: 3,
        };
        let s = analyze_lexical("Our north star informs the north star metric.", &[rule]);
        assert_eq!(s.pattern_hits, 6);
        assert_eq!(s.score, 12);
        assert_eq!(s.top_patterns, vec!["house-style".to_string()]);
    }
}
