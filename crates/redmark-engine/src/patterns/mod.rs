//! Pattern library: named lexical matchers compiled once at startup.
//!
//! Phrase sets are literal vocabularies turned into case-insensitive,
//! word-boundary-anchored alternations. Declarative rules (TOML-defined)
//! compile under a size limit so pathological patterns are rejected at
//! load time. Everything here is immutable after construction.

pub mod slop_lexicon;
pub mod toml;
pub mod vocab;

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;

use redmark_core::PatternError;

/// Upper bound on a compiled pattern's size.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Raw hits from scanning one phrase set.
#[derive(Debug, Clone, Default)]
pub struct PhraseHits {
    /// Raw occurrence count, repeats included.
    pub total: u32,
    /// Distinct matched phrases, lowercased, in first-occurrence order.
    pub distinct: Vec<String>,
}

/// A named phrase vocabulary compiled into a single alternation.
///
/// Matching is case-insensitive. Word-boundary anchors are applied only on
/// edges that are word characters, so phrases like `certainly!` still
/// match.
#[derive(Debug)]
pub struct PhraseSet {
    pub name: &'static str,
    regex: Regex,
    len: usize,
}

impl PhraseSet {
    pub fn new(name: &'static str, phrases: &[&str]) -> Result<Self, PatternError> {
        if phrases.is_empty() {
            return Err(PatternError::EmptyPhraseSet {
                name: name.to_string(),
            });
        }
        let pattern = phrase_alternation(phrases);
        let regex = RegexBuilder::new(&pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| PatternError::CompileFailed {
                id: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name,
            regex,
            len: phrases.len(),
        })
    }

    /// Number of phrases in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts every occurrence and collects distinct matched phrases.
    pub fn scan(&self, text: &str) -> PhraseHits {
        let mut hits = PhraseHits::default();
        let mut seen = FxHashSet::default();
        for m in self.regex.find_iter(text) {
            hits.total += 1;
            let term = canonical_term(m.as_str());
            if seen.insert(term.clone()) {
                hits.distinct.push(term);
            }
        }
        hits
    }

    /// True when the set matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Lowercases and collapses internal whitespace so wrapped matches of the
/// same phrase dedup together.
fn canonical_term(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds `(?i)(?:p1|p2|...)` with longest phrases first so the alternation
/// prefers the longest match at a position.
fn phrase_alternation(phrases: &[&str]) -> String {
    let mut ordered: Vec<&str> = phrases.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alts: Vec<String> = ordered.iter().map(|p| bounded_literal(p)).collect();
    format!("(?i)(?:{})", alts.join("|"))
}

/// Escapes a literal phrase, anchoring word-character edges and letting
/// internal spaces match any whitespace run.
pub(crate) fn bounded_literal(phrase: &str) -> String {
    let escaped = regex::escape(phrase).replace(' ', r"\s+");
    let lead = phrase.chars().next().is_some_and(is_word_char);
    let trail = phrase.chars().next_back().is_some_and(is_word_char);
    match (lead, trail) {
        (true, true) => format!(r"\b{escaped}\b"),
        (true, false) => format!(r"\b{escaped}"),
        (false, true) => format!(r"{escaped}\b"),
        (false, false) => escaped,
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A single compiled matcher from a declarative definition.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub id: String,
    pub category: String,
    pub regex: Regex,
    /// Hit multiplier when the rule feeds a counted score.
    pub weight: u32,
}

impl PatternRule {
    pub fn occurrences(&self, text: &str) -> u32 {
        self.regex.find_iter(text).count() as u32
    }
}

/// Compiles a caller-supplied regex under the size limit.
pub fn compile_rule_regex(id: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::CompileFailed {
            id: id.to_string(),
            reason: e.to_string(),
        })
}
