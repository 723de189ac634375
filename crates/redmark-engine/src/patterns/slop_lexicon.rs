//! Shared slop vocabulary, compiled into one Aho-Corasick automaton so the
//! full lexicon (~120 phrases across six categories) is matched in a single
//! pass over the text.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

use super::is_word_char;

/// Slop categories a pattern may belong to, in reporting order.
pub const CATEGORIES: [&str; 6] = [
    "intensifier",
    "buzzword",
    "filler",
    "hedging",
    "sycophancy",
    "transition",
];

// ── Generic intensifiers ───────────────────────────────────────────────────

static INTENSIFIERS: &[&str] = &[
    "truly",
    "deeply",
    "genuinely",
    "remarkably",
    "profoundly",
    "undeniably",
    "undoubtedly",
    "exceptionally",
    "immensely",
    "extraordinarily",
    "utterly",
    "unquestionably",
];

// ── Buzzwords ──────────────────────────────────────────────────────────────

static BUZZWORDS: &[&str] = &[
    "delve",
    "delves",
    "delving",
    "tapestry",
    "landscape",
    "ecosystem",
    "paradigm",
    "leverage",
    "leveraging",
    "synergy",
    "elevate",
    "empower",
    "empowering",
    "harness",
    "harnessing",
    "unlock",
    "unlocking",
    "supercharge",
    "revolutionize",
    "game-changer",
    "transformative",
    "groundbreaking",
    "cutting-edge",
    "seamlessly",
    "effortlessly",
    "holistic",
    "robust",
    "innovative",
    "state-of-the-art",
    "best practices",
    "streamline",
    "journey",
    "realm",
    "navigate",
    "navigating",
    "foster",
    "fostering",
    "pivotal",
    "crucial",
    "myriad",
    "plethora",
];

// ── Filler phrases ─────────────────────────────────────────────────────────

static FILLER: &[&str] = &[
    "it's worth noting that",
    "it is worth noting that",
    "it's important to note",
    "it is important to note",
    "it is important to understand",
    "at the end of the day",
    "when it comes to",
    "in today's fast-paced world",
    "in today's digital age",
    "in the ever-evolving",
    "needless to say",
    "all things considered",
    "the fact of the matter",
    "as we all know",
    "in order to",
    "first and foremost",
    "last but not least",
    "without further ado",
    "at its core",
    "in essence",
    "essentially",
];

// ── Hedging ────────────────────────────────────────────────────────────────

static HEDGING: &[&str] = &[
    "arguably",
    "perhaps",
    "it could be said",
    "some might argue",
    "some may argue",
    "to some extent",
    "in many ways",
    "more often than not",
    "generally speaking",
    "broadly speaking",
    "in most cases",
    "tends to",
    "one could argue",
];

// ── Sycophancy ─────────────────────────────────────────────────────────────

static SYCOPHANCY: &[&str] = &[
    "great question",
    "that's a great",
    "i'd be happy to",
    "i would be happy to",
    "i hope this helps",
    "hope this helps",
    "feel free to",
    "don't hesitate to",
    "absolutely!",
    "certainly!",
    "of course!",
    "as an ai",
    "as a language model",
    "let me know if you",
];

// ── Transitional filler ────────────────────────────────────────────────────

static TRANSITIONS: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "in addition to this",
    "consequently",
    "as such",
    "with that said",
    "that being said",
    "having said that",
    "in conclusion",
    "in summary",
    "to summarize",
    "to sum up",
];

/// One lexicon match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconHit {
    pub category: &'static str,
    pub phrase: &'static str,
}

/// The full slop vocabulary behind a single automaton.
pub struct SlopLexicon {
    automaton: AhoCorasick,
    /// Automaton pattern index to (category, phrase).
    entries: Vec<(&'static str, &'static str)>,
}

static LEXICON: LazyLock<SlopLexicon> = LazyLock::new(SlopLexicon::build);

/// Shared lexicon instance.
pub fn lexicon() -> &'static SlopLexicon {
    &LEXICON
}

impl SlopLexicon {
    fn build() -> Self {
        let groups: [(&str, &[&str]); 6] = [
            ("intensifier", INTENSIFIERS),
            ("buzzword", BUZZWORDS),
            ("filler", FILLER),
            ("hedging", HEDGING),
            ("sycophancy", SYCOPHANCY),
            ("transition", TRANSITIONS),
        ];
        let mut entries = Vec::new();
        for (category, phrases) in groups {
            for phrase in phrases {
                entries.push((category, *phrase));
            }
        }
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(entries.iter().map(|(_, p)| *p))
            .expect("slop lexicon automaton");
        Self { automaton, entries }
    }

    /// Phrases in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single pass over `text`; matches are word-boundary checked on edges
    /// that are word characters.
    pub fn scan(&self, text: &str) -> Vec<LexiconHit> {
        let mut hits = Vec::new();
        for m in self.automaton.find_iter(text) {
            let (category, phrase) = self.entries[m.pattern().as_usize()];
            if !edges_are_clean(text, m.start(), m.end(), phrase) {
                continue;
            }
            hits.push(LexiconHit { category, phrase });
        }
        hits
    }
}

/// Rejects matches embedded in longer words.
fn edges_are_clean(text: &str, start: usize, end: usize, phrase: &str) -> bool {
    if phrase.chars().next().is_some_and(is_word_char) {
        if let Some(prev) = text[..start].chars().next_back() {
            if is_word_char(prev) {
                return false;
            }
        }
    }
    if phrase.chars().next_back().is_some_and(is_word_char) {
        if let Some(next) = text[end..].chars().next() {
            if is_word_char(next) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_spans_all_categories() {
        let lex = lexicon();
        assert!(lex.len() > 100);
        let text = "Truly delve in. Needless to say, perhaps. Great question! Furthermore.";
        let hits = lex.scan(text);
        let cats: Vec<&str> = hits.iter().map(|h| h.category).collect();
        for cat in ["intensifier", "buzzword", "filler", "hedging", "sycophancy", "transition"] {
            assert!(cats.contains(&cat), "missing {cat} in {cats:?}");
        }
    }

    #[test]
    fn matches_are_case_insensitive_and_boundary_checked() {
        let lex = lexicon();
        assert_eq!(lex.scan("DELVE Delve delve").len(), 3);
        // "delves" inside "delvesome" must not fire; standalone "delves" does.
        assert_eq!(lex.scan("delvesome").len(), 0);
        assert_eq!(lex.scan("she delves deep").len(), 1);
    }

    #[test]
    fn longest_phrase_wins() {
        let lex = lexicon();
        // "it is important to note" is filler; the bare word "note" is not
        // in the lexicon, so exactly one hit lands.
        let hits = lex.scan("it is important to note this");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "filler");
    }

    #[test]
    fn empty_text_yields_no_hits() {
        assert!(lexicon().scan("").is_empty());
    }
}
