//! Built-in vocabularies used by the dimension scorers.
//!
//! Each set compiles on first use. Lists are deliberately conservative:
//! a term belongs here only when its presence is a defect in the scored
//! document type, not merely informal style.

use std::sync::LazyLock;

use super::PhraseSet;

macro_rules! phrase_set {
    ($static_name:ident, $name:literal, [$($phrase:literal),+ $(,)?]) => {
        pub static $static_name: LazyLock<PhraseSet> =
            LazyLock::new(|| PhraseSet::new($name, &[$($phrase),+]).expect("built-in phrase set"));
    };
}

// ── Clarity (one-pager) ────────────────────────────────────────────────────

phrase_set!(
    VAGUE_QUALIFIERS,
    "vague_qualifiers",
    [
        "significant",
        "significantly",
        "substantial",
        "substantially",
        "considerable",
        "various",
        "numerous",
        "a number of",
        "a variety of",
        "world-class",
        "best-in-class",
        "industry-leading",
        "state-of-the-art",
        "cutting-edge",
        "next-generation",
        "game-changing",
        "revolutionary",
        "innovative",
        "robust",
        "seamless",
        "streamlined",
        "holistic",
        "synergy",
        "turnkey",
        "mission-critical",
        "very",
        "extremely",
        "highly",
        "incredibly",
    ]
);

phrase_set!(
    HEDGING_PHRASES,
    "hedging_phrases",
    [
        "might",
        "could potentially",
        "potentially",
        "possibly",
        "we hope",
        "we believe",
        "we think",
        "it seems",
        "seemingly",
        "probably",
        "should be able to",
        "aim to",
        "attempt to",
        "try to",
    ]
);

// ── Testability (PRD) ──────────────────────────────────────────────────────

phrase_set!(
    UNTESTABLE_TERMS,
    "untestable_terms",
    [
        "user-friendly",
        "intuitive",
        "easy to use",
        "simple",
        "fast",
        "quick",
        "performant",
        "responsive",
        "reliable",
        "flexible",
        "scalable",
        "efficient",
        "smooth",
        "modern",
        "clean",
        "elegant",
        "lightweight",
        "snappy",
    ]
);

phrase_set!(
    VAGUE_QUANTIFIERS,
    "vague_quantifiers",
    [
        "as needed",
        "where appropriate",
        "when necessary",
        "if possible",
        "reasonable",
        "appropriate",
        "adequate",
        "sufficient",
        "acceptable",
        "etc",
        "and so on",
        "as required",
        "to be determined",
        "tbd",
    ]
);

// ── Scope discipline (PRD) ─────────────────────────────────────────────────

phrase_set!(
    BOUNDARY_PHRASES,
    "boundary_phrases",
    [
        "out of scope",
        "not in scope",
        "non-goal",
        "non-goals",
        "we will not",
        "will not support",
        "will not include",
        "not included",
        "explicitly excluded",
        "excluded from",
        "deferred",
        "future work",
        "later phase",
        "phase two",
        "follow-up release",
    ]
);

// ── Role clarity (job description) ─────────────────────────────────────────

phrase_set!(
    CLICHE_TITLES,
    "cliche_titles",
    [
        "rockstar",
        "rock star",
        "ninja",
        "guru",
        "wizard",
        "superstar",
        "unicorn",
        "jedi",
        "10x engineer",
        "10x developer",
        "code warrior",
        "growth hacker",
        "evangelist",
    ]
);

phrase_set!(
    VAGUE_ROLE_PHRASES,
    "vague_role_phrases",
    [
        "wear many hats",
        "other duties as assigned",
        "fast-paced environment",
        "self-starter",
        "go-getter",
        "hit the ground running",
        "team player",
        "work hard play hard",
        "whatever it takes",
        "roll up your sleeves",
        "dynamic environment",
        "ever-changing",
    ]
);

// ── Inclusivity (job description) ──────────────────────────────────────────

phrase_set!(
    EXCLUSIONARY_TERMS,
    "exclusionary_terms",
    [
        "young and energetic",
        "recent graduates only",
        "digital native",
        "culture fit",
        "aggressive",
        "dominant",
        "competitive drive",
        "manpower",
        "chairman",
        "salesman",
        "he will",
        "she will",
        "able-bodied",
        "native english speaker",
    ]
);

// ── Risk rigor (one-pager) ─────────────────────────────────────────────────

phrase_set!(
    SOFTBALL_RISK_PHRASES,
    "softball_risk_phrases",
    [
        "no significant risks",
        "no real risks",
        "no major risks",
        "no known risks",
        "no risks anticipated",
        "no risks expected",
        "nothing major",
        "low risk overall",
        "minimal risk",
        "we are confident",
        "should be straightforward",
        "unlikely to fail",
        "no blockers",
        "risk-free",
    ]
);

/// Imperative verbs that open a concrete next-step bullet.
pub static ACTION_VERBS: &[&str] = &[
    "ship",
    "launch",
    "build",
    "write",
    "draft",
    "review",
    "measure",
    "interview",
    "validate",
    "schedule",
    "hire",
    "define",
    "run",
    "create",
    "publish",
    "migrate",
    "prototype",
    "test",
    "collect",
    "analyze",
    "finalize",
    "align",
    "staff",
    "scope",
    "instrument",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_compile_and_match() {
        assert!(VAGUE_QUALIFIERS.is_match("a robust plan"));
        assert!(HEDGING_PHRASES.is_match("we hope this works"));
        assert!(UNTESTABLE_TERMS.is_match("must be user-friendly"));
        assert!(VAGUE_QUANTIFIERS.is_match("retry as needed"));
        assert!(BOUNDARY_PHRASES.is_match("billing is out of scope"));
        assert!(CLICHE_TITLES.is_match("seeking a rockstar"));
        assert!(VAGUE_ROLE_PHRASES.is_match("you will wear many hats"));
        assert!(EXCLUSIONARY_TERMS.is_match("looking for a digital native"));
        assert!(SOFTBALL_RISK_PHRASES.is_match("minimal risk here"));
    }

    #[test]
    fn hedging_does_not_flag_the_month_of_may() {
        assert!(!HEDGING_PHRASES.is_match("Launch on May 15."));
    }

    #[test]
    fn qualifier_substrings_do_not_count() {
        // "innovative" must not fire inside "uninnovative" styled words.
        let hits = VAGUE_QUALIFIERS.scan("reinnovativeness is not a word");
        assert_eq!(hits.total, 0);
    }
}
