//! Structural slop: document-shape anti-patterns. Each detected
//! anti-pattern adds a fixed weight toward the structural cap.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use redmark_core::constants::{STRUCTURAL_HIT_WEIGHT, STRUCTURAL_SCORE_CAP};
use redmark_core::models::StructuralSignals;

use crate::detect::paragraphs;

// Short paragraphs (heading lines, one-word bullets) are exempt from the
// duplicate and opener checks.
const MIN_PARAGRAPH_CHARS: usize = 30;

static LABEL_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[-*\u{2022}][ \t]+[^:\n]{2,40}:").unwrap());

static HEADING_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+\S").unwrap());

static TRIAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w'-]+, [\w'-]+, and [\w'-]+\b").unwrap());

static CLOSER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:in conclusion|in summary|to summarize|to sum up|overall,)").unwrap()
});

const TRIAD_THRESHOLD: usize = 3;

// A terse but legitimate document runs 15-25 words per heading; only
// outright markdown skeletons sit below this.
const MIN_WORDS_PER_HEADING: usize = 15;

pub fn analyze_structural(text: &str) -> StructuralSignals {
    let mut signals = StructuralSignals::default();
    let paras = paragraphs(text);

    duplicated_paragraphs(&paras, &mut signals);
    uniform_openers(&paras, &mut signals);
    label_bullet_runs(text, &mut signals);
    stacked_closers(&paras, &mut signals);
    heading_spam(text, &mut signals);
    comma_triads(text, &mut signals);

    signals.score = (signals.anti_patterns * STRUCTURAL_HIT_WEIGHT).min(STRUCTURAL_SCORE_CAP);
    signals
}

/// Near-identical paragraphs after case and whitespace folding. A group
/// of k copies counts k-1 times.
fn duplicated_paragraphs(paras: &[&str], signals: &mut StructuralSignals) {
    let mut groups: FxHashMap<String, u32> = FxHashMap::default();
    for p in paras {
        let canon = canonical(p);
        if canon.len() < MIN_PARAGRAPH_CHARS {
            continue;
        }
        *groups.entry(canon).or_insert(0) += 1;
    }
    for (_, count) in groups {
        if count > 1 {
            signals.anti_patterns += count - 1;
            signals.indicators.push(format!("paragraph repeated {count} times"));
        }
    }
    signals.indicators.sort();
}

/// Three or more paragraphs opening with the same three words. Exact
/// copies count here too, stacking with the duplication check.
fn uniform_openers(paras: &[&str], signals: &mut StructuralSignals) {
    let mut stems: FxHashMap<String, u32> = FxHashMap::default();
    for p in paras {
        if p.len() < MIN_PARAGRAPH_CHARS {
            continue;
        }
        let stem: Vec<String> =
            p.split_whitespace().take(3).map(str::to_lowercase).collect();
        if stem.len() == 3 {
            *stems.entry(stem.join(" ")).or_insert(0) += 1;
        }
    }
    let mut flagged: Vec<(String, u32)> =
        stems.into_iter().filter(|(_, n)| *n >= 3).collect();
    flagged.sort();
    for (stem, n) in flagged {
        signals.anti_patterns += 1;
        signals.indicators.push(format!("{n} paragraphs open with \"{stem}\""));
    }
}

/// Runs of four or more consecutive "- Label: text" bullets.
fn label_bullet_runs(text: &str, signals: &mut StructuralSignals) {
    let mut run = 0u32;
    let mut runs = 0u32;
    for line in text.lines().chain(std::iter::once("")) {
        if LABEL_BULLET_RE.is_match(line) {
            run += 1;
        } else {
            if run >= 4 {
                runs += 1;
            }
            run = 0;
        }
    }
    if runs > 0 {
        signals.anti_patterns += runs;
        signals.indicators.push(format!("{runs} formulaic label-bullet runs"));
    }
}

/// More than one paragraph opening with a stock wrap-up phrase.
fn stacked_closers(paras: &[&str], signals: &mut StructuralSignals) {
    let closers = paras.iter().filter(|p| CLOSER_RE.is_match(p)).count();
    if closers >= 2 {
        signals.anti_patterns += 1;
        signals.indicators.push(format!("{closers} wrap-up closers"));
    }
}

/// Many headings over little prose.
fn heading_spam(text: &str, signals: &mut StructuralSignals) {
    let headings = HEADING_LINE_RE.find_iter(text).count();
    if headings >= 5 {
        let word_count = text.split_whitespace().count();
        if word_count / headings < MIN_WORDS_PER_HEADING {
            signals.anti_patterns += 1;
            signals
                .indicators
                .push(format!("{headings} headings over {word_count} words"));
        }
    }
}

/// Repeated "x, y, and z" constructions.
fn comma_triads(text: &str, signals: &mut StructuralSignals) {
    let triads = TRIAD_RE.find_iter(text).count();
    if triads >= TRIAD_THRESHOLD {
        signals.anti_patterns += 1;
        signals.indicators.push(format!("{triads} comma triads"));
    }
}

fn canonical(p: &str) -> String {
    p.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
