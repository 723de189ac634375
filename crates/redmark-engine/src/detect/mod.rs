//! Detectors: pure scans of normalized text into structured results.
//!
//! Every detector takes text and returns counts, booleans, and samples.
//! Empty input always produces an all-zero result, never an error.

pub mod boilerplate;
pub mod commitments;
pub mod metrics;
pub mod prompt;
pub mod sections;

pub use boilerplate::strip_boilerplate;
pub use commitments::{scan_commitments, CommitmentHits};
pub use metrics::{scan_metrics, MetricHits};
pub use prompt::{scan_prompt_signals, PromptScan};
pub use sections::{extract_section, scan_sections, SectionScan, SectionSpec};

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());

static BULLET_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*•]\s+\S").unwrap());

/// Trimmed, non-empty paragraphs of normalized text.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Sentences of normalized text, split within paragraphs on terminal
/// punctuation followed by whitespace. Decimal points do not split.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for paragraph in paragraphs(text) {
        for part in SENTENCE_BOUNDARY_RE.split(paragraph) {
            let part = part.trim();
            if part.split_whitespace().next().is_some() {
                out.push(part);
            }
        }
    }
    out
}

/// Lowercased word tokens; apostrophes stay inside words.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Number of bullet list lines.
pub fn bullet_lines(text: &str) -> u32 {
    BULLET_LINE_RE.find_iter(text).count() as u32
}
