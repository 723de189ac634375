//! Quantified-evidence detection: percentages, money, multipliers, counts
//! with units, dates, and baseline-versus-target comparisons.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:%|percent\b)").unwrap());

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[$€£]\s?\d[\d,]*(?:\.\d+)?\s*(?:k|m|bn|b|thousand|million|billion)?\b")
        .unwrap()
});

static MULTIPLIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?x\b").unwrap());

static COUNT_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d[\d,]*\+?\s*(?:users?|customers?|clients?|accounts?|requests?|sessions?|tickets?|incidents?|engineers?|people|teams?|hours?|days?|weeks?|months?|years?|ms|milliseconds?|seconds?|minutes?|qps|rps|points?|downloads?|installs?|sign-?ups?|reports?|documents?)\b",
    )
    .unwrap()
});

// Bare month names never match; a day-of-month must follow, so the word
// "may" stays a verb.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:q[1-4]\s*(?:'\d{2}|\d{4})?|\d{4}-\d{2}-\d{2}|(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s*\d{4})?)\b",
    )
    .unwrap()
});

static COMPARISON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:from\s+\S{1,12}\s+to\s+\S{1,12}|vs\.?\s|versus\s|compared\s+(?:to|with)\s|baseline\b|target\s+of\b)",
    )
    .unwrap()
});

/// Quantified-evidence scan result.
#[derive(Debug, Clone, Default)]
pub struct MetricHits {
    /// Numeric data points (percentages, money, multipliers, counted units).
    pub count: u32,
    /// Date or quarter references.
    pub dates: u32,
    /// Baseline-versus-target phrasings.
    pub comparisons: u32,
    /// Deduplicated matched samples in document order, capped.
    pub samples: Vec<String>,
}

const MAX_SAMPLES: usize = 8;

pub fn scan_metrics(text: &str) -> MetricHits {
    let mut hits = MetricHits::default();
    let mut seen = FxHashSet::default();

    let numeric: [&Regex; 4] = [&PERCENT_RE, &CURRENCY_RE, &MULTIPLIER_RE, &COUNT_UNIT_RE];
    for re in numeric {
        for m in re.find_iter(text) {
            hits.count += 1;
            let sample = m.as_str().trim().to_string();
            if seen.insert(sample.to_lowercase()) && hits.samples.len() < MAX_SAMPLES {
                hits.samples.push(sample);
            }
        }
    }

    hits.dates = DATE_RE.find_iter(text).count() as u32;
    hits.comparisons = COMPARISON_RE.find_iter(text).count() as u32;
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_numeric_class_counts() {
        let hits = scan_metrics("Churn fell 12%. Spend is $1.2M. Throughput rose 3x across 40,000 users.");
        assert_eq!(hits.count, 4);
        assert_eq!(hits.samples.len(), 4);
    }

    #[test]
    fn dates_and_quarters_are_separate_from_numerics() {
        let hits = scan_metrics("Ship by Q3 2025, review on 2025-09-01, then Jan 15.");
        assert_eq!(hits.dates, 3);
        assert_eq!(hits.count, 0);
    }

    #[test]
    fn bare_may_is_not_a_date() {
        let hits = scan_metrics("This may help in May 2026? We may retry.");
        // "May 2026" lacks a day-of-month and bare "may" is a verb.
        assert_eq!(hits.dates, 0);
    }

    #[test]
    fn comparisons_are_detected() {
        let hits = scan_metrics("Latency went from 420ms to 180ms versus the old baseline.");
        assert!(hits.comparisons >= 2);
    }

    #[test]
    fn repeated_metrics_count_but_dedup_in_samples() {
        let hits = scan_metrics("12% then 12% again");
        assert_eq!(hits.count, 2);
        assert_eq!(hits.samples, vec!["12%"]);
    }

    #[test]
    fn plain_prose_has_no_metrics() {
        let hits = scan_metrics("We should improve the experience a lot.");
        assert_eq!(hits.count, 0);
        assert_eq!(hits.dates, 0);
    }
}
