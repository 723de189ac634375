//! Stylometric slop: distribution-shape flags. Uniform sentence lengths
//! and flat windowed vocabulary diversity each add a fixed flag score.
//!
//! Both measures stay `None` below their minimum sample sizes so short
//! documents are never flagged on noise.

use rustc_hash::FxHashSet;
use statrs::statistics::Statistics;

use redmark_core::config::StylometricConfig;
use redmark_core::constants::STYLOMETRIC_FLAG_POINTS;
use redmark_core::models::StylometricSignals;

use crate::detect::{sentences, words};

pub fn analyze_stylometric(text: &str, cfg: &StylometricConfig) -> StylometricSignals {
    let mut signals = StylometricSignals::default();

    let lens: Vec<f64> = sentences(text)
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();
    if lens.len() >= cfg.min_sentences {
        let sd = lens.iter().std_dev();
        if sd.is_finite() {
            signals.sentence_stddev = Some(sd);
            if sd < cfg.sentence_stddev_floor {
                signals.uniform_sentences = true;
                signals.score += STYLOMETRIC_FLAG_POINTS;
            }
        }
    }

    let tokens = words(text);
    if tokens.len() >= cfg.min_words && cfg.ttr_window > 0 {
        let window = cfg.ttr_window.min(tokens.len());
        let step = (window / 2).max(1);
        let mut ratios = Vec::new();
        let mut start = 0;
        while start + window <= tokens.len() {
            let slice = &tokens[start..start + window];
            let distinct: FxHashSet<&str> = slice.iter().map(String::as_str).collect();
            ratios.push(distinct.len() as f64 / window as f64);
            start += step;
        }
        if !ratios.is_empty() {
            let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
            signals.mean_ttr = Some(mean);
            if mean < cfg.ttr_floor {
                signals.repetitive_vocabulary = true;
                signals.score += STYLOMETRIC_FLAG_POINTS;
            }
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StylometricConfig {
        StylometricConfig::default()
    }

    #[test]
    fn short_input_is_never_flagged() {
        let s = analyze_stylometric("Too short to judge.", &cfg());
        assert_eq!(s.score, 0);
        assert!(s.sentence_stddev.is_none());
        assert!(s.mean_ttr.is_none());
    }

    #[test]
    fn uniform_sentence_lengths_flag() {
        let text = "The red fox jumps over fences. \
            A blue crab walks along shores. \
            Every tall tree bends with wind. \
            Some old roads curve past farms. \
            That young bird sings at dawn. \
            One small boat drifts near docks. \
            Each round stone rests in mud. \
            Our gray cat sleeps through storms.";
        let s = analyze_stylometric(text, &cfg());
        assert!(s.uniform_sentences);
        assert_eq!(s.sentence_stddev, Some(0.0));
        assert_eq!(s.score, STYLOMETRIC_FLAG_POINTS);
        // Under a hundred words, so diversity is not judged.
        assert!(s.mean_ttr.is_none());
    }

    #[test]
    fn varied_sentence_lengths_do_not_flag() {
        let mut text = String::new();
        for (i, n) in [2usize, 14, 3, 18, 5, 12, 2, 20].iter().enumerate() {
            let sentence =
                (0..*n).map(|j| format!("w{i}x{j}")).collect::<Vec<_>>().join(" ");
            text.push_str(&sentence);
            text.push_str(". ");
        }
        let s = analyze_stylometric(&text, &cfg());
        assert!(!s.uniform_sentences);
        assert!(s.sentence_stddev.unwrap() > 4.0);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn repetitive_vocabulary_flags() {
        let text = "the quick brown fox jumps over the lazy dog again. ".repeat(12);
        let s = analyze_stylometric(&text, &cfg());
        assert!(s.repetitive_vocabulary);
        assert!(s.mean_ttr.unwrap() < 0.45);
        // Identical sentences also flag uniform length.
        assert!(s.uniform_sentences);
        assert_eq!(s.score, 2 * STYLOMETRIC_FLAG_POINTS);
    }

    #[test]
    fn diverse_long_text_is_clean() {
        let mut text = String::new();
        let mut word = 0usize;
        for round in 0..2 {
            for n in [3usize, 9, 15, 6, 21, 4, 11, 26] {
                let sentence = (0..n)
                    .map(|_| {
                        word += 1;
                        format!("tok{word}r{round}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                text.push_str(&sentence);
                text.push_str(". ");
            }
        }
        let s = analyze_stylometric(&text, &cfg());
        assert_eq!(s.score, 0);
        assert!(s.mean_ttr.unwrap() > 0.9);
        assert!(!s.uniform_sentences);
        assert!(!s.repetitive_vocabulary);
    }
}
