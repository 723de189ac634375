//! The scoring engine: pipeline from raw text to a validation report.
//!
//! Stages: truncate, strip boilerplate, scan for prompt-shaped input,
//! normalize markup away, run the document type's scorers, run slop
//! analysis, then combine into one bounded total.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use redmark_core::config::EngineConfig;
use redmark_core::constants::{PROMPT_SIGNAL_THRESHOLD, TOTAL_RUBRIC_POINTS};
use redmark_core::errors::{EngineError, EngineResult};
use redmark_core::models::{SlopSeverity, ValidationReport};
use redmark_core::normalize::markdown_to_text;

use crate::detect::{scan_prompt_signals, strip_boilerplate};
use crate::registry::{DocumentPlugin, RubricRegistry};
use crate::slop::SlopAnalyzer;

pub struct ScoringEngine {
    registry: RubricRegistry,
    slop: SlopAnalyzer,
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(registry: RubricRegistry) -> Self {
        Self {
            registry,
            slop: SlopAnalyzer::new(),
            config: EngineConfig::default(),
        }
    }

    /// Engine with the built-in document types registered.
    pub fn with_builtin_types() -> Self {
        Self::new(RubricRegistry::with_builtin_types())
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_slop_analyzer(mut self, slop: SlopAnalyzer) -> Self {
        self.slop = slop;
        self
    }

    pub fn registry(&self) -> &RubricRegistry {
        &self.registry
    }

    /// Scores one document. `doc_type` of `None` selects the default type.
    pub fn validate(&self, text: &str, doc_type: Option<&str>) -> EngineResult<ValidationReport> {
        let plugin = self.resolve(doc_type)?;
        Ok(self.run(plugin, text))
    }

    /// Scores many documents of one type in parallel. Report order matches
    /// input order.
    pub fn validate_batch(
        &self,
        texts: &[&str],
        doc_type: Option<&str>,
    ) -> EngineResult<Vec<ValidationReport>> {
        let plugin = self.resolve(doc_type)?;
        Ok(texts.par_iter().map(|text| self.run(plugin, text)).collect())
    }

    fn resolve(&self, doc_type: Option<&str>) -> EngineResult<&DocumentPlugin> {
        match doc_type {
            Some(id) => self
                .registry
                .get(id)
                .ok_or_else(|| EngineError::UnknownDocumentType { id: id.to_string() }),
            None => self.registry.default_plugin().ok_or_else(|| {
                EngineError::UnknownDocumentType {
                    id: self.registry.default_id().to_string(),
                }
            }),
        }
    }

    fn run(&self, plugin: &DocumentPlugin, text: &str) -> ValidationReport {
        if text.trim().is_empty() {
            let mut report = ValidationReport::zeroed(&plugin.id, &plugin.rubric);
            report.issues.push("document is empty".to_string());
            return report;
        }

        let (text, truncated) = truncate_chars(text, self.config.max_input_chars);
        let raw = strip_boilerplate(text);

        // The prompt scan runs before normalization: template braces and
        // angle-bracket tags would not survive it.
        let prompt = scan_prompt_signals(&raw);
        if prompt.category_count() >= PROMPT_SIGNAL_THRESHOLD {
            info!(
                doc_type = %plugin.id,
                categories = ?prompt.categories,
                "prompt-shaped input rejected"
            );
            let mut report = ValidationReport::zeroed(&plugin.id, &plugin.rubric);
            report.prompt_detected = true;
            report.issues.push(format!(
                "input looks like an ai prompt, not a document ({})",
                prompt.categories.join(", ")
            ));
            return report;
        }

        let normalized = markdown_to_text(&raw);
        if normalized.is_empty() {
            let mut report = ValidationReport::zeroed(&plugin.id, &plugin.rubric);
            report.issues.push("document is empty after markup removal".to_string());
            return report;
        }

        let outcome = plugin.scorer.score_all(&normalized);
        let slop = self.slop.analyze(&normalized, &plugin.slop_policy);

        let mut total = outcome.raw_total().saturating_sub(slop.penalty);
        for cap in &outcome.caps {
            total = total.min(cap.limit);
        }
        total = total.min(TOTAL_RUBRIC_POINTS);

        let mut report = ValidationReport::zeroed(&plugin.id, &plugin.rubric);
        report.total_score = total;
        report.slop = slop;

        for (name, dim) in outcome.dimensions {
            report.issues.extend(dim.issues.iter().cloned());
            report.strengths.extend(dim.strengths.iter().cloned());
            report.dimensions.insert(name, dim);
        }
        for cap in &outcome.caps {
            report.issues.push(cap.reason.clone());
        }
        if report.slop.severity >= SlopSeverity::Moderate {
            report.issues.push(format!(
                "{} generic-text markers detected (slop score {})",
                report.slop.severity.label(),
                report.slop.score
            ));
        }
        if truncated {
            report.issues.push(format!(
                "input truncated to {} characters before scoring",
                self.config.max_input_chars
            ));
        }
        dedup_in_place(&mut report.issues);
        dedup_in_place(&mut report.strengths);

        debug!(
            doc_type = %plugin.id,
            total = report.total_score,
            slop = report.slop.score,
            penalty = report.slop.penalty,
            "scored document"
        );
        report
    }
}

/// Truncates on a character boundary.
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => (&text[..byte], true),
        None => (text, false),
    }
}

/// Removes later duplicates, keeping first-occurrence order.
fn dedup_in_place(items: &mut Vec<String>) {
    let mut seen = FxHashSet::default();
    items.retain(|item| seen.insert(item.clone()));
}
