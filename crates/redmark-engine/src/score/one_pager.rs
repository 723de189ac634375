//! One-pager rubric: structure, clarity, evidence, actionability, and
//! risk rigor. This is the default document type.

use std::sync::LazyLock;

use regex::Regex;

use redmark_core::models::{DimensionScore, Rubric};
use redmark_core::SlopPenaltyPolicy;

use crate::detect::{extract_section, scan_commitments, scan_metrics, sentences, SectionSpec};
use crate::detect::{CommitmentHits, MetricHits};
use crate::patterns::vocab;
use crate::registry::DocumentPlugin;
use crate::score::{ladder, term_list, ScorerOutcome, ScorerSet, Tier};

pub const DOC_TYPE: &str = "one-pager";

/// Total capped at this when the risk review is hollow or missing.
const HOLLOW_RISK_CAP: u32 = 50;

static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
    vec![
        SectionSpec::new(
            "problem",
            "Problem",
            5,
            &["problem", "problem statement", "background", "context"],
        ),
        SectionSpec::new("objective", "Objective", 4, &["objective", "objectives", "goal", "goals"]),
        SectionSpec::new(
            "approach",
            "Approach",
            4,
            &["approach", "solution", "proposal", "proposed solution", "recommendation"],
        ),
        SectionSpec::new(
            "impact",
            "Impact",
            4,
            &["impact", "expected impact", "success metrics", "outcomes", "results"],
        ),
        SectionSpec::new("risks", "Risks", 4, &["risk", "risks", "risk review", "open risks"]),
        SectionSpec::new(
            "timeline",
            "Timeline",
            4,
            &["timeline", "next steps", "milestones", "rollout"],
        ),
    ]
});

static RISK_STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:risks?|fails?|failure|downside|mitigat\w+|assumptions?|depends\s+on|dependenc\w+|blockers?|unknowns?|concerns?|threats?)\b",
    )
    .unwrap()
});

const EVIDENCE_TIERS: [Tier; 3] = [
    Tier { min_count: 5, points: 25, message: "five or more quantified data points back the argument" },
    Tier { min_count: 3, points: 16, message: "several quantified data points present" },
    Tier { min_count: 1, points: 8, message: "some quantified evidence present" },
];

const RISK_DEPTH_TIERS: [Tier; 2] = [
    Tier { min_count: 3, points: 10, message: "risk review names concrete failure modes" },
    Tier { min_count: 1, points: 5, message: "" },
];

pub struct OnePagerScorer;

impl ScorerSet for OnePagerScorer {
    fn score_all(&self, text: &str) -> ScorerOutcome {
        let metrics = scan_metrics(text);
        let commitments = scan_commitments(text);

        let mut outcome = ScorerOutcome::new();
        outcome.push("structure", score_structure(text));
        outcome.push("clarity", score_clarity(text));
        outcome.push("evidence", score_evidence(&metrics));
        outcome.push("actionability", score_actionability(&metrics, &commitments));

        let (risk, hollow) = score_risk_rigor(text);
        outcome.push("risk_rigor", risk);
        if hollow {
            outcome.cap(
                HOLLOW_RISK_CAP,
                format!("risk review is hollow or missing; total score capped at {HOLLOW_RISK_CAP}"),
            );
        }
        outcome
    }
}

pub fn rubric() -> Rubric {
    Rubric::from_pairs(&[
        ("structure", 25),
        ("clarity", 20),
        ("evidence", 25),
        ("actionability", 15),
        ("risk_rigor", 15),
    ])
}

pub fn plugin() -> DocumentPlugin {
    DocumentPlugin {
        id: DOC_TYPE.to_string(),
        name: "One-pager".to_string(),
        rubric: rubric(),
        scorer: Box::new(OnePagerScorer),
        slop_policy: SlopPenaltyPolicy::default(),
    }
}

/// Additive: fixed point blocks per required section.
fn score_structure(text: &str) -> DimensionScore {
    let mut dim = DimensionScore::zero(25);
    for spec in SECTIONS.iter() {
        if spec.is_present(text) {
            dim.score += spec.points;
        } else {
            dim.issues.push(format!("missing required section: {}", spec.label));
        }
    }
    dim.score = dim.score.min(dim.max_score);
    if dim.is_full() {
        dim.strengths.push("all required sections are present".to_string());
    }
    dim
}

/// Deductive: vague qualifiers and hedges cost points under per-class caps.
fn score_clarity(text: &str) -> DimensionScore {
    let vague = vocab::VAGUE_QUALIFIERS.scan(text);
    let hedging = vocab::HEDGING_PHRASES.scan(text);

    let mut dim = DimensionScore::zero(20);
    let vague_cut = (vague.total * 2).min(12);
    let hedge_cut = (hedging.total * 2).min(8);
    dim.score = dim.max_score.saturating_sub(vague_cut + hedge_cut);

    if vague.total > 0 {
        dim.issues.push(format!("vague language blurs the point: {}", term_list(&vague.distinct)));
    }
    if hedging.total > 0 {
        dim.issues.push(format!("hedged commitments: {}", term_list(&hedging.distinct)));
    }
    if vague.total == 0 && hedging.total == 0 {
        dim.strengths.push("language is direct and specific".to_string());
    }
    dim
}

/// Additive ladder on quantified data points.
fn score_evidence(metrics: &MetricHits) -> DimensionScore {
    let mut dim = DimensionScore::zero(25);
    match ladder(metrics.count, &EVIDENCE_TIERS) {
        Some(tier) => {
            dim.score = tier.points;
            dim.strengths.push(tier.message.to_string());
        }
        None => {
            dim.issues
                .push("no quantified evidence; add baselines, targets, or counts".to_string());
        }
    }
    if metrics.comparisons > 0 {
        dim.strengths.push("claims are framed against a baseline".to_string());
    }
    dim
}

/// Additive: owner, deadline, and concrete next-step bullets.
fn score_actionability(metrics: &MetricHits, commitments: &CommitmentHits) -> DimensionScore {
    let mut dim = DimensionScore::zero(15);

    if commitments.owners > 0 {
        dim.score += 5;
        dim.strengths.push("work has a named owner".to_string());
    } else {
        dim.issues.push("no owner is named".to_string());
    }

    if commitments.deadlines + metrics.dates > 0 {
        dim.score += 5;
        dim.strengths.push("dated commitments anchor the plan".to_string());
    } else {
        dim.issues.push("no dates or deadlines committed".to_string());
    }

    if commitments.action_items >= 3 {
        dim.score += 5;
    } else if commitments.action_items >= 1 {
        dim.score += 2;
        dim.issues.push("next steps are thin; list at least three concrete actions".to_string());
    } else {
        dim.issues.push("no actionable next steps listed".to_string());
    }

    dim.score = dim.score.min(dim.max_score);
    dim
}

/// Presence plus substantive depth of the risk review. The second return
/// is true when the review is hollow or missing, which caps the total.
fn score_risk_rigor(text: &str) -> (DimensionScore, bool) {
    let mut dim = DimensionScore::zero(15);
    let spec = SECTIONS.iter().find(|s| s.id == "risks").expect("risks spec");

    let Some(body) = extract_section(text, spec) else {
        dim.issues.push("no risk review section".to_string());
        return (dim, true);
    };

    dim.score += 5;
    // A dismissive phrase mentioning "risk" is not a named risk.
    let substantive = sentences(&body)
        .iter()
        .filter(|s| RISK_STATEMENT_RE.is_match(s) && !vocab::SOFTBALL_RISK_PHRASES.is_match(s))
        .count() as u32;
    let softball = vocab::SOFTBALL_RISK_PHRASES.scan(&body);

    match ladder(substantive, &RISK_DEPTH_TIERS) {
        Some(tier) if tier.points == 10 => {
            dim.score += tier.points;
            dim.strengths.push(tier.message.to_string());
        }
        Some(tier) => {
            dim.score += tier.points;
            dim.issues
                .push("risk review is thin; name more failure modes and mitigations".to_string());
        }
        None => {
            if softball.total > 0 {
                dim.issues
                    .push("risk review waves risks away without naming any".to_string());
            } else {
                dim.issues.push("risk review names no concrete risks".to_string());
            }
        }
    }

    dim.score = dim.score.min(dim.max_score);
    let hollow = substantive == 0;
    (dim, hollow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_DOC: &str = "\
# Retention plan

## Problem
Monthly churn climbed from 2.1% to 3.4% between January and June.
Exit surveys cite onboarding friction.

## Goals
Cut monthly churn to 2.5% by Q4 2025 without raising support load.

## Approach
Rebuild the first-run checklist and gate advanced panels behind progress.
Pilot with 500 users in two regions before rollout.

## Impact
A 0.9 point churn cut retains $1.8M in annual recurring revenue.

## Risks
The pilot cohort is a risk because power users hide friction.
If the checklist adds setup time, activation can fail to improve.
Mitigation: cap checklist steps at five and track time-to-first-value.

## Next steps
- Ship the checklist behind a flag
- Interview ten churned accounts by Friday
- Measure activation weekly

Owner: Dana";

    #[test]
    fn strong_doc_maxes_structure_and_clarity() {
        let outcome = OnePagerScorer.score_all(STRONG_DOC);
        let get = |name: &str| {
            outcome
                .dimensions
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, d)| d.clone())
                .unwrap()
        };
        assert_eq!(get("structure").score, 25);
        assert_eq!(get("clarity").score, 20);
        assert_eq!(get("evidence").score, 25);
        assert_eq!(get("actionability").score, 15);
        assert_eq!(get("risk_rigor").score, 15);
        assert!(outcome.caps.is_empty());
        assert_eq!(outcome.raw_total(), 100);
    }

    #[test]
    fn missing_sections_cost_structure_points() {
        let dim = score_structure("## Problem\nchurn\n\n## Goals\ncut churn");
        assert_eq!(dim.score, 9);
        assert_eq!(dim.issues.len(), 4);
    }

    #[test]
    fn vague_language_is_deducted_with_a_cap() {
        let text = "A robust seamless innovative world-class holistic turnkey synergy approach, very streamlined.";
        let dim = score_clarity(text);
        // Nine hits would cut 18; the class cap holds it at 12.
        assert_eq!(dim.score, 8);
        assert!(!dim.issues.is_empty());
    }

    #[test]
    fn missing_risk_section_is_hollow() {
        let (dim, hollow) = score_risk_rigor("## Problem\nstuff");
        assert_eq!(dim.score, 0);
        assert!(hollow);
    }

    #[test]
    fn softball_risk_section_is_hollow() {
        let text = "## Risks\nNo significant risks. We are confident.\n\n## Next steps\n- Ship it";
        let (dim, hollow) = score_risk_rigor(text);
        assert_eq!(dim.score, 5);
        assert!(hollow);
        assert!(dim.issues.iter().any(|i| i.contains("waves risks away")));
    }

    #[test]
    fn hollow_risk_review_caps_the_outcome() {
        let text = "## Problem\nChurn is 3.4% against a 2.5% target.\n\n## Risks\nAll good here.";
        let outcome = OnePagerScorer.score_all(text);
        assert_eq!(outcome.caps.len(), 1);
        assert_eq!(outcome.caps[0].limit, 50);
    }
}
