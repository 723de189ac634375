//! PRD rubric: structure, testability, evidence, scope discipline,
//! user focus, and actionability.

use std::sync::LazyLock;

use regex::Regex;

use redmark_core::models::{DimensionScore, Rubric};
use redmark_core::SlopPenaltyPolicy;

use crate::detect::{extract_section, scan_commitments, scan_metrics, SectionSpec};
use crate::detect::{CommitmentHits, MetricHits};
use crate::patterns::vocab;
use crate::registry::DocumentPlugin;
use crate::score::{ladder, term_list, ScorerOutcome, ScorerSet, Tier};

pub const DOC_TYPE: &str = "prd";

/// Total capped at this when nothing is declared out of scope.
const UNBOUNDED_SCOPE_CAP: u32 = 70;

static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
    vec![
        SectionSpec::new(
            "overview",
            "Overview",
            4,
            &["overview", "summary", "background", "introduction"],
        ),
        SectionSpec::new(
            "requirements",
            "Requirements",
            4,
            &["requirements", "functional requirements", "features"],
        ),
        SectionSpec::new(
            "user_stories",
            "User stories",
            3,
            &["user stories", "use cases", "personas"],
        ),
        SectionSpec::new("scope", "Scope", 3, &["scope", "non-goals", "out of scope"]),
        SectionSpec::new(
            "metrics",
            "Success metrics",
            3,
            &["success metrics", "metrics", "success criteria", "kpis"],
        ),
        SectionSpec::new(
            "rollout",
            "Rollout",
            3,
            &["rollout", "launch plan", "release plan", "milestones", "timeline"],
        ),
    ]
});

static USER_STORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bas an? [^,\n]{2,40}, i (?:want|need|can|should)\b").unwrap());

const EVIDENCE_TIERS: [Tier; 3] = [
    Tier { min_count: 5, points: 15, message: "five or more quantified data points back the argument" },
    Tier { min_count: 3, points: 10, message: "several quantified data points present" },
    Tier { min_count: 1, points: 5, message: "some quantified evidence present" },
];

const USER_STORY_TIERS: [Tier; 3] = [
    Tier { min_count: 4, points: 15, message: "requirements are grounded in user stories" },
    Tier { min_count: 2, points: 10, message: "user stories cover the core flows" },
    Tier { min_count: 1, points: 5, message: "" },
];

pub struct PrdScorer;

impl ScorerSet for PrdScorer {
    fn score_all(&self, text: &str) -> ScorerOutcome {
        let metrics = scan_metrics(text);
        let commitments = scan_commitments(text);

        let mut outcome = ScorerOutcome::new();
        outcome.push("structure", score_structure(text));
        outcome.push("testability", score_testability(text));
        outcome.push("evidence", score_evidence(&metrics));

        let (scope, unbounded) = score_scope_discipline(text);
        outcome.push("scope_discipline", scope);
        outcome.push("user_focus", score_user_focus(text));
        outcome.push("actionability", score_actionability(&commitments));

        if unbounded {
            outcome.cap(
                UNBOUNDED_SCOPE_CAP,
                format!("no scope boundary declared; total score capped at {UNBOUNDED_SCOPE_CAP}"),
            );
        }
        outcome
    }
}

pub fn rubric() -> Rubric {
    Rubric::from_pairs(&[
        ("structure", 20),
        ("testability", 25),
        ("evidence", 15),
        ("scope_discipline", 15),
        ("user_focus", 15),
        ("actionability", 10),
    ])
}

pub fn plugin() -> DocumentPlugin {
    DocumentPlugin {
        id: DOC_TYPE.to_string(),
        name: "Product requirements document".to_string(),
        rubric: rubric(),
        scorer: Box::new(PrdScorer),
        slop_policy: SlopPenaltyPolicy::default(),
    }
}

fn score_structure(text: &str) -> DimensionScore {
    let mut dim = DimensionScore::zero(20);
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

/// Deductive over the requirements section body, or the whole document
/// when no requirements section exists.
fn score_testability(text: &str) -> DimensionScore {
    let spec = SECTIONS.iter().find(|s| s.id == "requirements").expect("requirements spec");
    let body = extract_section(text, spec).unwrap_or_else(|| text.to_string());

    let untestable = vocab::UNTESTABLE_TERMS.scan(&body);
    let quantifiers = vocab::VAGUE_QUANTIFIERS.scan(&body);

    let mut dim = DimensionScore::zero(25);
    let untestable_cut = (untestable.total * 3).min(15);
    let quantifier_cut = (quantifiers.total * 2).min(10);
    dim.score = dim.max_score.saturating_sub(untestable_cut + quantifier_cut);

    if untestable.total > 0 {
        dim.issues.push(format!(
            "untestable adjectives in requirements: {}",
            term_list(&untestable.distinct)
        ));
    }
    if quantifiers.total > 0 {
        dim.issues.push(format!(
            "vague quantifiers leave acceptance open: {}",
            term_list(&quantifiers.distinct)
        ));
    }
    if dim.is_full() {
        dim.strengths.push("requirements read as verifiable".to_string());
    }
    dim
}

fn score_evidence(metrics: &MetricHits) -> DimensionScore {
    let mut dim = DimensionScore::zero(15);
    match ladder(metrics.count, &EVIDENCE_TIERS) {
        Some(tier) => {
            dim.score = tier.points;
            dim.strengths.push(tier.message.to_string());
        }
        None => {
            dim.issues.push("no quantified evidence; add baselines or targets".to_string());
        }
    }
    dim
}

/// Scope section plus explicit boundary statements. The second return is
/// true when neither exists, which caps the total.
fn score_scope_discipline(text: &str) -> (DimensionScore, bool) {
    let spec = SECTIONS.iter().find(|s| s.id == "scope").expect("scope spec");
    let has_section = spec.is_present(text);
    let boundary = vocab::BOUNDARY_PHRASES.scan(text);

    let mut dim = DimensionScore::zero(15);
    if has_section {
        dim.score += 8;
    } else {
        dim.issues.push("no scope or non-goals section".to_string());
    }
    if boundary.total >= 2 {
        dim.score += 7;
    } else if boundary.total == 1 {
        dim.score += 4;
    } else {
        dim.issues.push("nothing is declared out of scope".to_string());
    }
    if dim.is_full() {
        dim.strengths.push("scope boundaries are explicit".to_string());
    }

    dim.score = dim.score.min(dim.max_score);
    let unbounded = !has_section && boundary.total == 0;
    (dim, unbounded)
}

fn score_user_focus(text: &str) -> DimensionScore {
    let stories = USER_STORY_RE.find_iter(text).count() as u32;
    let mut dim = DimensionScore::zero(15);
    match ladder(stories, &USER_STORY_TIERS) {
        Some(tier) => {
            dim.score = tier.points;
            if !tier.message.is_empty() {
                dim.strengths.push(tier.message.to_string());
            }
        }
        None => {
            dim.issues.push("no user stories; frame requirements as user needs".to_string());
        }
    }
    dim
}

fn score_actionability(commitments: &CommitmentHits) -> DimensionScore {
    let mut dim = DimensionScore::zero(10);
    if commitments.owners > 0 {
        dim.score += 5;
    } else {
        dim.issues.push("no owner is named".to_string());
    }
    if commitments.deadlines > 0 {
        dim.score += 5;
    } else {
        dim.issues.push("no dates or deadlines committed".to_string());
    }
    dim
}
