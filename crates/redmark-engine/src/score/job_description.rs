//! Job description rubric: structure, role clarity, specificity,
//! expectations, and inclusivity.

use std::sync::LazyLock;

use regex::Regex;

use redmark_core::models::{DimensionScore, Rubric};
use redmark_core::SlopPenaltyPolicy;

use crate::detect::{bullet_lines, extract_section, scan_metrics, SectionSpec};
use crate::patterns::vocab;
use crate::registry::DocumentPlugin;
use crate::score::{ladder, term_list, ScorerOutcome, ScorerSet, Tier};

pub const DOC_TYPE: &str = "job-description";

static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
    vec![
        SectionSpec::new(
            "about",
            "About",
            4,
            &["about", "about us", "about the role", "who we are", "the role"],
        ),
        SectionSpec::new(
            "responsibilities",
            "Responsibilities",
            5,
            &["responsibilities", "what you'll do", "what you will do", "your role", "duties"],
        ),
        SectionSpec::new(
            "qualifications",
            "Qualifications",
            5,
            &[
                "qualifications",
                "requirements",
                "what you'll bring",
                "what you will bring",
                "who you are",
                "skills",
            ],
        ),
        SectionSpec::new(
            "compensation",
            "Compensation",
            3,
            &["compensation", "salary", "pay", "benefits", "what we offer"],
        ),
        SectionSpec::new(
            "apply",
            "How to apply",
            3,
            &["how to apply", "apply", "application process", "next steps", "hiring process"],
        ),
    ]
});

// A stated pay range, e.g. "$160,000 - $195,000" or "£70k to £85k".
static PAY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[$€£]\s?\d[\d,]*(?:\.\d+)?\s*k?\s*(?:-|–|—|to)\s*[$€£]?\s?\d[\d,]*(?:\.\d+)?\s*k?\b",
    )
    .unwrap()
});

const METRIC_TIERS: [Tier; 3] = [
    Tier { min_count: 4, points: 12, message: "the role is grounded in concrete numbers" },
    Tier { min_count: 2, points: 8, message: "some concrete numbers ground the role" },
    Tier { min_count: 1, points: 4, message: "" },
];

const RESPONSIBILITY_TIERS: [Tier; 3] = [
    Tier { min_count: 5, points: 10, message: "responsibilities are spelled out" },
    Tier { min_count: 3, points: 7, message: "" },
    Tier { min_count: 1, points: 4, message: "" },
];

pub struct JobDescriptionScorer;

impl ScorerSet for JobDescriptionScorer {
    fn score_all(&self, text: &str) -> ScorerOutcome {
        let mut outcome = ScorerOutcome::new();
        outcome.push("structure", score_structure(text));
        outcome.push("role_clarity", score_role_clarity(text));
        outcome.push("specificity", score_specificity(text));
        outcome.push("expectations", score_expectations(text));
        outcome.push("inclusivity", score_inclusivity(text));
        outcome
    }
}

pub fn rubric() -> Rubric {
    Rubric::from_pairs(&[
        ("structure", 20),
        ("role_clarity", 25),
        ("specificity", 20),
        ("expectations", 20),
        ("inclusivity", 15),
    ])
}

pub fn plugin() -> DocumentPlugin {
    DocumentPlugin {
        id: DOC_TYPE.to_string(),
        name: "Job description".to_string(),
        rubric: rubric(),
        scorer: Box::new(JobDescriptionScorer),
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

/// Deductive: cliche titles and vague role phrases obscure the job.
fn score_role_clarity(text: &str) -> DimensionScore {
    let cliches = vocab::CLICHE_TITLES.scan(text);
    let vague = vocab::VAGUE_ROLE_PHRASES.scan(text);

    let mut dim = DimensionScore::zero(25);
    let cliche_cut = (cliches.total * 4).min(12);
    let vague_cut = (vague.total * 3).min(13);
    dim.score = dim.max_score.saturating_sub(cliche_cut + vague_cut);

    if cliches.total > 0 {
        dim.issues
            .push(format!("cliche titles obscure the role: {}", term_list(&cliches.distinct)));
    }
    if vague.total > 0 {
        dim.issues.push(format!(
            "vague phrasing hides the actual work: {}",
            term_list(&vague.distinct)
        ));
    }
    if dim.is_full() {
        dim.strengths.push("the role is described in plain terms".to_string());
    }
    dim
}

/// Concrete numbers about the work plus a stated pay range.
fn score_specificity(text: &str) -> DimensionScore {
    let metrics = scan_metrics(text);
    let mut dim = DimensionScore::zero(20);

    match ladder(metrics.count, &METRIC_TIERS) {
        Some(tier) => {
            dim.score += tier.points;
            if !tier.message.is_empty() {
                dim.strengths.push(tier.message.to_string());
            }
        }
        None => {
            dim.issues
                .push("no concrete numbers; state team size, scale, or targets".to_string());
        }
    }

    if PAY_RANGE_RE.is_match(text) {
        dim.score += 8;
        dim.strengths.push("a pay range is stated".to_string());
    } else {
        dim.issues.push("no pay range stated".to_string());
    }

    dim.score = dim.score.min(dim.max_score);
    dim
}

/// Bullet counts in the responsibilities and qualifications sections.
/// A qualifications laundry list scores worse than a focused one.
fn score_expectations(text: &str) -> DimensionScore {
    let mut dim = DimensionScore::zero(20);

    let resp_spec =
        SECTIONS.iter().find(|s| s.id == "responsibilities").expect("responsibilities spec");
    let resp_bullets = extract_section(text, resp_spec).map(|b| bullet_lines(&b)).unwrap_or(0);
    match ladder(resp_bullets, &RESPONSIBILITY_TIERS) {
        Some(tier) => {
            dim.score += tier.points;
            if !tier.message.is_empty() {
                dim.strengths.push(tier.message.to_string());
            }
        }
        None => {
            dim.issues.push("no responsibility list; say what the person will do".to_string());
        }
    }

    let qual_spec =
        SECTIONS.iter().find(|s| s.id == "qualifications").expect("qualifications spec");
    let qual_bullets = extract_section(text, qual_spec).map(|b| bullet_lines(&b)).unwrap_or(0);
    match qual_bullets {
        3..=8 => {
            dim.score += 10;
            dim.strengths.push("qualifications are focused".to_string());
        }
        n if n > 8 => {
            dim.score += 4;
            dim.issues.push(format!(
                "{n} qualification bullets read as a laundry list; keep the must-haves"
            ));
        }
        1 | 2 => {
            dim.score += 6;
            dim.issues.push("qualifications are thin; name the must-have skills".to_string());
        }
        _ => {
            dim.issues.push("no qualifications listed".to_string());
        }
    }

    dim.score = dim.score.min(dim.max_score);
    dim
}

/// Deductive: exclusionary language costs points.
fn score_inclusivity(text: &str) -> DimensionScore {
    let exclusionary = vocab::EXCLUSIONARY_TERMS.scan(text);
    let mut dim = DimensionScore::zero(15);
    dim.score = dim.max_score.saturating_sub((exclusionary.total * 3).min(15));
    if exclusionary.total > 0 {
        dim.issues.push(format!(
            "exclusionary language narrows the applicant pool: {}",
            term_list(&exclusionary.distinct)
        ));
    } else {
        dim.strengths.push("language is inclusive".to_string());
    }
    dim
}
