//! Ownership and follow-through signals: named owners, deadlines, and
//! imperative next-step bullets.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::vocab::ACTION_VERBS;

static OWNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t*-]*(?:owner|owners|dri|lead|point\s+of\s+contact)[ \t]*[:\-]|\bowned\s+by\s+\w",
    )
    .unwrap()
});

static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bby\s+(?:end\s+of\s+|early\s+|mid\s+|late\s+)?(?:q[1-4]|january|february|march|april|may|june|july|august|september|october|november|december|monday|tuesday|wednesday|thursday|friday|next\s+week|next\s+month|next\s+quarter|eow|eom|eoy|\d{4})\b|\bdue\s+(?:by|on|date)\b|\bdeadline\b",
    )
    .unwrap()
});

static ACTION_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im)^[ \t]*[-*][ \t]+(?:{})\b",
        ACTION_VERBS.join("|")
    ))
    .unwrap()
});

/// Commitment scan result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitmentHits {
    pub owners: u32,
    pub deadlines: u32,
    pub action_items: u32,
}

pub fn scan_commitments(text: &str) -> CommitmentHits {
    CommitmentHits {
        owners: OWNER_RE.find_iter(text).count() as u32,
        deadlines: DEADLINE_RE.find_iter(text).count() as u32,
        action_items: ACTION_BULLET_RE.find_iter(text).count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_labels_and_owned_by_count() {
        let hits = scan_commitments("Owner: Dana\n- DRI: platform team\nThis work is owned by Sam.");
        assert_eq!(hits.owners, 3);
    }

    #[test]
    fn deadlines_are_detected() {
        let hits = scan_commitments("Ship by Q3. Final review due on Friday; hard deadline.");
        assert_eq!(hits.deadlines, 3);
    }

    #[test]
    fn imperative_bullets_count_as_action_items() {
        let text = "- Ship the beta\n- Interview five churned accounts\n- the plan\n* Measure adoption weekly";
        let hits = scan_commitments(text);
        assert_eq!(hits.action_items, 3);
    }

    #[test]
    fn prose_without_commitments_scans_to_zero() {
        let hits = scan_commitments("Someone should probably handle this at some point.");
        assert_eq!(hits.owners, 0);
        assert_eq!(hits.deadlines, 0);
        assert_eq!(hits.action_items, 0);
    }
}
