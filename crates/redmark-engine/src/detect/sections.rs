//! Section detection: heading-shaped lines matched against named specs.
//!
//! A heading is a line holding one of the section's label forms with at
//! most a few trailing words: an ATX heading, a numbered item, or a bare
//! or colon-terminated label line. Prose mentioning the label mid-sentence
//! does not count.

use std::sync::LazyLock;

use regex::Regex;

// A section body ends at the next ATX heading or short capitalized
// colon-terminated label line.
static NEXT_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:#{1,6}\s|[A-Z][A-Za-z /&-]{2,40}:\s*$)").unwrap());

/// A named document section recognized by its heading forms.
pub struct SectionSpec {
    pub id: &'static str,
    pub label: &'static str,
    /// Points granted by structure scorers when the section is present.
    pub points: u32,
    heading_re: Regex,
}

impl SectionSpec {
    pub fn new(id: &'static str, label: &'static str, points: u32, alternates: &[&str]) -> Self {
        let alts: Vec<String> = alternates
            .iter()
            .map(|a| regex::escape(a).replace(' ', r"[ \t]+"))
            .collect();
        // Heading forms never wrap; all whitespace here stays on one line.
        let pattern = format!(
            r"(?im)^(?:#{{1,6}}[ \t]*)?(?:\d+[.)][ \t]+)?(?:{})(?:[ \t]+[\w&/'-]+){{0,3}}[ \t]*:?[ \t]*$",
            alts.join("|")
        );
        Self {
            id,
            label,
            points,
            heading_re: Regex::new(&pattern).expect("section heading pattern"),
        }
    }

    /// True when any heading form of this section appears.
    pub fn is_present(&self, text: &str) -> bool {
        self.heading_re.is_match(text)
    }

    fn heading_span(&self, text: &str) -> Option<(usize, usize)> {
        self.heading_re.find(text).map(|m| (m.start(), m.end()))
    }
}

/// Presence scan result over a spec list.
pub struct SectionScan<'a> {
    pub found: Vec<&'a SectionSpec>,
    pub missing: Vec<&'a SectionSpec>,
}

impl SectionScan<'_> {
    pub fn found_points(&self) -> u32 {
        self.found.iter().map(|s| s.points).sum()
    }
}

pub fn scan_sections<'a>(text: &str, specs: &'a [SectionSpec]) -> SectionScan<'a> {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for spec in specs {
        if spec.is_present(text) {
            found.push(spec);
        } else {
            missing.push(spec);
        }
    }
    SectionScan { found, missing }
}

/// Text between this section's heading line and the next heading line.
/// `None` when the section is absent.
pub fn extract_section(text: &str, spec: &SectionSpec) -> Option<String> {
    let (_, heading_end) = spec.heading_span(text)?;
    let after = &text[heading_end..];
    let body_end = NEXT_HEADING_RE
        .find(after)
        .map(|m| m.start())
        .unwrap_or(after.len());
    Some(after[..body_end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk_spec() -> SectionSpec {
        SectionSpec::new("risks", "Risks", 4, &["risk", "risks", "risk review"])
    }

    #[test]
    fn heading_forms_are_recognized() {
        let spec = risk_spec();
        assert!(spec.is_present("## Risks"));
        assert!(spec.is_present("### Risk Review"));
        assert!(spec.is_present("Risks:"));
        assert!(spec.is_present("3) Risks and mitigations"));
        assert!(spec.is_present("intro\nRisks\nbody"));
    }

    #[test]
    fn prose_mentions_do_not_count() {
        let spec = risk_spec();
        assert!(!spec.is_present("The risks are considerable and multiply over time."));
        assert!(!spec.is_present("We accept risk when the payoff justifies it."));
    }

    #[test]
    fn scan_partitions_found_and_missing() {
        let specs = vec![
            risk_spec(),
            SectionSpec::new("timeline", "Timeline", 4, &["timeline", "next steps"]),
        ];
        let scan = scan_sections("## Risks\n\nstuff", &specs);
        assert_eq!(scan.found.len(), 1);
        assert_eq!(scan.missing.len(), 1);
        assert_eq!(scan.found[0].id, "risks");
        assert_eq!(scan.found_points(), 4);
    }

    #[test]
    fn extract_returns_body_up_to_next_heading() {
        let spec = risk_spec();
        let text = "## Risks\nThe cache may lag.\nMitigation: add a fallback.\n\n## Timeline\nlater";
        let body = extract_section(text, &spec).unwrap();
        assert!(body.contains("cache may lag"));
        assert!(!body.contains("later"));
    }

    #[test]
    fn extract_handles_heading_at_end_of_text() {
        let spec = risk_spec();
        assert_eq!(extract_section("intro\n## Risks", &spec).unwrap(), "");
        assert!(extract_section("no such section", &spec).is_none());
    }
}
