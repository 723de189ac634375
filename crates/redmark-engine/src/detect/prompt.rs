//! Prompt-misuse detection: recognizes input that is a prompt template
//! rather than a document.
//!
//! Four independent signal categories are scanned; the aggregator treats
//! three or more distinct categories as decisive. Runs on raw text, before
//! markdown normalization, because placeholder and tag syntax would not
//! survive it.

use std::sync::LazyLock;

use regex::Regex;

static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:you\s+are\s+an?\s|act\s+as\s+an?\s|your\s+(?:task|job|role)\s+is\s+to\s|assume\s+the\s+role\s+of\s|you\s+will\s+act\s+as\b|as\s+an\s+ai\b)",
    )
    .unwrap()
});

// Unresolved template slots. Bracketed forms use the uppercase convention
// so prose in brackets does not fire.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{\{[^{}\n]{1,60}\}\}|\[(?:INSERT|YOUR|TODO|TBD|PLACEHOLDER|COMPANY|NAME|DATE|ROLE)[^\]\n]{0,40}\]|<(?:INSERT|YOUR|PLACEHOLDER)[^>\n]{0,40}>",
    )
    .unwrap()
});

static INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*#{0,6}[ \t]*(?:critical[ \t]+|important[ \t]+)?(?:instructions?|system[ \t]+prompt|output[ \t]+format|response[ \t]+format|rules)[ \t]*:?[ \t]*$|(?-i:^[ \t]*(?:IMPORTANT|CRITICAL)[ \t]*:)",
    )
    .unwrap()
});

static OUTPUT_RULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:respond\s+only\s+with|reply\s+only\s+with|do\s+not\s+include|do\s+not\s+mention|format\s+your\s+(?:response|output)|your\s+(?:response|output)\s+(?:must|should)|output\s+(?:must|should)\s+be|return\s+only\s+(?:json|markdown|yaml|xml)|in\s+your\s+response\b)|</?(?:output|answer|response|instructions|system)>",
    )
    .unwrap()
});

/// Prompt-signal scan result.
#[derive(Debug, Clone, Default)]
pub struct PromptScan {
    /// Distinct matched signal categories.
    pub categories: Vec<&'static str>,
    /// One sample per matched category, truncated.
    pub samples: Vec<String>,
}

impl PromptScan {
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

const SAMPLE_LEN: usize = 60;

pub fn scan_prompt_signals(text: &str) -> PromptScan {
    let checks: [(&'static str, &LazyLock<Regex>); 4] = [
        ("role assignment", &ROLE_RE),
        ("unresolved placeholders", &PLACEHOLDER_RE),
        ("instruction headers", &INSTRUCTION_RE),
        ("output rules", &OUTPUT_RULE_RE),
    ];

    let mut scan = PromptScan::default();
    for (category, re) in checks {
        if let Some(m) = re.find(text) {
            scan.categories.push(category);
            let sample: String = m.as_str().chars().take(SAMPLE_LEN).collect();
            scan.samples.push(sample.trim().to_string());
        }
    }
    scan
}
