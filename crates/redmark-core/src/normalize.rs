//! Markdown to plain text normalization.
//!
//! All scanning runs on normalized text: code fences and HTML are removed,
//! inline markup is unwrapped to its visible text, and heading lines are
//! preserved verbatim so section detection can anchor on them.

use std::sync::LazyLock;

use regex::Regex;

static HTML_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>\n]*>").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());

static REF_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[[^\]]*\]").unwrap());

static STRONG_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());

static STRONG_UNDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_\n]+)__").unwrap());

static EMPH_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

// Boundary guards keep snake_case identifiers intact.
static EMPH_UNDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_([^_\n]+)_\b").unwrap());

static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~\n]+)~~").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]*)`").unwrap());

static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s{0,3}>\s?").unwrap());

static HRULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:-{3,}|\*{3,}|_{3,})\s*$").unwrap());

static TRAILING_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

// Literal multi-word matchers rely on single spaces between words.
static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

static MULTI_BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Fenced code blocks are dropped entirely. An unterminated fence drops
/// everything after it.
fn strip_code_fences(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_fence = false;
    for line in input.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Reduces markdown to the plain text a reader would see.
///
/// Heading lines keep their `#` markers and bullet lines keep their list
/// markers; detectors anchor on both.
pub fn markdown_to_text(input: &str) -> String {
    let text = strip_code_fences(input);
    let text = HTML_COMMENT_RE.replace_all(&text, "");
    let text = HTML_TAG_RE.replace_all(&text, "");
    let text = IMAGE_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = REF_LINK_RE.replace_all(&text, "$1");
    let text = STRONG_STAR_RE.replace_all(&text, "$1");
    let text = STRONG_UNDER_RE.replace_all(&text, "$1");
    let text = EMPH_STAR_RE.replace_all(&text, "$1");
    let text = EMPH_UNDER_RE.replace_all(&text, "$1");
    let text = STRIKE_RE.replace_all(&text, "$1");
    let text = INLINE_CODE_RE.replace_all(&text, "$1");
    let text = BLOCKQUOTE_RE.replace_all(&text, "");
    let text = HRULE_RE.replace_all(&text, "");
    let text = TRAILING_WS_RE.replace_all(&text, "");
    let text = MULTI_SPACE_RE.replace_all(&text, " ");
    let text = MULTI_BLANK_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}
