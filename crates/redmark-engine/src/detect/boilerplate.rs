//! Exclusion zones: organization-mandated boilerplate is stripped before
//! any scanning so it neither earns nor costs points.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--\s*boilerplate:\s*(?:begin|start)\s*-->.*?<!--\s*boilerplate:\s*end\s*-->")
        .unwrap()
});

// An unterminated begin marker strips to end of input.
static OPEN_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!--\s*boilerplate:\s*(?:begin|start)\s*-->.*").unwrap());

/// Removes every `<!-- boilerplate:begin --> ... <!-- boilerplate:end -->`
/// region.
pub fn strip_boilerplate(text: &str) -> String {
    let pass = BLOCK_RE.replace_all(text, "\n");
    OPEN_BLOCK_RE.replace_all(&pass, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_regions_are_removed() {
        let text = "keep\n<!-- boilerplate:begin -->\nlegal text\n<!-- boilerplate:end -->\nalso keep";
        let out = strip_boilerplate(text);
        assert!(out.contains("keep"));
        assert!(out.contains("also keep"));
        assert!(!out.contains("legal text"));
    }

    #[test]
    fn multiple_regions_are_all_removed() {
        let text = "a <!-- boilerplate:begin -->x<!-- boilerplate:end --> b <!-- boilerplate:start -->y<!-- boilerplate:end --> c";
        let out = strip_boilerplate(text);
        assert!(!out.contains('x'));
        assert!(!out.contains('y'));
        assert!(out.contains('a') && out.contains('b') && out.contains('c'));
    }

    #[test]
    fn unterminated_marker_strips_to_end() {
        let out = strip_boilerplate("kept\n<!-- boilerplate:begin -->\ngone\ngone too");
        assert_eq!(out.trim_end(), "kept");
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        assert_eq!(strip_boilerplate("plain text"), "plain text");
    }
}
