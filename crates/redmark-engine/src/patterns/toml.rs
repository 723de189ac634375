//! Declarative TOML pattern definitions, loadable without recompiling.
//!
//! Loaded rules extend the slop lexicon; the category must be one of the
//! built-in slop categories. Literal patterns are escaped and boundary
//! anchored like built-in phrases; regex patterns compile as written under
//! the size limit.

use std::path::Path;

use serde::Deserialize;

use redmark_core::PatternError;

use super::slop_lexicon::CATEGORIES;
use super::{bounded_literal, compile_rule_regex, PatternRule};

/// How a definition's `pattern` field is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Literal,
    Regex,
}

/// A TOML-defined pattern definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlPatternDef {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub kind: PatternKind,
    pub pattern: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_weight() -> u32 {
    1
}

/// A collection of TOML pattern definitions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPatternFile {
    #[serde(default)]
    pub patterns: Vec<TomlPatternDef>,
}

/// Loader for TOML pattern definitions.
pub struct TomlPatternLoader;

impl TomlPatternLoader {
    /// Load patterns from a TOML string.
    pub fn load_from_str(raw: &str) -> Result<Vec<PatternRule>, PatternError> {
        let file: TomlPatternFile = toml::from_str(raw).map_err(|e| PatternError::ParseFailed {
            reason: e.to_string(),
        })?;

        let mut rules = Vec::new();
        for def in file.patterns {
            if def.enabled == Some(false) {
                continue;
            }
            rules.push(Self::compile(def)?);
        }
        Ok(rules)
    }

    /// Load patterns from a file path.
    pub fn load_from_file(path: &Path) -> Result<Vec<PatternRule>, PatternError> {
        let content = std::fs::read_to_string(path).map_err(|e| PatternError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::load_from_str(&content)
    }

    /// Compile a single definition into a rule.
    fn compile(def: TomlPatternDef) -> Result<PatternRule, PatternError> {
        if def.id.trim().is_empty() {
            return Err(PatternError::InvalidPattern {
                id: "<unnamed>".to_string(),
                reason: "empty id".to_string(),
            });
        }
        if def.pattern.trim().is_empty() {
            return Err(PatternError::InvalidPattern {
                id: def.id,
                reason: "empty pattern".to_string(),
            });
        }
        if !CATEGORIES.contains(&def.category.as_str()) {
            return Err(PatternError::UnknownCategory {
                id: def.id,
                category: def.category,
            });
        }

        let regex = match def.kind {
            PatternKind::Literal => compile_rule_regex(&def.id, &bounded_literal(&def.pattern))?,
            PatternKind::Regex => compile_rule_regex(&def.id, &def.pattern)?,
        };

        Ok(PatternRule {
            id: def.id,
            category: def.category,
            regex,
            weight: def.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_rules_compile_with_boundaries() {
        let rules = TomlPatternLoader::load_from_str(
            r#"
[[patterns]]
id = "corp-verb"
category = "buzzword"
pattern = "operationalize"
"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].weight, 1);
        assert_eq!(rules[0].occurrences("We operationalize. Reoperationalized."), 1);
    }

    #[test]
    fn regex_rules_support_unicode_escapes() {
        let rules = TomlPatternLoader::load_from_str(
            r#"
[[patterns]]
id = "emoji-bullets"
category = "filler"
kind = "regex"
pattern = '(?m)^\s*[\u{2728}\u{1F680}]'
weight = 2
"#,
        )
        .unwrap();
        assert_eq!(rules[0].occurrences("✨ shiny\n🚀 launch\nplain"), 2);
        assert_eq!(rules[0].weight, 2);
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let rules = TomlPatternLoader::load_from_str(
            r#"
[[patterns]]
id = "off"
category = "buzzword"
pattern = "whatever"
enabled = false
"#,
        )
        .unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = TomlPatternLoader::load_from_str(
            r#"
[[patterns]]
id = "x"
category = "nonsense"
pattern = "word"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, PatternError::UnknownCategory { .. }));
    }

    #[test]
    fn bad_regex_is_rejected() {
        let err = TomlPatternLoader::load_from_str(
            r#"
[[patterns]]
id = "broken"
category = "buzzword"
kind = "regex"
pattern = "(unclosed"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, PatternError::CompileFailed { .. }));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = TomlPatternLoader::load_from_str("patterns = not toml").unwrap_err();
        assert!(matches!(err, PatternError::ParseFailed { .. }));
    }
}
