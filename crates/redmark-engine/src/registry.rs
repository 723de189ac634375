//! Document-type registry: rubric, scorer, and slop policy per type.

use rustc_hash::FxHashMap;

use redmark_core::errors::RegistryError;
use redmark_core::models::Rubric;
use redmark_core::SlopPenaltyPolicy;

use crate::score::{job_description, one_pager, prd, ScorerSet};

/// One registered document type.
pub struct DocumentPlugin {
    pub id: String,
    pub name: String,
    pub rubric: Rubric,
    pub scorer: Box<dyn ScorerSet>,
    pub slop_policy: SlopPenaltyPolicy,
}

/// Plugin registry keyed by document-type id. Registration order is kept
/// for stable listings.
pub struct RubricRegistry {
    plugins: FxHashMap<String, DocumentPlugin>,
    order: Vec<String>,
    default_id: String,
}

impl RubricRegistry {
    pub fn new(default_id: impl Into<String>) -> Self {
        Self {
            plugins: FxHashMap::default(),
            order: Vec::new(),
            default_id: default_id.into(),
        }
    }

    /// Registry holding the built-in document types, with the one-pager
    /// as the default.
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new(one_pager::DOC_TYPE);
        // Built-in ids are statically distinct.
        for plugin in [one_pager::plugin(), prd::plugin(), job_description::plugin()] {
            registry.order.push(plugin.id.clone());
            registry.plugins.insert(plugin.id.clone(), plugin);
        }
        registry
    }

    /// Fails on a duplicate id so a misconfigured deployment dies at boot
    /// instead of silently shadowing a rubric.
    pub fn register(&mut self, plugin: DocumentPlugin) -> Result<(), RegistryError> {
        if self.plugins.contains_key(&plugin.id) {
            return Err(RegistryError::DuplicateDocumentType { id: plugin.id.clone() });
        }
        self.order.push(plugin.id.clone());
        self.plugins.insert(plugin.id.clone(), plugin);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&DocumentPlugin> {
        self.plugins.get(id)
    }

    pub fn default_plugin(&self) -> Option<&DocumentPlugin> {
        self.plugins.get(&self.default_id)
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Registered plugins in registration order.
    pub fn plugins(&self) -> impl Iterator<Item = &DocumentPlugin> {
        self.order.iter().filter_map(|id| self.plugins.get(id))
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
