//! Tool registry storage

use std::collections::HashMap;

use super::{ToolCategory, ToolRegistration};
use crate::{Error, Result};

/// Central registry of tool registrations, keyed by id.
///
/// Provides lookup by id, filtering by category, and keyword search.
/// Construction has no side effects; the declared-tool scan in
/// [`super::scan`] is the only thing that reads the filesystem.
pub struct ToolRegistry {
    tools: HashMap<String, ToolRegistration>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            // Builtin ids are disjoint by construction
            let _ = registry.register(reg);
        }
        registry
    }

    /// Register a tool. The first registration of an id wins; a duplicate
    /// is rejected so one scan can never shadow a builtin or an earlier
    /// declaration.
    pub fn register(&mut self, reg: ToolRegistration) -> Result<()> {
        let id = reg.id();
        if self.tools.contains_key(&id) {
            return Err(Error::DuplicateTool { id });
        }
        self.tools.insert(id, reg);
        Ok(())
    }

    /// Get a registration by id.
    pub fn get(&self, id: &str) -> Option<&ToolRegistration> {
        self.tools.get(id)
    }

    /// Check if a tool is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All registered ids (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Registrations in one category, sorted by slug.
    pub fn by_category(&self, category: ToolCategory) -> Vec<&ToolRegistration> {
        let mut tools: Vec<_> = self
            .tools
            .values()
            .filter(|r| r.category == category)
            .collect();
        tools.sort_unstable_by(|a, b| a.slug.cmp(&b.slug));
        tools
    }

    /// Categories that have at least one registration, in menu order.
    pub fn categories(&self) -> Vec<ToolCategory> {
        ToolCategory::ALL
            .into_iter()
            .filter(|c| self.tools.values().any(|r| r.category == *c))
            .collect()
    }

    /// Case-insensitive keyword search over id, name and description,
    /// sorted by id.
    pub fn search(&self, keyword: &str) -> Vec<&ToolRegistration> {
        let needle = keyword.to_lowercase();
        let mut hits: Vec<_> = self
            .tools
            .iter()
            .filter(|(id, r)| {
                id.to_lowercase().contains(&needle)
                    || r.name.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .map(|(_, r)| r)
            .collect();
        hits.sort_unstable_by_key(|r| r.id());
        hits
    }

    /// Iterate over all registrations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolRegistration> {
        self.tools.values()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BuiltinTool, EntryPoint};
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_reg(category: ToolCategory, slug: &str) -> ToolRegistration {
        ToolRegistration::new(
            category,
            slug,
            slug.to_uppercase(),
            format!("The {slug} tool"),
            EntryPoint::Builtin(BuiltinTool::FileInfo),
        )
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.categories().is_empty());
    }

    #[test]
    fn register_and_get() {
        let mut registry = ToolRegistry::new();
        registry
            .register(make_reg(ToolCategory::Text, "analyze"))
            .unwrap();

        assert!(!registry.is_empty());
        assert!(registry.contains("text.analyze"));
        assert!(registry.get("text.analyze").is_some());
        assert!(!registry.contains("text.convert"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        let first = make_reg(ToolCategory::Text, "analyze");
        let mut second = make_reg(ToolCategory::Text, "analyze");
        second.name = "Impostor".to_string();

        registry.register(first).unwrap();
        let err = registry.register(second).unwrap_err();

        assert!(matches!(err, Error::DuplicateTool { id } if id == "text.analyze"));
        // First registration wins
        assert_eq!(registry.get("text.analyze").unwrap().name, "ANALYZE");
    }

    #[test]
    fn list_is_sorted() {
        let mut registry = ToolRegistry::new();
        registry
            .register(make_reg(ToolCategory::Text, "convert"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::File, "info"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::Text, "analyze"))
            .unwrap();

        assert_eq!(
            registry.list(),
            vec!["file.info", "text.analyze", "text.convert"]
        );
    }

    #[test]
    fn by_category_filters_and_sorts() {
        let mut registry = ToolRegistry::new();
        registry
            .register(make_reg(ToolCategory::Text, "convert"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::Text, "analyze"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::File, "info"))
            .unwrap();

        let texts = registry.by_category(ToolCategory::Text);
        let slugs: Vec<_> = texts.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["analyze", "convert"]);
        assert!(registry.by_category(ToolCategory::Image).is_empty());
    }

    #[test]
    fn categories_follow_menu_order() {
        let mut registry = ToolRegistry::new();
        registry
            .register(make_reg(ToolCategory::System, "info"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::File, "info"))
            .unwrap();

        assert_eq!(
            registry.categories(),
            vec![ToolCategory::File, ToolCategory::System]
        );
    }

    #[test]
    fn search_matches_id_name_and_description() {
        let mut registry = ToolRegistry::new();
        registry
            .register(make_reg(ToolCategory::Text, "analyze"))
            .unwrap();
        registry
            .register(make_reg(ToolCategory::File, "info"))
            .unwrap();

        let by_id: Vec<_> = registry.search("text.").iter().map(|r| r.id()).collect();
        assert_eq!(by_id, vec!["text.analyze"]);

        let by_name: Vec<_> = registry.search("ANALYZE").iter().map(|r| r.id()).collect();
        assert_eq!(by_name, vec!["text.analyze"]);

        let by_description: Vec<_> = registry
            .search("the info tool")
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(by_description, vec!["file.info"]);

        assert!(registry.search("nonexistent").is_empty());
    }
}
