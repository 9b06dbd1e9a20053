//! Category registry and filtering.
//!
//! Categories are plain labels kept in insertion order. The pseudo-category
//! `"All"` is never stored; it is injected at the top of the option list
//! whenever the filter choices are rendered.

/// Reserved pseudo-category shown at the top of every filter list.
pub const ALL_CATEGORY: &str = "All";

/// Active category filter for the task board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a label, mapping `"All"` to the pass-through
    /// variant.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// The label this filter displays as.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Whether a task with the given category passes the filter.
    /// Matching is exact and case-sensitive.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

/// Ordered set of category labels.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Registry seeded with the default labels.
    pub fn with_defaults() -> Self {
        let mut registry = CategoryRegistry::default();
        for name in ["Work", "Personal", "Errands"] {
            registry.add(name);
        }
        registry
    }

    /// Register a label, returning whether it was added.
    ///
    /// Blank input, the reserved `"All"` label, and labels already present
    /// (case-sensitive) are silently ignored.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || label == ALL_CATEGORY || self.contains(label) {
            return false;
        }
        self.names.push(label.to_string());
        true
    }

    /// Remove a label, returning whether it was present.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.names.iter().position(|n| n == label) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Exact-match membership check.
    pub fn contains(&self, label: &str) -> bool {
        self.names.iter().any(|n| n == label)
    }

    /// Registered labels in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Filter options in display order: `"All"` first, then every label.
    pub fn filter_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.names.len() + 1);
        options.push(ALL_CATEGORY.to_string());
        options.extend(self.names.iter().cloned());
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = CategoryRegistry::default();
        assert!(registry.add("Gym"));
        assert!(!registry.add("Gym"));
        assert_eq!(registry.names(), ["Gym"]);
    }

    #[test]
    fn test_add_ignores_blank_and_reserved() {
        let mut registry = CategoryRegistry::default();
        assert!(!registry.add("   "));
        assert!(!registry.add(ALL_CATEGORY));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut registry = CategoryRegistry::default();
        assert!(registry.add("work"));
        assert!(registry.add("Work"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut registry = CategoryRegistry::with_defaults();
        assert!(registry.remove("Errands"));
        assert!(!registry.remove("Errands"));
        assert_eq!(registry.names(), ["Work", "Personal"]);
    }

    #[test]
    fn test_filter_options_inject_all_first() {
        let registry = CategoryRegistry::with_defaults();
        assert_eq!(registry.filter_options(), ["All", "Work", "Personal", "Errands"]);
        assert!(!registry.contains(ALL_CATEGORY));
    }

    #[test]
    fn test_filter_matching() {
        let filter = CategoryFilter::from_label("Work");
        assert!(filter.matches("Work"));
        assert!(!filter.matches("work"));
        assert!(CategoryFilter::from_label(ALL_CATEGORY).matches("anything"));
    }
}
