//! Completion entries and the category catalog for the RESTx language

use serde::{Deserialize, Serialize};

use crate::vocabulary;

/// A completion entry that can be used by the LSP server and other tools
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    pub documentation: String,
    /// Snippet template with `${n:name}` placeholders, if the label alone is not what gets inserted
    pub insert_text: Option<String>,
}

impl CompletionEntry {
    pub(crate) fn new(
        label: &str,
        kind: CompletionKind,
        detail: &str,
        documentation: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            kind,
            detail: detail.to_string(),
            documentation: documentation.to_string(),
            insert_text: None,
        }
    }

    pub(crate) fn with_insert_text(mut self, insert_text: &str) -> Self {
        self.insert_text = Some(insert_text.to_string());
        self
    }

    /// True when the insert template carries at least one placeholder
    pub fn is_snippet(&self) -> bool {
        self.insert_text
            .as_deref()
            .map(|text| text.contains("${"))
            .unwrap_or(false)
    }
}

/// The kind of completion item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Keyword,
    Method,
    TypeRef,
    Function,
    Variable,
    EnumMember,
    Text,
}

/// A named, ordered group of completion entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Keywords,
    HttpMethods,
    Types,
    Modifiers,
    Annotations,
    BuiltinFunctions,
    DbOperations,
    MagicVariables,
    AuthTypes,
}

impl Category {
    /// Every category, in the order used when all of them are offered together
    pub const ALL: [Category; 9] = [
        Category::Keywords,
        Category::HttpMethods,
        Category::Types,
        Category::Modifiers,
        Category::Annotations,
        Category::BuiltinFunctions,
        Category::DbOperations,
        Category::MagicVariables,
        Category::AuthTypes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keywords => "keywords",
            Category::HttpMethods => "httpMethods",
            Category::Types => "types",
            Category::Modifiers => "modifiers",
            Category::Annotations => "annotations",
            Category::BuiltinFunctions => "builtinFunctions",
            Category::DbOperations => "dbOperations",
            Category::MagicVariables => "magicVariables",
            Category::AuthTypes => "authTypes",
        }
    }
}

/// Which part of the catalog a cursor position should be offered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySelection {
    Single(Category),
    Union(&'static [Category]),
    All,
}

impl CategorySelection {
    /// The categories covered by this selection, in presentation order
    pub fn categories(&self) -> &[Category] {
        match self {
            CategorySelection::Single(category) => std::slice::from_ref(category),
            CategorySelection::Union(categories) => categories,
            CategorySelection::All => &Category::ALL,
        }
    }
}

/// The static RESTx vocabulary, grouped by category.
///
/// Built once at startup and shared read-only; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    keywords: Vec<CompletionEntry>,
    http_methods: Vec<CompletionEntry>,
    types: Vec<CompletionEntry>,
    modifiers: Vec<CompletionEntry>,
    annotations: Vec<CompletionEntry>,
    builtin_functions: Vec<CompletionEntry>,
    db_operations: Vec<CompletionEntry>,
    magic_variables: Vec<CompletionEntry>,
    auth_types: Vec<CompletionEntry>,
}

impl Catalog {
    /// Build the catalog from the built-in RESTx vocabulary
    pub fn builtin() -> Self {
        Self {
            keywords: vocabulary::keywords(),
            http_methods: vocabulary::http_methods(),
            types: vocabulary::types(),
            modifiers: vocabulary::modifiers(),
            annotations: vocabulary::annotations(),
            builtin_functions: vocabulary::builtin_functions(),
            db_operations: vocabulary::db_operations(),
            magic_variables: vocabulary::magic_variables(),
            auth_types: vocabulary::auth_types(),
        }
    }

    /// Entries of one category, in declared order
    pub fn category(&self, category: Category) -> &[CompletionEntry] {
        match category {
            Category::Keywords => &self.keywords,
            Category::HttpMethods => &self.http_methods,
            Category::Types => &self.types,
            Category::Modifiers => &self.modifiers,
            Category::Annotations => &self.annotations,
            Category::BuiltinFunctions => &self.builtin_functions,
            Category::DbOperations => &self.db_operations,
            Category::MagicVariables => &self.magic_variables,
            Category::AuthTypes => &self.auth_types,
        }
    }

    /// Entries covered by a selection, concatenated in category order
    pub fn select(&self, selection: CategorySelection) -> Vec<&CompletionEntry> {
        selection
            .categories()
            .iter()
            .flat_map(|category| self.category(*category).iter())
            .collect()
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.category(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve a selected completion entry.
///
/// Entries already carry their full documentation, so there is nothing to fill in.
pub fn resolve(entry: CompletionEntry) -> CompletionEntry {
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category(Category::Keywords).len(), 16);
        assert_eq!(catalog.category(Category::HttpMethods).len(), 5);
        assert_eq!(catalog.category(Category::Types).len(), 23);
        assert_eq!(catalog.category(Category::Modifiers).len(), 3);
        assert_eq!(catalog.category(Category::Annotations).len(), 9);
        assert_eq!(catalog.category(Category::BuiltinFunctions).len(), 15);
        assert_eq!(catalog.category(Category::DbOperations).len(), 16);
        assert_eq!(catalog.category(Category::MagicVariables).len(), 9);
        assert_eq!(catalog.category(Category::AuthTypes).len(), 4);
        assert_eq!(catalog.len(), 100);
    }

    #[test]
    fn test_labels_unique_within_category() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let entries = catalog.category(category);
            let labels: HashSet<&str> = entries.iter().map(|e| e.label.as_str()).collect();
            assert_eq!(
                labels.len(),
                entries.len(),
                "Duplicate label in {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_labels_may_repeat_across_categories() {
        let catalog = Catalog::builtin();
        let in_modifiers = catalog
            .category(Category::Modifiers)
            .iter()
            .any(|e| e.label == "unique");
        let in_annotations = catalog
            .category(Category::Annotations)
            .iter()
            .any(|e| e.label == "@unique");
        assert!(in_modifiers && in_annotations);

        // `delete` is both an HTTP verb (upper case) and a db operation
        let labels: Vec<&str> = catalog
            .select(CategorySelection::All)
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert!(labels.contains(&"DELETE"));
        assert!(labels.contains(&"delete"));
    }

    #[test]
    fn test_select_union_preserves_order() {
        let catalog = Catalog::builtin();
        let selection =
            CategorySelection::Union(&[Category::HttpMethods, Category::Keywords]);
        let labels: Vec<&str> = catalog
            .select(selection)
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(&labels[..6], &["GET", "POST", "PUT", "PATCH", "DELETE", "api"]);
        assert_eq!(labels.len(), 21);
    }

    #[test]
    fn test_select_all_covers_catalog() {
        let catalog = Catalog::builtin();
        let all = catalog.select(CategorySelection::All);
        assert_eq!(all.len(), catalog.len());
        assert_eq!(all.first().map(|e| e.label.as_str()), Some("api"));
        assert_eq!(all.last().map(|e| e.label.as_str()), Some("none"));
    }

    #[test]
    fn test_resolve_is_identity() {
        let catalog = Catalog::builtin();
        for entry in catalog.select(CategorySelection::All) {
            assert_eq!(&resolve(entry.clone()), entry);
        }
    }

    #[test]
    fn test_snippet_detection() {
        let catalog = Catalog::builtin();
        let min = &catalog.category(Category::Annotations)[0];
        assert_eq!(min.label, "@min");
        assert!(min.is_snippet());

        let now = &catalog.category(Category::BuiltinFunctions)[0];
        assert_eq!(now.insert_text.as_deref(), Some("now()"));
        assert!(!now.is_snippet());

        let bearer = &catalog.category(Category::AuthTypes)[0];
        assert!(bearer.insert_text.is_none());
        assert!(!bearer.is_snippet());
    }

    #[test]
    fn test_category_serializes_to_camel_case() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
