//! Classification and hover behaviour over whole documents

use proptest::prelude::*;
use restx_lsp_core::{
    classify, completions_at, resolve, Catalog, Category, CategorySelection, CompletionEntry,
    HoverDocs,
};

const SAMPLE: &str = "api Shop 1.0.0

env {
  database_url: str
}

type User {
  id: uuid
  email: email @
}

table users {
  id: uuid pk
  authorName:
}

GET /users/:id -> User {
  auth:
  flow: {
    user -> db.users.
    return -> $
  }
}
";

fn offset_after(text: &str, needle: &str) -> usize {
    text.find(needle).expect("needle present in sample") + needle.len()
}

fn labels(entries: Vec<&CompletionEntry>) -> Vec<&str> {
    entries.into_iter().map(|e| e.label.as_str()).collect()
}

#[test]
fn test_sample_document_positions() {
    let cases = [
        ("email: email @", CategorySelection::Single(Category::Annotations)),
        ("db.users.", CategorySelection::Single(Category::DbOperations)),
        ("return -> $", CategorySelection::Single(Category::MagicVariables)),
        ("  auth:", CategorySelection::Single(Category::AuthTypes)),
        ("  id:", CategorySelection::Single(Category::Types)),
        ("authorName:", CategorySelection::All),
        ("GET /users/:id ", CategorySelection::All),
    ];

    for (needle, expected) in cases {
        let offset = offset_after(SAMPLE, needle);
        assert_eq!(classify(SAMPLE, offset), expected, "after {:?}", needle);
    }
}

#[test]
fn test_sample_blank_line() {
    let catalog = Catalog::builtin();
    let offset = offset_after(SAMPLE, "api Shop 1.0.0\n");
    let names = labels(completions_at(&catalog, SAMPLE, offset));

    let mut expected: Vec<&str> = catalog
        .category(Category::HttpMethods)
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    expected.extend(catalog.category(Category::Keywords).iter().map(|e| e.label.as_str()));
    assert_eq!(names, expected);
}

#[test]
fn test_full_union_order() {
    let catalog = Catalog::builtin();
    let text = "GET /users/:id ";
    let names = labels(completions_at(&catalog, text, text.len()));

    let expected: Vec<&str> = Category::ALL
        .iter()
        .flat_map(|c| catalog.category(*c).iter())
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_hover_in_sample() {
    let docs = HoverDocs::builtin();
    let offset = SAMPLE.find("pk").unwrap() + 1;
    assert_eq!(
        docs.lookup(SAMPLE, offset),
        Some("Primary key - Marks column as primary key")
    );

    let offset = SAMPLE.find("uuid").unwrap();
    assert_eq!(docs.lookup(SAMPLE, offset), docs.get("uuid"));
}

#[test]
fn test_hover_after_blank_lines_sees_previous_word() {
    // Newlines do not split words, so "GET" here is glued to "authorName:\n}\n\n"
    let docs = HoverDocs::builtin();
    let offset = SAMPLE.find("GET").unwrap() + 1;
    assert_eq!(docs.lookup(SAMPLE, offset), None);
    assert_eq!(docs.lookup("GET /users", 1), docs.get("GET"));
}

proptest! {
    #[test]
    fn classification_is_total(text in "\\PC{0,80}", offset in 0usize..120) {
        let catalog = Catalog::builtin();
        let entries = completions_at(&catalog, &text, offset);
        prop_assert!(!entries.is_empty());
    }

    #[test]
    fn trailing_at_always_offers_annotations(
        lines in prop::collection::vec("[a-zA-Z:. $]{0,20}", 0..5),
        last in "[a-zA-Z:. ]{0,20}",
    ) {
        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&last);
        text.push('@');
        prop_assert_eq!(
            classify(&text, text.len()),
            CategorySelection::Single(Category::Annotations)
        );
    }

    #[test]
    fn hover_never_panics(text in "\\PC{0,80}", offset in 0usize..120) {
        let docs = HoverDocs::builtin();
        let _ = docs.lookup(&text, offset);
    }

    #[test]
    fn resolve_returns_input(index in 0usize..100) {
        let catalog = Catalog::builtin();
        let all = catalog.select(CategorySelection::All);
        let entry = all[index % all.len()].clone();
        prop_assert_eq!(resolve(entry.clone()), entry);
    }
}
