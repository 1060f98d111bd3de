//! Trigger context classification.
//!
//! Looks only at the current line up to the cursor and picks which part of the
//! catalog is relevant there. Nothing here parses RESTx; the rules are plain
//! suffix and regex checks on the line prefix, evaluated top to bottom with the
//! first match winning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::completion::{Catalog, Category, CategorySelection, CompletionEntry};

static DB_ACCESSOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"db\.[A-Za-z0-9_]+\.$").expect("valid db accessor pattern"));
static AUTH_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"auth:\s*$").expect("valid auth pattern"));
static TRAILING_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*$").expect("valid colon pattern"));

/// One classification rule: when `matches` accepts the line prefix, `selection` is offered
#[derive(Clone, Copy)]
pub struct TriggerRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub selection: CategorySelection,
}

impl std::fmt::Debug for TriggerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerRule")
            .field("name", &self.name)
            .field("selection", &self.selection)
            .finish()
    }
}

fn ends_with_at(prefix: &str) -> bool {
    prefix.ends_with('@')
}

fn ends_with_dollar(prefix: &str) -> bool {
    prefix.ends_with('$')
}

fn ends_with_db_accessor(prefix: &str) -> bool {
    DB_ACCESSOR.is_match(prefix)
}

fn ends_with_auth_colon(prefix: &str) -> bool {
    AUTH_COLON.is_match(prefix)
}

// Any "auth" on the line suppresses types, even in `authorName: `.
fn ends_with_type_colon(prefix: &str) -> bool {
    TRAILING_COLON.is_match(prefix) && !prefix.contains("auth")
}

fn is_blank(prefix: &str) -> bool {
    trim_blank(prefix).is_empty()
}

fn always(_: &str) -> bool {
    true
}

/// The classification rules in evaluation order. The last rule always matches.
pub static TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        name: "annotation",
        matches: ends_with_at,
        selection: CategorySelection::Single(Category::Annotations),
    },
    TriggerRule {
        name: "magic-variable",
        matches: ends_with_dollar,
        selection: CategorySelection::Single(Category::MagicVariables),
    },
    TriggerRule {
        name: "db-operation",
        matches: ends_with_db_accessor,
        selection: CategorySelection::Single(Category::DbOperations),
    },
    TriggerRule {
        name: "auth-type",
        matches: ends_with_auth_colon,
        selection: CategorySelection::Single(Category::AuthTypes),
    },
    TriggerRule {
        name: "type",
        matches: ends_with_type_colon,
        selection: CategorySelection::Single(Category::Types),
    },
    TriggerRule {
        name: "line-start",
        matches: is_blank,
        selection: CategorySelection::Union(&[Category::HttpMethods, Category::Keywords]),
    },
    TriggerRule {
        name: "fallback",
        matches: always,
        selection: CategorySelection::All,
    },
];

/// Trim whitespace, counting a byte order mark (U+FEFF) as whitespace too
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Clamp an offset into `text`, moving it back onto a char boundary if needed
pub(crate) fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// The text of the current line from its start up to the cursor
pub fn line_prefix(text: &str, offset: usize) -> &str {
    let offset = clamp_offset(text, offset);
    let before = &text[..offset];
    let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    &before[line_start..]
}

/// Find the first rule that accepts `prefix`
pub fn matching_rule(prefix: &str) -> &'static TriggerRule {
    TRIGGER_RULES
        .iter()
        .find(|rule| (rule.matches)(prefix))
        .unwrap_or(&TRIGGER_RULES[TRIGGER_RULES.len() - 1])
}

/// Decide which categories to offer at `offset` (a byte offset into `text`)
pub fn classify(text: &str, offset: usize) -> CategorySelection {
    let prefix = line_prefix(text, offset);
    let rule = matching_rule(prefix);
    tracing::trace!(
        rule = rule.name,
        prefix,
        categories = ?rule
            .selection
            .categories()
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>(),
        "classified completion context"
    );
    rule.selection
}

/// Completion entries for the cursor at `offset`, in presentation order
pub fn completions_at<'a>(
    catalog: &'a Catalog,
    text: &str,
    offset: usize,
) -> Vec<&'a CompletionEntry> {
    catalog.select(classify(text, offset))
}
