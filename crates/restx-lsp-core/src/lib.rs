//! Core code intelligence for the RESTx language
//!
//! This crate holds the editor-agnostic half of the RESTx language server:
//! the static vocabulary, the rules that pick which part of it to suggest at a
//! cursor, and the hover documentation lookup. It works on plain text and byte
//! offsets and never parses the document.
//!
//! # Features
//!
//! - **Completion**: an immutable [`Catalog`] of entries grouped by [`Category`]
//! - **Context**: [`classify`] maps the current line prefix to a [`CategorySelection`]
//! - **Hover**: [`HoverDocs`] resolves the token under the cursor to markdown
//!
//! # Example
//!
//! ```
//! use restx_lsp_core::{classify, Catalog, Category, CategorySelection, HoverDocs};
//!
//! let catalog = Catalog::builtin();
//! let text = "table users {\n  email: email @";
//! let selection = classify(text, text.len());
//! assert_eq!(selection, CategorySelection::Single(Category::Annotations));
//! println!("{} suggestions", catalog.select(selection).len());
//!
//! let docs = HoverDocs::builtin();
//! assert!(docs.lookup("GET /users", 1).is_some());
//! ```

pub mod completion;
pub mod context;
pub mod hover;
mod vocabulary;

// Re-export main types for convenience
pub use completion::{
    resolve, Catalog, Category, CategorySelection, CompletionEntry, CompletionKind,
};
pub use context::{classify, completions_at, line_prefix, matching_rule, TriggerRule, TRIGGER_RULES};
pub use hover::{extract_token, HoverDocs};
