//! Hover documentation: the token table and the token-under-cursor lookup

use std::collections::HashMap;

use crate::context::{clamp_offset, trim_blank};

/// Markdown documentation keyed by literal token
#[derive(Clone, Debug)]
pub struct HoverDocs {
    docs: HashMap<&'static str, &'static str>,
}

impl HoverDocs {
    /// Build the table from the built-in RESTx hover documentation
    pub fn builtin() -> Self {
        let docs = [
            (
                "api",
                "Declares the API name and version.\n\n```restx\napi MyAPI 1.0.0\n```",
            ),
            (
                "env",
                "Defines environment variables.\n\n```restx\nenv {\n  database_url: str\n  api_key: secret\n}\n```",
            ),
            (
                "type",
                "Defines a custom type.\n\n```restx\ntype User {\n  id: uuid\n  name: str\n}\n```",
            ),
            (
                "table",
                "Defines a database table.\n\n```restx\ntable users {\n  id: uuid pk\n  email: email unique\n}\n```",
            ),
            (
                "flow",
                "Defines request handling logic.\n\n```restx\nflow: {\n  user -> db.users.findById(id)\n  return -> user\n}\n```",
            ),
            ("GET", "HTTP GET method - retrieves a resource"),
            ("POST", "HTTP POST method - creates a resource"),
            ("PUT", "HTTP PUT method - replaces a resource"),
            ("PATCH", "HTTP PATCH method - partially updates a resource"),
            ("DELETE", "HTTP DELETE method - removes a resource"),
            ("str", "String type - Unicode text"),
            ("int", "Integer type - 32-bit signed integer"),
            ("uuid", "UUID type - Universally unique identifier"),
            ("email", "Email type - Valid email address"),
            (
                "secret",
                "Secret type - Sensitive data, auto-stripped from responses",
            ),
            ("pk", "Primary key - Marks column as primary key"),
            (
                "unique",
                "Unique constraint - Ensures column values are unique",
            ),
            (
                "bearer",
                "Bearer token authentication - JWT in Authorization header",
            ),
            (
                "$auth",
                "Authenticated user context - Available in authenticated routes",
            ),
            (
                "$env",
                "Environment variables - Access via $env.variable_name",
            ),
        ];

        Self {
            docs: docs.into_iter().collect(),
        }
    }

    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.docs.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documentation for the token under `offset`, if it has any
    pub fn lookup(&self, text: &str, offset: usize) -> Option<&'static str> {
        let token = extract_token(text, offset)?;
        self.get(token)
    }
}

impl Default for HoverDocs {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Isolate the identifier-like token around `offset` (a byte offset into `text`).
///
/// Only the space character separates words here; tabs and newlines do not.
/// The token is the leading run of ASCII letters, `$` and `@` in the word, so
/// `findById(id)` yields `findById` and `users.find` yields `users`.
pub fn extract_token(text: &str, offset: usize) -> Option<&str> {
    let offset = clamp_offset(text, offset);
    let bytes = text.as_bytes();

    let search_end = (offset + 1).min(bytes.len());
    let word_start = bytes[..search_end]
        .iter()
        .rposition(|&b| b == b' ')
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let word_end = bytes[offset..]
        .iter()
        .position(|&b| b == b' ')
        .map(|idx| offset + idx)
        .unwrap_or(bytes.len());

    // With the cursor on a space the start lands past the end; take the span between them
    let (from, to) = if word_start <= word_end {
        (word_start, word_end)
    } else {
        (word_end, word_start)
    };

    let span = trim_blank(&text[from..to]);
    let token_len = span
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '$' || c == '@'))
        .unwrap_or(span.len());
    let token = &span[..token_len];

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(HoverDocs::builtin().len(), 20);
    }

    #[test]
    fn test_hover_on_keyword() {
        let docs = HoverDocs::builtin();
        let text = "type User { id: uuid }";
        for offset in 0..4 {
            assert_eq!(extract_token(text, offset), Some("type"), "offset {}", offset);
        }
        // on the space itself the span collapses to that space
        assert_eq!(extract_token(text, 4), None);
        assert_eq!(docs.lookup(text, 2), docs.get("type"));
        assert!(docs.lookup(text, 2).unwrap().starts_with("Defines a custom type."));
    }

    #[test]
    fn test_hover_on_type_reference() {
        let docs = HoverDocs::builtin();
        let text = "type User { id: uuid }";
        let offset = text.find("uuid").unwrap() + 1;
        assert_eq!(extract_token(text, offset), Some("uuid"));
        assert_eq!(
            docs.lookup(text, offset),
            Some("UUID type - Universally unique identifier")
        );
    }

    #[test]
    fn test_hover_on_whitespace() {
        let docs = HoverDocs::builtin();
        let text = "type  User";
        assert_eq!(extract_token(text, 5), None);
        assert_eq!(docs.lookup(text, 5), None);
    }

    #[test]
    fn test_hover_stops_at_punctuation() {
        let text = "user -> db.users.findById(id)";
        let offset = text.find("db.").unwrap() + 4;
        assert_eq!(extract_token(text, offset), Some("db"));

        let text = "auth: bearer($env.stripe_key)";
        let offset = text.find("bearer").unwrap();
        assert_eq!(extract_token(text, offset), Some("bearer"));
    }

    #[test]
    fn test_hover_keeps_sigils() {
        let docs = HoverDocs::builtin();
        let text = "authorize: $auth.role";
        let offset = text.find("$auth").unwrap() + 2;
        assert_eq!(extract_token(text, offset), Some("$auth"));
        assert!(docs.lookup(text, offset).is_some());

        assert_eq!(extract_token("@cron(x)", 1), Some("@cron"));
    }

    #[test]
    fn test_newline_is_not_a_boundary() {
        // "api\nGET" is one word; the token stops at the newline after trimming
        let docs = HoverDocs::builtin();
        let text = "api\nGET /users";
        assert_eq!(extract_token(text, 5), Some("api"));
        assert_eq!(docs.lookup(text, 5), docs.get("api"));
    }

    #[test]
    fn test_unknown_token() {
        let docs = HoverDocs::builtin();
        assert_eq!(extract_token("users", 2), Some("users"));
        assert_eq!(docs.lookup("users", 2), None);
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(extract_token("", 0), None);
        assert_eq!(extract_token("GET", 3), Some("GET"));
        assert_eq!(extract_token("GET", 99), Some("GET"));
        assert_eq!(extract_token("é GET", 1), None);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let docs = HoverDocs::builtin();
        let text = "\u{feff}GET /users";
        assert_eq!(extract_token(text, 3), Some("GET"));
        assert_eq!(docs.lookup(text, 4), docs.get("GET"));
    }
}
