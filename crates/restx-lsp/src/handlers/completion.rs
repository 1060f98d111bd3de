use restx_lsp_core::{completions_at, Catalog, CompletionEntry, CompletionKind};
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: &CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Method => CompletionItemKind::METHOD,
        CompletionKind::TypeRef => CompletionItemKind::TYPE_PARAMETER,
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
        CompletionKind::EnumMember => CompletionItemKind::ENUM_MEMBER,
        CompletionKind::Text => CompletionItemKind::TEXT,
    };

    let insert_text_format = entry.insert_text.as_ref().map(|_| {
        if entry.is_snippet() {
            InsertTextFormat::SNIPPET
        } else {
            InsertTextFormat::PLAIN_TEXT
        }
    });

    CompletionItem {
        label: entry.label.clone(),
        kind: Some(kind),
        detail: Some(entry.detail.clone()),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: entry.documentation.clone(),
        })),
        insert_text: entry.insert_text.clone(),
        insert_text_format,
        ..Default::default()
    }
}

/// Get completion items for a position in the document
pub fn get_completions(
    doc: &Document,
    position: Position,
    catalog: &Catalog,
) -> Vec<CompletionItem> {
    let offset = doc.offset_at(position);
    completions_at(catalog, doc.text(), offset)
        .into_iter()
        .map(convert_to_lsp_completion)
        .collect()
}

/// Resolve a completion item the client selected.
///
/// Items are sent complete, so the item comes back as it was.
pub fn resolve_completion(item: CompletionItem) -> CompletionItem {
    item
}
