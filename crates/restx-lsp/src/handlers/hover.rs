use restx_lsp_core::HoverDocs;
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Get hover information for a position in the document
pub fn get_hover(doc: &Document, position: Position, hover_docs: &HoverDocs) -> Option<Hover> {
    let offset = doc.offset_at(position);
    hover_docs.lookup(doc.text(), offset).map(build_hover)
}

/// Wrap a documentation string as markdown hover content
pub fn build_hover(documentation: &str) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: documentation.to_string(),
        }),
        range: None,
    }
}
