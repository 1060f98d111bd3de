use tower_lsp::lsp_types::*;

/// Characters that make the editor ask for completions
pub const TRIGGER_CHARACTERS: [&str; 5] = [".", ":", "@", "$", " "];

/// Define the server capabilities for the RESTx LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Ranged edits; the document store applies them in place
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),

        // Keyword, type and context variable documentation
        hover_provider: Some(HoverProviderCapability::Simple(true)),

        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            trigger_characters: Some(TRIGGER_CHARACTERS.iter().map(|c| c.to_string()).collect()),
            ..Default::default()
        }),

        ..Default::default()
    }
}
