use std::sync::Arc;

use dashmap::DashMap;
use restx_lsp_core::{Catalog, HoverDocs};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info};

use crate::capabilities;
use crate::document::Document;
use crate::handlers;

/// Runtime options taken from the command line
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerConfig {
    /// Mirror debug lines to the client's log window
    pub debug: bool,
}

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    catalog: Arc<Catalog>,
    hover_docs: Arc<HoverDocs>,
    config: ServerConfig,
}

impl Backend {
    pub fn new(
        client: Client,
        config: ServerConfig,
        catalog: Arc<Catalog>,
        hover_docs: Arc<HoverDocs>,
    ) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            catalog,
            hover_docs,
            config,
        }
    }

    async fn log_debug(&self, message: &str) {
        debug!("{}", message);
        if self.config.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(client_info) = &params.client_info {
            info!(
                client = %client_info.name,
                version = client_info.version.as_deref().unwrap_or("unknown"),
                "initializing"
            );
        }
        self.log_debug("Initializing RESTx LSP server").await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "restx-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_debug("Server initialized successfully").await;
        self.client
            .log_message(MessageType::INFO, "RESTx LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let document = Document::new(params.text_document.text, params.text_document.version);

        self.log_debug(&format!(
            "Document opened: {} ({} lines)",
            uri,
            document.line_count()
        ))
        .await;

        self.documents.insert(uri, document);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if let Some(mut doc) = self.documents.get_mut(&uri) {
            doc.apply_changes(params.content_changes, version);
        } else {
            debug!(%uri, "change for unknown document ignored");
            return;
        }

        self.log_debug(&format!("Document changed: {} (version {})", uri, version))
            .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Hover request at {:?}", position))
            .await;

        let hover = self
            .documents
            .get(uri)
            .and_then(|doc| handlers::hover::get_hover(&doc, position, &self.hover_docs));
        Ok(hover)
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        let items = match self.documents.get(uri) {
            Some(doc) => {
                debug!(version = doc.version(), "completing");
                handlers::completion::get_completions(&doc, position, &self.catalog)
            }
            None => Vec::new(),
        };
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        Ok(handlers::completion::resolve_completion(item))
    }
}
