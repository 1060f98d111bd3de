use std::sync::Arc;

use clap::Parser;
use restx_lsp_core::{Catalog, HoverDocs};
use tower_lsp::{LspService, Server};
use tracing::info;

mod capabilities;
mod document;
mod error;
mod handlers;
mod logging;
mod server;

use error::ServerError;
use server::{Backend, ServerConfig};

#[derive(Parser)]
#[command(name = "restx-lsp")]
#[command(about = "Language Server for RESTx")]
#[command(version)]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Log filter for stderr output, e.g. "debug" or "restx_lsp_core=trace"
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if !args.stdio {
        return Err(ServerError::StdioRequired.into());
    }

    logging::init_logging(args.log_level.as_deref(), args.no_color)?;

    let config = ServerConfig { debug: args.debug };
    let catalog = Arc::new(Catalog::builtin());
    let hover_docs = Arc::new(HoverDocs::builtin());
    info!(
        completions = catalog.len(),
        hover_tokens = hover_docs.len(),
        debug = config.debug,
        "starting restx-lsp"
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| Backend::new(client, config, catalog, hover_docs));

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("restx-lsp stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["restx-lsp", "--stdio", "--debug", "--log-level", "trace"]);
        assert!(cli.stdio);
        assert!(cli.debug);
        assert_eq!(cli.log_level.as_deref(), Some("trace"));
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["restx-lsp"]);
        assert!(!cli.stdio);
        assert!(!cli.debug);
        assert!(cli.log_level.is_none());
    }
}
