//! resolve-filter — print the bool query a rule would search with.
//!
//! Reads a rule filter request (JSON, Kibana-style keys) and resolves it
//! against either a saved-queries JSON file or the configured OpenSearch
//! saved-objects index.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use detect_core::Config;
use detect_rules::schema::RuleFilterRequest;
use detect_rules::store::{InMemorySavedObjects, OpenSearchSavedObjects, SavedObjectsClient};
use detect_rules::FilterResolver;

// ── CLI ─────────────────────────────────────────────────────────────

/// Resolve a detection rule into its search filter.
#[derive(Parser, Debug)]
#[command(name = "resolve-filter", version, about)]
struct Cli {
    /// Path to the rule filter request JSON.
    #[arg(long, env = "RESOLVE_REQUEST")]
    request: PathBuf,

    /// Saved queries JSON file (`{ "<id>": <saved query> }`).
    /// When omitted, saved queries are read from OpenSearch.
    #[arg(long, env = "SAVED_OBJECTS_FILE")]
    saved_objects: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn saved_objects_client(cli: &Cli) -> anyhow::Result<Arc<dyn SavedObjectsClient>> {
    if let Some(ref path) = cli.saved_objects {
        let store = InMemorySavedObjects::from_json_file(path)
            .with_context(|| format!("failed to load saved objects from {}", path.display()))?;
        info!(path = %path.display(), count = store.len(), "using file-backed saved objects");
        return Ok(Arc::new(store));
    }

    let config = Config::from_env();
    config.log_summary();
    let store = OpenSearchSavedObjects::from_config(&config.opensearch)?;
    Ok(Arc::new(store))
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    detect_core::config::load_dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let request: RuleFilterRequest = detect_core::read_json_file(&cli.request)
        .with_context(|| format!("failed to read request from {}", cli.request.display()))?;
    info!(rule_type = %request.rule_type, saved_id = ?request.saved_id, "resolving rule filter");

    let resolver = FilterResolver::new(saved_objects_client(&cli)?);
    let query = resolver.resolve(&request).await?;

    let rendered = if cli.compact {
        serde_json::to_string(&query)?
    } else {
        serde_json::to_string_pretty(&query)?
    };
    println!("{rendered}");
    Ok(())
}
