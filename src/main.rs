use std::path::PathBuf;

use bangquery::format::format_parsed;
use bangquery::{Catalog, DisabledEngine, Query};
use clap::Parser;
use tracing::info;

/// Parse `!engine`, `?category` and `:language` tags out of a search query.
///
/// The catalog is read from `--catalog`, else `$BANGQUERY_CATALOG`, else the builtin one.
#[derive(Parser)]
#[command(name = "bangquery", version)]
struct Cli {
    /// Raw search query; multiple arguments are joined with spaces
    query: Vec<String>,

    /// Catalog file (JSON with "languages" and "engines")
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Exclude an engine from category selection (repeatable)
    #[arg(long = "disable", value_name = "ENGINE:CATEGORY")]
    disabled: Vec<DisabledEngine>,

    /// Print the parsed query as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bangquery=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load(cli.catalog.as_deref())
        .inspect_err(|e| tracing::error!("failed to load catalog: {e}"))?;

    let mut query = Query::with_disabled(cli.query.join(" "), cli.disabled);
    query.parse(&catalog);

    info!(
        languages = query.languages().len(),
        engines = query.engines().len(),
        "query parsed"
    );

    let parsed = query.to_parsed();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", format_parsed(&parsed));
    }
    Ok(())
}
