// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use wiki_search::utils::logging::{format_error, format_info, format_success};
use wiki_search::{
    Config, HttpEngineClient, PageLabel, SearchService, server, total_pages,
};

#[derive(Parser)]
#[command(name = "wiki_search")]
#[command(version = "0.1.0")]
#[command(about = "Relevance search client for encyclopedia articles", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP search API
    Serve {
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// One-shot refined search printed to the terminal
    Search {
        /// Free-text query
        query: String,

        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Check that the search engine is reachable
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    wiki_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Wiki Search relevance client");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let engine = HttpEngineClient::new(config.engine.clone())
        .context("Failed to build engine client")?;
    let service = SearchService::new(engine, &config.engine.collection, config.search.clone());

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or(config.server.bind);
            server::serve(service, &bind)
                .await
                .context("Search API server failed")?;
        }

        Commands::Search { query, page } => {
            let results = service
                .search_refined(&query)
                .await
                .context("Search failed")?;

            if results.is_empty() {
                println!("{}", format_info("No matching articles"));
                return Ok(());
            }

            let window = service.page(&results, page);
            if window.is_empty() {
                println!(
                    "{}",
                    format_error(&format!("Page {} is out of range", page))
                );
                return Ok(());
            }

            for result in window {
                println!("{}", result.format_summary());
            }

            let pages = total_pages(results.len(), service.page_length());
            let pager: Vec<String> = service
                .pager(results.len(), page)
                .into_iter()
                .map(|label| match label {
                    PageLabel::Number(n) => n.to_string(),
                    PageLabel::Ellipsis => "...".to_string(),
                })
                .collect();
            println!(
                "{}",
                format_info(&format!(
                    "{} results, page {} of {}  [{}]",
                    results.len(),
                    page,
                    pages,
                    pager.join(" ")
                ))
            );
        }

        Commands::Ping => match service.health().await {
            Ok(_) => println!("{}", format_success("Engine reachable")),
            Err(e) => {
                println!("{}", format_error(&format!("Engine unreachable: {}", e)));
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
