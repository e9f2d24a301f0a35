use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use mobile_segment_index::{
    build_index, query_number, MobileNumber, QueryResponse, SourceConfig, SOURCE_ROOT_ENV,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mobile-segments")]
#[command(about = "Look up the city and operator of mobile numbers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Segment data root (overrides MOBILE_SEGMENT_SOURCE_ROOT)
    #[arg(long, global = true)]
    source_root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every city, operator and segment under the source root
    List,

    /// Find the city and operator owning one mobile number
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// 11-digit mobile number
    mobile: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::List => {
            let config = resolve_config(cli.source_root.as_deref())?;
            print_json(&build_index(&config.source_root))?
        }
        Commands::Query(args) => {
            // A malformed number is answered before configuration is consulted.
            let mobile = match MobileNumber::from_param(args.mobile.as_deref()) {
                Ok(mobile) => mobile,
                Err(e) => return print_json(&QueryResponse::from(e)),
            };
            let config = resolve_config(cli.source_root.as_deref())?;
            print_json(&query_number(&mobile, &config.source_root))?
        }
    }

    Ok(())
}

fn resolve_config(explicit: Option<&Path>) -> Result<SourceConfig> {
    let config = SourceConfig::resolve(explicit).with_context(|| {
        format!("No source root configured. Pass --source-root or set {SOURCE_ROOT_ENV}.")
    })?;
    log::debug!("Using source root {}", config.source_root.display());
    Ok(config)
}

fn print_json<T: Serialize>(response: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(response).context("Failed to serialize response")?;
    println!("{body}");
    Ok(())
}
