//! nist-pubid command line
//!
//! Usage:
//!   nist-pubid parse `<ID>...` [--style `<style>`]   - Print identifiers in one style
//!   nist-pubid json `<ID>...`                       - Print structured identifiers
//!   nist-pubid report `<catalog.json>` [--mode `<mode>`] - Check a catalog against PubID

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use nist_pubid::{LegacyCodes, Style};
use nist_pubid_catalog::{Catalog, PubidConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nist-pubid")]
#[command(version, about = "Parse and render NIST publication identifiers", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/nist-pubid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each identifier in one style
    Parse {
        /// Identifiers to parse
        #[arg(required = true)]
        ids: Vec<String>,

        /// long, abbrev, short or mr
        #[arg(short, long)]
        style: Option<Style>,
    },

    /// Print each identifier as a JSON object with every style
    Json {
        /// Identifiers to parse
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Compare a catalog's printed identifiers with PubID
    Report {
        /// JSON array of {id, doi, title} records
        catalog: PathBuf,

        #[arg(short, long, value_enum, default_value_t = ReportMode::Status)]
        mode: ReportMode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportMode {
    /// PubID short and mr forms of every record
    Status,
    /// Records already printed as PubID
    Comply,
    /// Records printed differently
    Differ,
    /// Records whose DOI does not parse
    Failures,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = PubidConfig::load(cli.config.as_deref())?;
    let legacy = config.legacy_table()?;

    match cli.command {
        Commands::Parse { ids, style } => {
            let style = style.unwrap_or(config.default_style);
            Ok(parse_each(&legacy, &ids, |id| id.render(style)))
        }
        Commands::Json { ids } => Ok(parse_each(&legacy, &ids, |id| {
            serde_json::Value::Object(id.to_structured()).to_string()
        })),
        Commands::Report { catalog, mode } => {
            let catalog = Catalog::from_path(&catalog)?.with_legacy_codes(legacy);
            let output = match mode {
                ReportMode::Status => {
                    serde_json::to_string_pretty(&catalog.status().collect::<Vec<_>>())?
                }
                ReportMode::Comply => serde_json::to_string_pretty(&catalog.comply_with_pubid())?,
                ReportMode::Differ => {
                    serde_json::to_string_pretty(&catalog.different_with_pubid())?
                }
                ReportMode::Failures => {
                    serde_json::to_string_pretty(&catalog.parse_fail_with_pubid())?
                }
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print `format(id)` for every identifier that parses; report the rest
fn parse_each(
    legacy: &LegacyCodes,
    ids: &[String],
    format: impl Fn(&nist_pubid::Identifier) -> String,
) -> ExitCode {
    let parser = nist_pubid::Parser::new(legacy);
    let mut failed = false;
    for raw in ids {
        match parser.parse(raw) {
            Ok(id) => println!("{}", format(&id)),
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
