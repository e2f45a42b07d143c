//! Claim compare command

use clap::{Args, ValueEnum};
use claimdiff_core::logging_facility::{self, Profile};
use claimdiff_core::{CompareConfig, OutputFormat};
use std::path::PathBuf;

pub const LONG_ABOUT: &str = "\
Compares two claim files section by section and prints the differences.

Sections, in order:
 - claim.versions: every leaf field, matched by its /path
 - claim.results: summary per state, then each test case whose result differs
 - claim.configurations: every leaf of Config, and the abnormal events count
 - claim.nodes: node roles summary, nodes found in one claim only, and
   per-node CNI network and plugin differences
 - claim.nodes.csiDriver and claim.nodes.nodesHwInfo: every leaf field";

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// Fixed-width tables (default)
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogArg {
    /// Human-readable logs on stderr
    Dev,
    /// JSON lines on stderr
    Prod,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First claim file
    #[arg(short = '1', long = "claim1")]
    pub claim1: PathBuf,

    /// Second claim file
    #[arg(short = '2', long = "claim2")]
    pub claim2: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Emit logs to stderr; off when absent
    #[arg(long, value_enum)]
    pub log: Option<LogArg>,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.log {
        Some(LogArg::Dev) => logging_facility::init(Profile::Development),
        Some(LogArg::Prod) => logging_facility::init(Profile::Production),
        None => {}
    }

    let config = CompareConfig::new(args.claim1, args.claim2).with_format(args.format.into());

    let stdout = std::io::stdout();
    claimdiff_core::execute(&config, stdout.lock())?;
    Ok(())
}
