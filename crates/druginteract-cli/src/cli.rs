use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "druginteract - assesses whether two drugs can be combined, based on the genes they both influence. The result is indicative support for spotting risks early, not medical advice.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to build per-drug gene sets.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two drugs and write an interaction report.
    Analyze(AnalyzeArgs),
    /// Reduce raw interaction and drug dumps to the columns the analysis needs.
    Prepare(PrepareArgs),
    /// List the distinct interaction types found in an interactions file.
    Types(TypesArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Pdf,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Drugs ---
    /// First drug to compare. Names with spaces may be given without quotes.
    #[arg(long = "drug1", visible_alias = "d1", required = true, num_args = 1.., value_name = "NAME")]
    pub drug1: Vec<String>,

    /// Second drug to compare. Names with spaces may be given without quotes.
    #[arg(long = "drug2", visible_alias = "d2", required = true, num_args = 1.., value_name = "NAME")]
    pub drug2: Vec<String>,

    /// Path for the report file; must end in '.txt' or '.pdf'.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    // --- Input tables ---
    /// Interactions table (TSV). Overrides `data.interactions` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub interactions: Option<PathBuf>,

    /// Drugs table (TSV). Overrides `data.drugs` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub drugs: Option<PathBuf>,

    /// Combination rules table (TSV). Overrides `data.combinations` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub combinations: Option<PathBuf>,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Number of decimal places used for scores in the report.
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S report.precision=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

impl AnalyzeArgs {
    pub fn first_drug(&self) -> String {
        self.drug1.join(" ")
    }

    pub fn second_drug(&self) -> String {
        self.drug2.join(" ")
    }
}

/// Arguments for the `prepare` subcommand.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Raw interactions dump.
    #[arg(long, value_name = "PATH", default_value = "data/raw/interactions.tsv")]
    pub raw_interactions: PathBuf,

    /// Raw drugs dump.
    #[arg(long, value_name = "PATH", default_value = "data/raw/drugs.tsv")]
    pub raw_drugs: PathBuf,

    /// Directory receiving the prepared 'interactions.tsv' and 'drugs.tsv'.
    #[arg(long, value_name = "DIR", default_value = "data/prepared")]
    pub out_dir: PathBuf,

    /// Rebuild the prepared files even if they already exist.
    #[arg(long)]
    pub force: bool,

    /// Number of lines of each prepared file to print afterwards.
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub preview: usize,
}

/// Arguments for the `types` subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Interactions table (TSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub interactions: PathBuf,
}
