use clap::{Args, Parser, Subcommand, ValueEnum};
use mcnest::engine::config as core_config;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MC-NEST Developers",
    version,
    about = "MC-NEST CLI - A command-line interface for rollout-based Monte Carlo protein sequence search and structure prediction.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the rollout search over a protein sequence and report the best candidate.
    Search(SearchArgs),
    /// Submit a raw sequence to the ESMFold service and save the predicted structure.
    Fold(FoldArgs),
}

/// Selection policy choices exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PolicyArg {
    Greedy,
    ImportanceSampling,
}

impl From<PolicyArg> for core_config::SelectionPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Greedy => Self::Greedy,
            PolicyArg::ImportanceSampling => Self::ImportanceSampling,
        }
    }
}

/// Initialization strategy choices exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StrategyArg {
    ZeroShot,
    DummyAnswer,
}

impl From<StrategyArg> for core_config::InitializeStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::ZeroShot => Self::ZeroShot,
            StrategyArg::DummyAnswer => Self::DummyAnswer,
        }
    }
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// The seed protein sequence (one-letter amino-acid codes).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to a search configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Search Overrides ---
    /// Override the number of rollouts to perform.
    #[arg(short = 'r', long, value_name = "INT")]
    pub max_rollouts: Option<usize>,

    /// Override the selection policy.
    #[arg(short, long, value_enum, value_name = "POLICY")]
    pub policy: Option<PolicyArg>,

    /// Override the initialization strategy.
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyArg>,

    /// Override the softmax temperature used by importance sampling.
    #[arg(short, long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Seed for the random source, for reproducible importance-sampling runs.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Background information about the sequence. Derived from the sequence
    /// segments when omitted.
    #[arg(short, long, value_name = "TEXT")]
    pub background: Option<String>,

    /// Linker unit appended by the built-in mutation rule.
    #[arg(long, value_name = "SEQUENCE")]
    pub linker_unit: Option<String>,

    // --- Folding ---
    /// Also submit the best candidate to the ESMFold service.
    #[arg(long)]
    pub fold: bool,

    /// Path for the predicted structure file (PDB). Requires --fold.
    #[arg(short, long, value_name = "PATH", requires = "fold")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug)]
pub struct FoldArgs {
    /// The protein sequence to fold (one-letter amino-acid codes).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path for the predicted structure file (PDB).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
