use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Monorepo detection and Railway deployment configuration
#[derive(Parser, Debug)]
#[command(
    name = "railyard",
    about = "Detects monorepo structure and generates Railway deployment configuration",
    version,
    long_about = "railyard inspects a repository's workspace declarations to enumerate its \
                  apps, classifies each app's runtime role from its dependencies, and \
                  generates a railway.toml plus a machine-readable detection report."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect monorepo structure and generate deployment config",
        long_about = "Reads the root package.json, classifies the monorepo layout, discovers \
                      the declared workspace apps and analyzes each one.\n\n\
                      Examples:\n  \
                      railyard detect\n  \
                      railyard detect /path/to/repo\n  \
                      railyard detect --format json --dry-run"
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to repository root (defaults to current directory)"
    )]
    pub repository_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Configuration file overriding signal tables and output file names"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Analyze only - do not write railway.toml or the detection report"
    )]
    pub dry_run: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the formatted report to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
