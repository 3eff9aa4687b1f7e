use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sample-shifter", version)]
#[command(about = "A CLI tool to organize audio sample files")]
#[command(long_about = "Scans audio sample files, categorizes them based on their names and \
copies them into category folders under a target directory. Nothing is moved or deleted: \
preview the result first, then apply it.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory recursively for audio sample files
    Scan(ScanArgs),
    /// Preview how files will be categorized and organized
    Preview(PreviewArgs),
    /// Copy files into their categorized folders in the target directory
    Apply(ApplyArgs),
    /// Print or export the active category configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan
    pub directory: PathBuf,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Directory containing the samples
    pub source: PathBuf,

    /// Target directory for organized samples (required)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Save preview to JSON file for later use with the apply command
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Normalize filenames (lowercase, spaces and underscores to dashes)
    #[arg(long)]
    pub normalize: bool,

    /// Category configuration JSON file (built-in categories when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Directory containing the samples; required unless --preview-file is given
    pub source: Option<PathBuf>,

    /// Target directory for organized samples (required)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Use a previously saved preview file instead of scanning
    #[arg(short, long)]
    pub preview_file: Option<PathBuf>,

    /// Show what would be done without copying files
    #[arg(long)]
    pub dry_run: bool,

    /// Normalize filenames (lowercase, spaces and underscores to dashes)
    #[arg(long)]
    pub normalize: bool,

    /// Category configuration JSON file, used when scanning
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Delete the target directory before copying (asks for confirmation)
    #[arg(long)]
    pub clean: bool,

    /// Exit with status 1 when any file fails to copy
    #[arg(long)]
    pub fail_on_error: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Category configuration JSON file to validate and print
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the configuration to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
