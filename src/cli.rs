use clap::Parser;
use std::path::PathBuf;

pub const USAGE_EXAMPLE: &str = "Example: bump-version 2.0.6";

#[derive(Parser, Debug, Clone)]
#[command(name = "bump-version", version, about, after_help = USAGE_EXAMPLE)]
pub struct BumpArgs {
    /// New version, e.g. 2.0.6 or 2.1.0-beta.1
    pub new_version: String,

    /// Project root containing package.json and src-tauri/
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Show what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Write all three files or none of them
    ///
    /// Every file is parsed before the first one is written, and a failed
    /// write restores the files already written.
    #[arg(long)]
    pub atomic: bool,
}
