//! Keep the version of a Tauri project in sync.
//!
//! Rewrites the version in `package.json`, `src-tauri/Cargo.toml` and
//! `src-tauri/tauri.conf.json` from a single command-line argument.

pub mod cli;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod steps;
pub mod version;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use clap::error::ErrorKind;

    let args = match cli::BumpArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            return Err(BumpError::Usage(format!(
                "{}\n{}",
                e.render().to_string().trim_end(),
                cli::USAGE_EXAMPLE
            )));
        }
    };

    steps::bump::execute(args)
}
