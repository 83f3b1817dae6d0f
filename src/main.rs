//! Binary entry point for `bump-version`.

use bump_version::BumpError;
use colored::Colorize;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match bump_version::run() {
        Ok(()) => {}
        Err(BumpError::Usage(usage)) => {
            eprintln!("{}", usage);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
