//! CLI entry point for the Nees rule generator

use clap::Parser;
use nees::io::cli::{Cli, RenderJob};

fn main() -> nees::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    RenderJob::new(cli).run()
}
