//! CLI entry point for the mosaic generator

use clap::Parser;
use gridmosaic::io::cli::{Cli, MosaicApp};

fn main() -> gridmosaic::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut app = MosaicApp::new(cli);
    app.run()
}
