//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use depth_chart::{
    cli::{Commands, DepthChartCli},
    commands::{demo::handle_demo, sample::handle_sample},
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = DepthChartCli::parse();

    match app.command {
        Commands::Demo {
            max_depth,
            json,
            verbose,
        } => handle_demo(max_depth, json, verbose)?,

        Commands::Sample { verbose } => handle_sample(verbose)?,
    }

    Ok(())
}
