//! onefile CLI - collapse a finished bundler build into one document.
//!
//! Thin harness around the `onefile` core: reads a dist directory into a
//! bundle, runs the inliner (or the template assembler), and writes the
//! result back. All transformation logic lives in the library; this binary
//! owns argument parsing, logging, and file I/O.

use clap::Parser;
use onefile_cli::{cli, logger, run};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let report = run::run(&args)?;
    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
