//! Command execution: dist dir in, single-file artifact out.

use std::fs;

use onefile::{InlineConfig, InlineReport, Target};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::dist;
use crate::error::{CliError, Result};

/// Execute one inliner invocation as described by the parsed arguments.
pub fn run(args: &Cli) -> Result<InlineReport> {
    if !args.dist.is_dir() {
        return Err(CliError::DistNotFound(args.dist.clone()));
    }

    let mut config = InlineConfig::new()
        .with_target(args.target.into())
        .with_inline_pattern(args.inline_pattern.iter().cloned())
        .with_delete_inlined_files(!args.keep_inlined_files)
        .with_remove_module_loader(args.remove_module_loader);
    if let Some(signature) = &args.mount_signature {
        config = config.with_mount_signature(signature);
    }

    let mut bundle = dist::read_bundle(&args.dist)?;
    info!(entries = bundle.len(), dist = %args.dist.display(), "bundle loaded");

    let report = match config.target {
        Target::WebComponent => {
            // required_if_eq on the arg already guarantees this in practice.
            let template_path = args.template.clone().ok_or(CliError::TemplateRequired)?;
            let template = fs::read_to_string(&template_path)?;
            let assembled = onefile::assemble(&template, &mut bundle, &config)?;

            let output = args
                .output
                .clone()
                .unwrap_or_else(|| args.dist.join("index.embed.html"));
            fs::write(&output, &assembled.text)?;
            info!(output = %output.display(), "wrote web component artifact");

            dist::write_back(&args.dist, &bundle, &assembled.report)?;
            assembled.report
        }
        _ => {
            let report = onefile::inline_bundle(&mut bundle, &config)?;
            dist::write_back(&args.dist, &bundle, &report)?;
            report
        }
    };

    summarize(&report);
    Ok(report)
}

fn summarize(report: &InlineReport) {
    info!(
        inlined = report.inlined.len(),
        skipped = report.skipped.len(),
        "inline pass finished"
    );
    for skipped in &report.skipped {
        warn!(asset = %skipped.name, reason = ?skipped.reason, "asset not inlined");
    }
}
