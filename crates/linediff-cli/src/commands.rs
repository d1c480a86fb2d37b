use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use linediff_core::{compute_diff_with, DiffOptions, DiffResult};
use linediff_format::{export_diff_json, generate_unified_diff};

use crate::cli::{Cli, OutputFormat};

/// Diff-tool convention: exit 0 when identical, 1 when the documents differ.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let old_text = fs::read_to_string(&cli.old)
        .with_context(|| format!("failed to read {}", cli.old.display()))?;
    let new_text = fs::read_to_string(&cli.new)
        .with_context(|| format!("failed to read {}", cli.new.display()))?;

    let options = DiffOptions {
        modified_threshold: cli.threshold,
        max_lines: Some(cli.max_lines),
    };
    let result = compute_diff_with(&old_text, &new_text, &options)?;

    match cli.format {
        OutputFormat::Unified => {
            let old_label = cli.old.display().to_string();
            let new_label = cli.new.display().to_string();
            print!(
                "{}",
                generate_unified_diff(&result, &old_label, &new_label, cli.context)
            );
        }
        OutputFormat::Json => println!("{}", export_diff_json(&result)?),
        OutputFormat::Summary => print_summary(&result),
    }

    if result.is_identical() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_summary(result: &DiffResult) {
    let stats = &result.stats;
    println!(
        "{} added, {} removed, {} modified, {} unchanged",
        stats.added.to_string().green().bold(),
        stats.removed.to_string().red().bold(),
        stats.modified.to_string().yellow().bold(),
        stats.unchanged,
    );
    println!(
        "{} -> {} lines, similarity {}",
        stats.total_old,
        stats.total_new,
        format!("{:.1}%", result.similarity * 100.0).cyan().bold(),
    );
}
