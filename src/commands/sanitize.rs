//! Sanitize command handler

use anyhow::Result;
use humansize::{format_size, DECIMAL};

use sesh::cli::SanitizeArgs;
use sesh::config::SanitizeConfig;
use sesh::sanitize::{
    dry_run, preview, resolve_output, sanitize_file, DryRunReport, FileFormat, Redactor,
    SanitizeReport,
};
use sesh::Config;

/// Sanitize a JSON/JSONL file, or report what would change with `--dry-run`.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SanitizeArgs) -> Result<()> {
    // Reject conflicting arguments before touching the filesystem.
    let output = resolve_output(&args.input, args.output.as_deref(), args.in_place)?;
    let config = Config::load()?;
    let redactor = Redactor::new();

    if args.dry_run {
        println!("DRY RUN MODE - No files will be modified");
        let report = dry_run(&redactor, &args.input)?;
        print_dry_run(&report, args.verbose, &config.sanitize);
        return Ok(());
    }

    let report = sanitize_file(&redactor, &args.input, &output)?;
    print_report(&report, &output.display().to_string());

    if report.format != FileFormat::Empty {
        println!();
        println!("Sanitization complete!");
        println!("Review the output to ensure no legitimate content was over-redacted");
    }
    Ok(())
}

fn print_report(report: &SanitizeReport, output: &str) {
    match report.format {
        FileFormat::Empty => {
            println!("File is empty");
            return;
        }
        FileFormat::Jsonl => {
            println!("Detected JSONL format (JSON Lines)");
            println!(
                "Processed {} JSON lines ({})",
                report.lines_processed,
                format_size(report.input_bytes, DECIMAL)
            );
            if report.malformed_lines > 0 {
                println!(
                    "{} line(s) were not valid JSON and were redacted as text",
                    report.malformed_lines
                );
            }
        }
        _ => {
            println!("Detected {} format", report.format);
            println!(
                "Sanitized and saved to {} ({})",
                output,
                format_size(report.output_bytes, DECIMAL)
            );
        }
    }

    if report.redactions > 0 {
        println!("Redacted {} sensitive items", report.redactions);
    } else {
        println!("No sensitive content detected");
    }
}

fn print_dry_run(report: &DryRunReport, verbose: bool, settings: &SanitizeConfig) {
    println!("Detected {} format", report.format);

    if verbose {
        for rule in &report.matches {
            println!(
                "Would redact {} instances matching: {}",
                rule.matches.len(),
                rule.category
            );
            for (i, snippet) in rule.matches.iter().take(settings.preview_limit).enumerate() {
                println!("  {}. {}", i + 1, preview(snippet, settings.preview_width));
            }
        }
    }

    println!("Total redactions: {}", report.redactions);
}
