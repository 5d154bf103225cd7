//! Convert command handler

use anyhow::{Context, Result};

use sesh::cli::ConvertArgs;
use sesh::convert::{convert_single, ConvertBatch, SessionOutcome};
use sesh::Config;

/// Convert one session file or a whole projects directory to Markdown.
///
/// Per-file failures in directory mode are reported and skipped; the
/// command only fails when the directory itself cannot be scanned.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let opts = args.session_options(&config.convert);
    let output_dir = args.output_dir(&config.convert);

    if let Some(source) = &args.single_file {
        let outcome = convert_single(source, &output_dir, &opts)
            .with_context(|| format!("Failed to convert {}", source.display()))?;
        println!("{}", outcome.message());
        return Ok(());
    }

    let projects_dir = args.projects_dir(&config.convert);
    let batch = ConvertBatch::discover(&projects_dir)?;
    println!("Found {} JSONL files", batch.len());
    if batch.is_empty() {
        println!("Nothing to convert in {}", projects_dir.display());
        return Ok(());
    }

    // Failures are already logged as warnings by the batch.
    let outcomes = batch.run(&output_dir, &opts, |outcome| {
        if !matches!(outcome, SessionOutcome::Failed { .. }) {
            println!("{}", outcome.message());
        }
    })?;

    let converted = outcomes
        .iter()
        .filter(|o| matches!(o, SessionOutcome::Converted { .. }))
        .count();
    tracing::info!(
        converted,
        total = outcomes.len(),
        output_dir = %output_dir.display(),
        "conversion finished"
    );

    Ok(())
}
