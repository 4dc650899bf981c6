use crate::background;
use crate::cli::SearchArgs;
use crate::config::PartialSearchConfig;
use crate::error::{CliError, Result};
use crate::fold;
use crate::utils::progress::CliProgressHandler;
use mcnest::{
    engine::evaluation::GravyEvaluator,
    engine::generation::LinkerExtensionGenerator,
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::PathBuf;
use tracing::{info, warn};

pub async fn run(args: SearchArgs) -> Result<()> {
    let seed_sequence = args.sequence.trim().to_owned();
    if seed_sequence.is_empty() {
        return Err(CliError::Argument(
            "the seed sequence must not be empty".to_string(),
        ));
    }

    let partial_config = match &args.config {
        Some(path) => PartialSearchConfig::from_file(path)?,
        None => PartialSearchConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let default_background = background::summarize(&seed_sequence);
    let (config, linker_unit) = partial_config.merge_with_cli(&args, default_background)?;

    let generator = match linker_unit {
        Some(unit) => LinkerExtensionGenerator::new(unit)?,
        None => LinkerExtensionGenerator::default(),
    };
    let evaluator = GravyEvaluator;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting rollout search...");
    info!("Invoking the core search workflow...");

    let result = tokio::task::block_in_place(|| {
        workflows::search::run(&seed_sequence, &config, &generator, &evaluator, &reporter)
    })?;

    println!("{}", result.best_hypothesis);
    println!("Modified sequence: {}", result.best_candidate.sequence);
    info!(
        score = result.best_candidate.score,
        generation = result.best_candidate.generation,
        "Search workflow finished."
    );

    if args.fold {
        fold_best_candidate(&result.best_candidate.sequence, args.output).await;
    }

    Ok(())
}

/// Folding the winner is best-effort: a failed prediction is reported as a
/// warning and leaves the search result intact, matching the original
/// application's handling of the service.
async fn fold_best_candidate(sequence: &str, output: Option<PathBuf>) {
    let client = reqwest::Client::new();
    match fold::predict_structure(&client, sequence).await {
        Ok(pdb) => {
            let output_path =
                output.unwrap_or_else(|| PathBuf::from("mcnest-best-candidate.pdb"));
            match std::fs::write(&output_path, pdb) {
                Ok(()) => {
                    println!("✓ Predicted structure written to: {}", output_path.display());
                }
                Err(e) => {
                    warn!("Failed to write structure file: {}", e);
                    eprintln!("Warning: failed to write structure file: {}", e);
                }
            }
        }
        Err(e) => {
            warn!("Structure prediction failed: {}", e);
            eprintln!("Warning: failed to predict structure: {}. You may retry manually.", e);
        }
    }
}
