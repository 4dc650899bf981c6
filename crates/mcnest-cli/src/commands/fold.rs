use crate::cli::FoldArgs;
use crate::error::{CliError, Result};
use crate::fold;
use mcnest::core::models::sequence;
use tracing::info;

pub async fn run(args: FoldArgs) -> Result<()> {
    let seq = args.sequence.trim();
    if seq.is_empty() {
        return Err(CliError::Argument(
            "the sequence must not be empty".to_string(),
        ));
    }
    sequence::validate(seq).map_err(mcnest::engine::error::EngineError::from)?;

    let client = reqwest::Client::new();
    println!("Submitting sequence to the structure prediction service...");
    let pdb = fold::predict_structure(&client, seq).await?;

    std::fs::write(&args.output, pdb)?;
    info!("Structure written to {:?}", &args.output);
    println!("✓ Predicted structure written to: {}", args.output.display());

    Ok(())
}
