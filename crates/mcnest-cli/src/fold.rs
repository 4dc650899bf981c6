use crate::error::{CliError, Result};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

/// ESMFold prediction endpoint. Takes the raw sequence as a URL-encoded
/// body and returns a PDB-format structure file.
const FOLD_URL: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";

/// Submits `sequence` to the structure prediction service.
///
/// Any non-success status becomes [`CliError::ExternalService`] carrying the
/// status code. The service is never retried automatically; callers decide
/// whether a failure is fatal or a user-facing warning.
pub async fn predict_structure(client: &reqwest::Client, sequence: &str) -> Result<String> {
    info!(
        residues = sequence.chars().count(),
        "Submitting sequence to the structure prediction service."
    );
    let response = client
        .post(FOLD_URL)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(sequence.to_owned())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ExternalService {
            status: status.as_u16(),
        });
    }

    let pdb = response.text().await?;
    debug!(bytes = pdb.len(), "Received structure payload.");
    Ok(pdb)
}
