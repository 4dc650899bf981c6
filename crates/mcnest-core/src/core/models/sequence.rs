use phf::phf_map;
use thiserror::Error;

/// Kyte-Doolittle hydropathy index for the 20 canonical amino acids,
/// keyed by one-letter code. The map keys double as the recognized alphabet.
static HYDROPATHY: phf::Map<char, f64> = phf_map! {
    'A' => 1.8,  // Alanine
    'R' => -4.5, // Arginine
    'N' => -3.5, // Asparagine
    'D' => -3.5, // Aspartic Acid
    'C' => 2.5,  // Cysteine
    'Q' => -3.5, // Glutamine
    'E' => -3.5, // Glutamic Acid
    'G' => -0.4, // Glycine
    'H' => -3.2, // Histidine
    'I' => 4.5,  // Isoleucine
    'L' => 3.8,  // Leucine
    'K' => -3.9, // Lysine
    'M' => 1.9,  // Methionine
    'F' => 2.8,  // Phenylalanine
    'P' => -1.6, // Proline
    'S' => -0.8, // Serine
    'T' => -0.7, // Threonine
    'W' => -0.9, // Tryptophan
    'Y' => -1.3, // Tyrosine
    'V' => 4.2,  // Valine
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid residue code '{code}' at position {position}")]
    InvalidResidue { code: char, position: usize },
}

/// Returns true if `code` is one of the 20 canonical one-letter residue codes.
pub fn is_canonical_residue(code: char) -> bool {
    HYDROPATHY.contains_key(&code)
}

/// Returns the Kyte-Doolittle hydropathy value for a canonical residue code.
pub fn hydropathy(code: char) -> Option<f64> {
    HYDROPATHY.get(&code).copied()
}

/// Checks that every character of `sequence` is a canonical residue code.
///
/// An empty sequence is valid here; emptiness is a scoring-time concern,
/// not an alphabet concern.
pub fn validate(sequence: &str) -> Result<(), SequenceError> {
    for (position, code) in sequence.chars().enumerate() {
        if !is_canonical_residue(code) {
            return Err(SequenceError::InvalidResidue { code, position });
        }
    }
    Ok(())
}
