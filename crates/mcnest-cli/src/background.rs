/// Length of the SV40-style nuclear localization signal at the start of the
/// synthetic peptides this tool was built around.
const NLS_LEN: usize = 10;
/// Length of the flexible spacer that follows the NLS.
const SPACER_LEN: usize = 25;

/// Derives background-information text from a seed sequence by splitting it
/// into the segments of the reference peptide layout: an N-terminal nuclear
/// localization signal, a spacer, and a C-terminal glycine-rich linker.
/// Sequences shorter than a segment boundary simply leave the later
/// segments empty.
pub fn summarize(sequence: &str) -> String {
    let chars: Vec<char> = sequence.chars().collect();
    let nls: String = chars.iter().take(NLS_LEN).collect();
    let spacer: String = chars.iter().skip(NLS_LEN).take(SPACER_LEN).collect();
    let linker: String = chars.iter().skip(NLS_LEN + SPACER_LEN).collect();

    let mut parts = vec![format!(
        "The sequence {} is a synthetic peptide used in molecular biology and biomedical research.",
        sequence
    )];
    if !nls.is_empty() {
        parts.push(format!(
            "The first segment, \"{}\", is derived from the SV40 large T-antigen and functions as a nuclear localization signal.",
            nls
        ));
    }
    if !spacer.is_empty() {
        parts.push(format!(
            "The following segment, \"{}\", acts as a spacer, providing flexibility and minimizing steric hindrance between protein domains.",
            spacer
        ));
    }
    if !linker.is_empty() {
        parts.push(format!(
            "The final part, \"{}\", serves as a flexible linker, allowing free movement between adjacent protein domains.",
            linker
        ));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "MARTKQTARKSTGGKAPRKQLASKAARKSAARAAAAGGGGGGG";

    #[test]
    fn reference_peptide_is_split_into_three_segments() {
        let text = summarize(REFERENCE);
        assert!(text.contains("\"MARTKQTARK\""));
        assert!(text.contains("\"STGGKAPRKQLASKAARKSAARAAA\""));
        assert!(text.contains("\"AGGGGGGG\""));
    }

    #[test]
    fn short_sequences_omit_missing_segments() {
        let text = summarize("MART");
        assert!(text.contains("\"MART\""));
        assert!(!text.contains("spacer"));
        assert!(!text.contains("linker"));
    }

    #[test]
    fn empty_sequence_still_produces_a_sentence() {
        let text = summarize("");
        assert!(text.starts_with("The sequence "));
        assert!(!text.contains("segment,"));
    }
}
