//! Bullet-note collection.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BULLET_NOTE: Regex = Regex::new(r"- ([^-]+)").unwrap();
}

/// Collect free-running `- <fragment>` bullet clauses from a narrative.
///
/// The bullet shape is syntactically ambiguous: any hyphen-prefixed clause
/// counts as a note, so hyphenated prose is over-captured. Known precision
/// limitation of the source templates, kept visible here rather than folded
/// into the field extractions.
pub fn collect_bullet_notes(text: &str) -> Vec<String> {
    BULLET_NOTE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_bullet_lines() {
        let notes = collect_bullet_notes("Notas: - cliente não atendeu contato - conta encerrada em seguida");
        assert_eq!(
            notes,
            vec![
                "cliente não atendeu contato".to_string(),
                "conta encerrada em seguida".to_string(),
            ]
        );
    }

    #[test]
    fn test_over_captures_hyphenated_prose() {
        // A mid-sentence hyphen also produces a "note"; documented behavior.
        let notes = collect_bullet_notes("transferências intra - bancárias no período");
        assert_eq!(notes, vec!["bancárias no período".to_string()]);
    }

    #[test]
    fn test_no_bullets() {
        assert!(collect_bullet_notes("Sem observações adicionais.").is_empty());
    }
}
