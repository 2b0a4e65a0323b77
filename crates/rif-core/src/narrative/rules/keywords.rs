//! Crime-keyword scanning shared by every extractor.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Fixed risk vocabulary: (pattern, canonical lowercase tag). Patterns
    // with stem forms catch the inflections seen in real narratives
    // ("sonega", "sonegação"; "doleiro", "doleiros").
    static ref CRIME_KEYWORDS: Vec<(Regex, &'static str)> = [
        (r"(?i)agiotagem", "agiotagem"),
        (r"(?i)lavagem", "lavagem"),
        (r"(?i)fraude", "fraude"),
        (r"(?i)crime", "crime"),
        (r"(?i)ilícit[oa]", "ilícito"),
        (r"(?i)ind[ií]cio", "indício"),
        (r"(?i)suspeita", "suspeita"),
        (r"(?i)corrupção", "corrupção"),
        (r"(?i)doleir", "doleiro"),
        (r"(?i)caixa dois", "caixa dois"),
        (r"(?i)sonega", "sonegação"),
        (
            r"(?i)pessoa jurídica em conta de pessoa física",
            "pessoa jurídica em conta de pessoa física",
        ),
    ]
    .iter()
    .map(|(pattern, tag)| (Regex::new(pattern).unwrap(), *tag))
    .collect();
}

/// Scan a narrative for the fixed risk vocabulary.
///
/// Matched terms come back as deduplicated lowercase tags; a narrative with
/// no vocabulary term yields an empty set.
pub fn scan_crime_keywords(text: &str) -> BTreeSet<String> {
    CRIME_KEYWORDS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, tag)| tag.to_string())
        .collect()
}
