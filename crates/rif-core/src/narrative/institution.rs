//! Reporting-institution dispatch.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{
    BancoDoBrasilExtractor, BradescoExtractor, GenericExtractor, NarrativeExtractor,
    NubankExtractor,
};

lazy_static! {
    static ref BRADESCO: BradescoExtractor = BradescoExtractor::new();
    static ref BANCO_DO_BRASIL: BancoDoBrasilExtractor = BancoDoBrasilExtractor;
    static ref NUBANK: NubankExtractor = NubankExtractor;
    static ref GENERIC: GenericExtractor = GenericExtractor;
}

/// Reporting institutions with a dedicated narrative extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Institution {
    Bradesco,
    BancoDoBrasil,
    Nubank,
    /// Any institution without a dedicated extractor.
    Other,
}

impl Institution {
    /// Resolve the declared reporting-institution name.
    ///
    /// The name is lowercased, stripped of periods/commas/hyphens and
    /// squeezed to single spaces before matching. First match wins:
    /// "bradesco" anywhere, then "banco do brasil" or a leading "bb" token,
    /// then "nubank"/"nu pagamentos"; everything else falls back to
    /// [`Institution::Other`].
    pub fn detect(name: &str) -> Self {
        let cleaned = name.to_lowercase().replace(['.', ',', '-'], "");
        let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized.contains("bradesco") {
            Institution::Bradesco
        } else if normalized.contains("banco do brasil")
            || normalized.split_whitespace().next() == Some("bb")
        {
            Institution::BancoDoBrasil
        } else if normalized.contains("nubank") || normalized.contains("nu pagamentos") {
            Institution::Nubank
        } else {
            Institution::Other
        }
    }

    /// The extractor dedicated to this institution.
    pub fn extractor(&self) -> &'static dyn NarrativeExtractor {
        match self {
            Institution::Bradesco => &*BRADESCO,
            Institution::BancoDoBrasil => &*BANCO_DO_BRASIL,
            Institution::Nubank => &*NUBANK,
            Institution::Other => &*GENERIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_bradesco_any_form() {
        assert_eq!(Institution::detect("Banco Bradesco S.A."), Institution::Bradesco);
        assert_eq!(Institution::detect("BRADESCO S/A"), Institution::Bradesco);
        assert_eq!(Institution::detect("banco  bradesco"), Institution::Bradesco);
    }

    #[test]
    fn test_detect_banco_do_brasil() {
        assert_eq!(
            Institution::detect("Banco do Brasil S.A."),
            Institution::BancoDoBrasil
        );
        assert_eq!(Institution::detect("BB"), Institution::BancoDoBrasil);
        assert_eq!(Institution::detect("B.B. Administradora"), Institution::BancoDoBrasil);
    }

    #[test]
    fn test_detect_nubank() {
        assert_eq!(Institution::detect("Nubank"), Institution::Nubank);
        assert_eq!(
            Institution::detect("Nu Pagamentos S.A."),
            Institution::Nubank
        );
    }

    #[test]
    fn test_unrecognized_falls_back() {
        assert_eq!(Institution::detect("Banco XYZ"), Institution::Other);
        assert_eq!(Institution::detect(""), Institution::Other);
    }

    #[test]
    fn test_leading_bb_token_only() {
        // "bb" must be the first token, not a substring
        assert_eq!(Institution::detect("Clube BB"), Institution::Other);
    }
}
