//! Nubank narrative extractor.
//!
//! Deliberately lower-fidelity: the Nubank narrative format is far less
//! standardized than Bradesco/BB, so this extractor runs loose,
//! order-independent lookups and always discloses its partial coverage in
//! the record itself.

use tracing::debug;

use crate::models::narrative::{ParsedNarrative, Period};

use super::rules::patterns::*;
use super::rules::{normalize_brl, scan_crime_keywords};
use super::NarrativeExtractor;

/// Extractor for Nubank report narratives.
pub struct NubankExtractor;

impl NarrativeExtractor for NubankExtractor {
    fn extract(&self, text: &str) -> ParsedNarrative {
        debug!("parsing Nubank narrative ({} chars)", text.len());

        let mut record = ParsedNarrative::default();

        if let Some(caps) = TITULAR_EM_NOME.captures(text) {
            record.titular = Some(caps[1].trim().to_string());
        }

        if let Some(caps) = CPF_SOLTO.captures(text) {
            record.cpf = Some(caps[1].trim().to_string());
        }

        if let Some(caps) = PERIODO_BARRADO.captures(text) {
            record.periodo = Some(Period {
                inicio: caps[1].to_string(),
                fim: caps[2].to_string(),
            });
        }

        if let Some(caps) = RENDA_LIVRE.captures(text) {
            record.renda_mensal = Some(normalize_brl(&caps[1]));
        }

        if let Some(caps) = CREDITOS_LIVRE.captures(text) {
            record.creditos.total = normalize_brl(&caps[1]);
        }

        if let Some(caps) = DEBITOS_LIVRE.captures(text) {
            record.debitos.total = normalize_brl(&caps[1]);
        }

        for (campo, pattern) in CAMPOS_NUMERADOS.iter() {
            if let Some(caps) = pattern.captures(text) {
                record
                    .campos
                    .insert(campo.to_string(), normalize_brl(&caps[1]));
            }
        }

        record.possiveis_crimes = scan_crime_keywords(text);

        record
            .notas
            .push("Parser básico - informações limitadas extraídas".to_string());
        record
            .informacoes_finais
            .push("Este relatório foi processado com parser básico do Nubank".to_string());

        record
    }
}
