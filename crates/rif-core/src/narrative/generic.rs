//! Generic fallback extractor for institutions without a dedicated template.
//!
//! Each field is resolved by trying an ordered list of phrasing
//! alternatives, stopping at the first match; fields are independent of one
//! another. The record always discloses its reduced precision.

use regex::Regex;
use tracing::debug;

use crate::models::narrative::{EntryType, ParsedNarrative, Period};

use super::rules::patterns::*;
use super::rules::{normalize_brl, scan_crime_keywords};
use super::NarrativeExtractor;

/// Fallback extractor for unrecognized reporting institutions.
pub struct GenericExtractor;

impl NarrativeExtractor for GenericExtractor {
    fn extract(&self, text: &str) -> ParsedNarrative {
        debug!("parsing narrative with generic fallback ({} chars)", text.len());

        let mut record = ParsedNarrative::default();

        if let Some(caps) = first_match(&GENERICO_TITULAR, text) {
            record.titular = Some(caps[1].trim().to_string());
        }

        if let Some(caps) = first_match(&GENERICO_CPF, text) {
            record.cpf = Some(caps[1].trim().to_string());
        }

        if let Some(caps) = first_match(&GENERICO_PERIODO, text) {
            record.periodo = Some(Period {
                inicio: caps[1].to_string(),
                fim: caps[2].to_string(),
            });
        }

        if let Some(caps) = first_match(&GENERICO_RENDA, text) {
            record.renda_mensal = Some(normalize_brl(&caps[1]));
        }

        if let Some(caps) = first_match(&GENERICO_CREDITOS, text) {
            record.creditos.total = normalize_brl(&caps[1]);
        }

        if let Some(caps) = first_match(&GENERICO_DEBITOS, text) {
            record.debitos.total = normalize_brl(&caps[1]);
        }

        for (campo, pattern) in CAMPOS_NUMERADOS.iter() {
            if let Some(caps) = pattern.captures(text) {
                record
                    .campos
                    .insert(campo.to_string(), normalize_brl(&caps[1]));
            }
        }

        // Transfer counts show up even in free-form narratives; the value
        // split is unknown, so a fixed 30% share of total credits stands in
        let contagens: Vec<u32> = CONTAGEM_TRANSFERENCIAS
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        if !contagens.is_empty() {
            record.creditos.tipos.push(EntryType {
                tipo: "Transferências".to_string(),
                quantidade: contagens.iter().sum(),
                valor: record.creditos.total * 0.3,
            });
        }

        record.possiveis_crimes = scan_crime_keywords(text);

        record
            .notas
            .push("Parser genérico - extração limitada de informações".to_string());
        record
            .notas
            .push("Recomenda-se implementar parser específico para melhor precisão".to_string());
        record
            .informacoes_finais
            .push("Este relatório foi processado com parser genérico".to_string());
        record.informacoes_finais.push(
            "Para melhor análise, considere implementar parser específico para este banco"
                .to_string(),
        );

        record
    }
}

fn first_match<'t>(alternatives: &[Regex], text: &'t str) -> Option<regex::Captures<'t>> {
    alternatives.iter().find_map(|pattern| pattern.captures(text))
}
