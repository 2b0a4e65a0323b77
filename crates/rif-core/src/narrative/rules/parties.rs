//! Counterparty table recovery.
//!
//! Two tabular row shapes occur inside narrative prose: the value-first rows
//! of Bradesco remitter/payee/boleto blocks, and the name-first lines of the
//! Banco do Brasil depositor/recipient lists.

use regex::Regex;

use super::money::normalize_brl;
use super::patterns::LINHA_CONTRAPARTE_BB;
use crate::models::narrative::Counterparty;

/// Recover `<valor> <qtde> <nome> <documento>` rows from a table block.
///
/// The row pattern is supplied by the caller because the payee variant
/// tolerates underscore-padded values.
pub fn extract_value_first_rows(block: &str, row: &Regex) -> Vec<Counterparty> {
    row.captures_iter(block)
        .map(|caps| Counterparty {
            valor: normalize_brl(&caps[1]),
            quantidade: caps[2].parse().unwrap_or(0),
            nome: caps[3].trim().to_string(),
            cpf_cnpj: caps[4].trim().to_string(),
            profissao: None,
        })
        .collect()
}

/// Recover BB-style `nome - documento (profissão) - N lançamento(s)` lines
/// from a table block. Accepts all four Brazilian tax-ID layouts.
pub fn extract_name_first_rows(block: &str) -> Vec<Counterparty> {
    LINHA_CONTRAPARTE_BB
        .captures_iter(block)
        .map(|caps| Counterparty {
            nome: caps[1].trim().to_string(),
            cpf_cnpj: caps[2].trim().to_string(),
            profissao: Some(caps[3].trim().to_string()),
            quantidade: caps[4].parse().unwrap_or(0),
            valor: normalize_brl(&caps[5]),
        })
        .collect()
}
