//! Canonical record produced by the narrative extractors.
//!
//! The envelope (titular, periodo, creditos, debitos, notas,
//! informacoes_finais, possiveis_crimes) has the same shape for every
//! institution; institution-specific sub-structures are additive and only
//! serialized when populated. Absent data is an explicit `null`, `0.0` or
//! empty sequence, never an omitted envelope key.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A parsed financial-intelligence narrative.
///
/// Immutable value: produced once per communication, holds no reference to
/// the source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedNarrative {
    /// Account-holder name, when the narrative declares one.
    pub titular: Option<String>,

    /// Spouse/co-holder identity (Bradesco narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjuge: Option<PersonDocument>,

    /// Account-holder tax ID (Nubank and generic narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Residence city (Banco do Brasil narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,

    /// Company officer identity (Banco do Brasil narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socio_diretor: Option<PersonDocument>,

    /// Analyzed account identifiers in `agencia/conta` form (Banco do
    /// Brasil narratives).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contas: Vec<String>,

    /// Declared monthly income (natural persons).
    pub renda_mensal: Option<f64>,

    /// Declared monthly revenue (business accounts).
    pub faturamento_mensal: Option<f64>,

    /// Reporting period, kept verbatim in the source template's date format.
    pub periodo: Option<Period>,

    /// Credit-side aggregates and breakdowns.
    pub creditos: Credits,

    /// Debit-side aggregates and breakdowns.
    pub debitos: Debits,

    /// Billed-document ("boleto") table (Bradesco narratives).
    pub boletos: Vec<Boleto>,

    /// Free-running bullet fragments carried through for human review.
    pub notas: Vec<String>,

    /// Closing free-text paragraphs carried through for human review.
    pub informacoes_finais: Vec<String>,

    /// Matched risk-keyword tags, case-folded and deduplicated.
    pub possiveis_crimes: BTreeSet<String>,

    /// Declared employment links (Bradesco narratives).
    pub vinculos_empresariais: Vec<String>,

    /// Matched suspicious-activity phrases (Bradesco narratives).
    pub atividades_suspeitas: Vec<String>,

    /// Opportunistic numbered-field values (`CampoA`..`CampoE`) found in the
    /// prose (Nubank and generic narratives).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub campos: BTreeMap<String, f64>,

    /// Derived balance and risk indicators. Computed, never extracted.
    pub resumo_financeiro: FinancialSummary,
}

/// A named party with a tax ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDocument {
    pub nome: String,
    pub cpf_cnpj: String,
}

/// Reporting period endpoints, verbatim from the source template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub inicio: String,
    pub fim: String,
}

/// Credit-side group of the canonical envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    /// Aggregate credit total for the period.
    pub total: f64,

    /// Per-category quantity/value rows (Banco do Brasil narratives).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tipos: Vec<EntryType>,

    /// Deposit breakdown (Bradesco narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depositos: Option<Deposits>,

    /// Incoming interbank-transfer breakdown (Bradesco narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferencias: Option<Transfers>,

    /// Principal remitters/depositors.
    pub principais_depositantes: Vec<Counterparty>,
}

/// Debit-side group of the canonical envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debits {
    /// Aggregate debit total for the period.
    pub total: f64,

    /// Per-category quantity/value rows (Banco do Brasil narratives).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tipos: Vec<EntryType>,

    /// Sundry-payment breakdown (Bradesco narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagamentos: Option<Payments>,

    /// Outgoing interbank-transfer breakdown (Bradesco narratives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferencias: Option<Transfers>,

    /// Principal payees/recipients of funds.
    pub principais_favorecidos: Vec<Counterparty>,
}

/// One quantity/value row keyed by a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryType {
    pub tipo: String,
    pub quantidade: u32,
    pub valor: f64,
}

/// Deposit sub-breakdown embedded in Bradesco prose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deposits {
    pub total: f64,
    pub quantidade: u32,
    /// Municipalities ("praças") where the deposits were made.
    pub locais: Vec<String>,
    /// Cheque deposit slice.
    pub cheque: DepositSlice,
    /// In-person ("espécie") deposit slice.
    pub especie: DepositSlice,
}

/// Value/count pair of one deposit modality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositSlice {
    pub valor: f64,
    pub quantidade: u32,
}

/// Interbank-transfer totals with per-kind counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transfers {
    pub total: f64,
    pub quantidade: u32,
    pub tipos: TransferKinds,
}

/// Transfer counts by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferKinds {
    #[serde(rename = "TED")]
    pub ted: u32,
    #[serde(rename = "DOC")]
    pub doc: u32,
    #[serde(rename = "PIX")]
    pub pix: u32,
    #[serde(rename = "OUTROS")]
    pub outros: u32,
}

/// Sundry-payment totals on the debit side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payments {
    pub total: f64,
    pub quantidade: u32,
    /// Collection ("cobrança") slice of the payment total.
    pub cobranca: f64,
}

/// A counterparty row recovered from a tabular block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub nome: String,
    pub cpf_cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profissao: Option<String>,
    pub quantidade: u32,
    pub valor: f64,
}

/// A billed-document row recovered from the Bradesco boleto table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boleto {
    pub valor: f64,
    pub quantidade: u32,
    pub nome_sacado: String,
    pub cpf_cnpj_sacado: String,
}

/// Derived balance, movement and risk indicators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// `creditos.total - debitos.total`.
    pub saldo_periodo: f64,

    /// `(creditos.total + debitos.total)` over the whole-day span of the
    /// reporting period; `0.0` when the span is zero or dates fail to parse.
    pub movimentacao_diaria_media: f64,

    /// Movement exceeds the declared-income compatibility threshold.
    pub incompatibilidade_renda: bool,

    /// Heuristic compliance flags, not legal determinations.
    pub indicadores_risco: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_defaults_serialize_explicitly() {
        let record = ParsedNarrative::default();
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert!(json["titular"].is_null());
        assert!(json["periodo"].is_null());
        assert_eq!(json["creditos"]["total"], 0.0);
        assert_eq!(json["debitos"]["total"], 0.0);
        assert!(json["notas"].as_array().unwrap().is_empty());
        assert!(json["possiveis_crimes"].as_array().unwrap().is_empty());
        assert_eq!(json["resumo_financeiro"]["saldo_periodo"], 0.0);

        // Institution-specific fields stay additive.
        assert!(json.get("conjuge").is_none());
        assert!(json.get("socio_diretor").is_none());
        assert!(json.get("campos").is_none());
    }

    #[test]
    fn test_transfer_kinds_serialize_uppercase() {
        let json = serde_json::to_value(TransferKinds::default()).unwrap();
        assert_eq!(json["TED"], 0);
        assert_eq!(json["OUTROS"], 0);
    }

    #[test]
    fn test_counterparty_profession_is_optional() {
        let row = Counterparty {
            nome: "Fulano de Tal".to_string(),
            cpf_cnpj: "123.456.789-00".to_string(),
            profissao: None,
            quantidade: 2,
            valor: 1500.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("profissao").is_none());
    }
}
