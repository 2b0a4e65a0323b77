//! Bradesco narrative extractor.
//!
//! The richest of the institution templates: multi-clause deposit
//! breakdowns, counterparty and boleto tables, employment links and a
//! derived financial summary. Two template generations circulate: a richer
//! one carrying the cheque slice inside the deposit sentence, and a
//! simplified one splitting it out. Every breakdown is tried against the
//! richer shape first and falls back to the simplified clauses.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::config::RiskThresholds;
use crate::models::narrative::{
    Deposits, ParsedNarrative, Payments, Period, PersonDocument, Transfers,
};

use super::rules::patterns::*;
use super::rules::{
    collect_bullet_notes, extract_value_first_rows, normalize_brl, scan_crime_keywords,
};
use super::NarrativeExtractor;

/// Suspicious-activity phrases with their report labels.
const SUSPICIOUS_ACTIVITY_PHRASES: &[(&str, &str)] = &[
    ("agiotagem", "Agiotagem"),
    ("lavagem", "Lavagem de dinheiro"),
    ("sonegação", "Sonegação fiscal"),
    (
        "conta pessoal para movimentar recursos de terceiros",
        "Uso de conta pessoal para recursos de terceiros",
    ),
    (
        "pagamentos de boletos tendo terceiros como pagadores/sacados",
        "Pagamentos de boletos para terceiros",
    ),
];

/// Extractor for Bradesco report narratives.
pub struct BradescoExtractor {
    thresholds: RiskThresholds,
}

impl BradescoExtractor {
    pub fn new() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
        }
    }

    /// Override the risk-scoring thresholds.
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn extract_deposits(&self, text: &str) -> Deposits {
        let mut depositos = Deposits::default();

        // Richer template: total, count, municipalities and cheque slice in
        // one sentence
        if let Some(caps) = DEPOSITOS_DETALHADOS.captures(text) {
            depositos.total = normalize_brl(&caps[1]);
            depositos.quantidade = caps[2].parse().unwrap_or(0);
            depositos.locais = split_locais(&caps[3]);
            depositos.cheque.valor = normalize_brl(&caps[4]);
            depositos.cheque.quantidade = caps[5].parse().unwrap_or(0);
        } else if let Some(caps) = DEPOSITOS_SIMPLES.captures(text) {
            depositos.total = normalize_brl(&caps[1]);
            depositos.quantidade = caps[2].parse().unwrap_or(0);
            depositos.locais = split_locais(&caps[3]);
        }

        if let Some(caps) = DEPOSITOS_ESPECIE.captures(text) {
            depositos.especie.valor = normalize_brl(&caps[1]);
            depositos.especie.quantidade = caps[2].parse().unwrap_or(0);
        }

        // Simplified template carries the cheque slice as its own clause
        if depositos.cheque.valor == 0.0 {
            if let Some(caps) = DEPOSITOS_CHEQUE.captures(text) {
                depositos.cheque.valor = normalize_brl(&caps[1]);
                depositos.cheque.quantidade = caps[2].parse().unwrap_or(0);
            }
        }

        depositos
    }

    fn summarize(&self, record: &mut ParsedNarrative) {
        let creditos = record.creditos.total;
        let debitos = record.debitos.total;
        let resumo = &mut record.resumo_financeiro;

        resumo.saldo_periodo = creditos - debitos;

        if let Some(periodo) = &record.periodo {
            let inicio = NaiveDate::parse_from_str(&periodo.inicio, "%d.%m.%Y");
            let fim = NaiveDate::parse_from_str(&periodo.fim, "%d.%m.%Y");
            if let (Ok(inicio), Ok(fim)) = (inicio, fim) {
                let dias = (fim - inicio).num_days();
                if dias > 0 {
                    resumo.movimentacao_diaria_media = (creditos + debitos) / dias as f64;
                }
            }
        }

        let renda = record.renda_mensal.or(record.faturamento_mensal);
        if let Some(renda) = renda {
            let movimentacao = creditos + debitos;
            if movimentacao > renda * 12.0 * self.thresholds.income_multiple {
                resumo.incompatibilidade_renda = true;
                resumo
                    .indicadores_risco
                    .push("Movimentação incompatível com renda/faturamento declarado".to_string());
            }
        }

        if record.boletos.len() > self.thresholds.boleto_alert_count {
            resumo.indicadores_risco.push("Muitos boletos pagos".to_string());
        }

        if let (Some(renda), Some(depositos)) = (renda, record.creditos.depositos.as_ref()) {
            if depositos.especie.valor > renda * self.thresholds.cash_deposit_income_multiple {
                resumo
                    .indicadores_risco
                    .push("Depósitos em espécie elevados".to_string());
            }
        }

        let locais = record
            .creditos
            .depositos
            .as_ref()
            .map_or(0, |d| d.locais.len());
        if locais > self.thresholds.multi_locality_count {
            resumo
                .indicadores_risco
                .push("Depósitos em múltiplas localidades".to_string());
        }
    }
}

impl Default for BradescoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NarrativeExtractor for BradescoExtractor {
    fn extract(&self, text: &str) -> ParsedNarrative {
        // Line breaks and run-on spaces vary per export; the clause patterns
        // assume single-spaced prose
        let text = WHITESPACE.replace_all(text, " ").trim().to_string();
        debug!("parsing Bradesco narrative ({} chars)", text.len());

        let mut record = ParsedNarrative::default();

        if let Some(caps) = CONJUGE.captures(&text) {
            record.conjuge = Some(PersonDocument {
                nome: caps[1].trim().to_string(),
                cpf_cnpj: caps[2].trim().to_string(),
            });
        }

        if let Some(caps) = RENDA_MENSAL.captures(&text) {
            record.renda_mensal = Some(normalize_brl(&caps[1]));
        }

        if let Some(caps) = FATURAMENTO_MENSAL.captures(&text) {
            record.faturamento_mensal = Some(normalize_brl(&caps[1]));
        }

        if let Some(caps) = PERIODO_PONTUADO.captures(&text) {
            record.periodo = Some(Period {
                inicio: caps[1].to_string(),
                fim: caps[2].to_string(),
            });
        }

        if let Some(caps) = CREDITOS_SOMARAM.captures(&text) {
            record.creditos.total = normalize_brl(&caps[1]);
        }

        record.creditos.depositos = Some(self.extract_deposits(&text));

        let mut transferencias = Transfers::default();
        if let Some(caps) = TRANSFERENCIAS_CREDITO.captures(&text) {
            transferencias.total = normalize_brl(&caps[1]);
            transferencias.quantidade = caps[2].parse().unwrap_or(0);
        }
        record.creditos.transferencias = Some(transferencias);

        if let Some(caps) = BLOCO_REMETENTES.captures(&text) {
            record.creditos.principais_depositantes =
                extract_value_first_rows(&caps[1], &LINHA_TABELA);
        }

        if let Some(caps) = DEBITOS_TOTALIZARAM.captures(&text) {
            record.debitos.total = normalize_brl(&caps[1]);
        }

        let mut pagamentos = Payments::default();
        if let Some(caps) = PAGAMENTOS_DIVERSOS.captures(&text) {
            pagamentos.total = normalize_brl(&caps[1]);
            pagamentos.quantidade = caps[2].parse().unwrap_or(0);
        }
        record.debitos.pagamentos = Some(pagamentos);

        let mut transferencias = Transfers::default();
        if let Some(caps) = TRANSFERENCIAS_DEBITO.captures(&text) {
            transferencias.total = normalize_brl(&caps[1]);
            transferencias.quantidade = caps[2].parse().unwrap_or(0);
        }
        record.debitos.transferencias = Some(transferencias);

        if let Some(caps) = BLOCO_FAVORECIDOS.captures(&text) {
            record.debitos.principais_favorecidos =
                extract_value_first_rows(&caps[1], &LINHA_TABELA_SUBLINHADA);
        }

        if let Some(caps) = BLOCO_BOLETOS.captures(&text) {
            record.boletos = extract_value_first_rows(&caps[1], &LINHA_BOLETO)
                .into_iter()
                .map(|row| crate::models::narrative::Boleto {
                    valor: row.valor,
                    quantidade: row.quantidade,
                    nome_sacado: row.nome,
                    cpf_cnpj_sacado: row.cpf_cnpj,
                })
                .collect();
        }

        record.vinculos_empresariais = VINCULO_EMPREGATICIO
            .captures_iter(&text)
            .map(|caps| caps[1].trim().to_string())
            .collect();

        let lower = text.to_lowercase();
        record.atividades_suspeitas = SUSPICIOUS_ACTIVITY_PHRASES
            .iter()
            .filter(|(needle, _)| lower.contains(needle))
            .map(|(_, label)| label.to_string())
            .collect();

        record.notas = collect_bullet_notes(&text);

        if let Some(caps) = INFORMACOES_FINAIS_BRADESCO.captures(&text) {
            record.informacoes_finais.push(caps[1].trim().to_string());
        }

        record.possiveis_crimes = scan_crime_keywords(&text);

        self.summarize(&mut record);

        record
    }
}

fn split_locais(raw: &str) -> Vec<String> {
    raw.split(',').map(|l| l.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARRATIVE_RICH: &str = "\
Cliente possui conta conjunta com o cônjuge, Maria dos Santos, CPF 987.654.321-00, \
e declara renda mensal de R$ 5.000,00. Entre 01.01.2023 e 31.01.2023, \
os créditos somaram R$ 10.000,00, sendo R$ 20.000,00 por meio de 12 depósitos \
realizados nas praças de Campinas, Santos, Sorocaba, Niterói, destes, \
R$ 4.000,00 depositados em cheques, 3 transações, R$ 15.000,00 constando como \
efetuados em espécie, 9 transação e R$ 2.000,00 provenientes de 5 TEDs, DOCs, \
PIXs e transferências entre contas. Os débitos, em igual período, totalizaram \
R$ 4.000,00, sendo R$ 1.500,00 utilizados para pagamentos diversos, 7 transações \
e R$ 2.500,00 destinados para quitação de 4 TEDs, DOCs, PIXs, transferências e \
depósitos em contas. Cliente informou possuir vínculo empregatício com a empresa \
Alfa Comércio Ltda, sem comprovação. Notas: - cliente não apresentou documentação \
Diante do exposto, há indícios de lavagem de dinheiro na movimentação analisada.";

    #[test]
    fn test_totals_and_balance() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        assert_eq!(record.creditos.total, 10000.0);
        assert_eq!(record.debitos.total, 4000.0);
        assert_eq!(record.resumo_financeiro.saldo_periodo, 6000.0);
    }

    #[test]
    fn test_daily_average_over_30_day_span() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        let periodo = record.periodo.as_ref().unwrap();
        assert_eq!(periodo.inicio, "01.01.2023");
        assert_eq!(periodo.fim, "31.01.2023");
        // (10.000 + 4.000) / 30 dias
        assert!((record.resumo_financeiro.movimentacao_diaria_media - 466.6666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_rich_deposit_breakdown() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        let depositos = record.creditos.depositos.as_ref().unwrap();
        assert_eq!(depositos.total, 20000.0);
        assert_eq!(depositos.quantidade, 12);
        assert_eq!(depositos.locais, vec!["Campinas", "Santos", "Sorocaba", "Niterói"]);
        assert_eq!(depositos.cheque.valor, 4000.0);
        assert_eq!(depositos.cheque.quantidade, 3);
        assert_eq!(depositos.especie.valor, 15000.0);
        assert_eq!(depositos.especie.quantidade, 9);
    }

    #[test]
    fn test_simplified_template_fallback() {
        let text = "Entre 01.03.2023 e 31.03.2023, os créditos somaram R$ 8.000,00, \
sendo R$ 6.000,00 por meio de 4 depósitos realizados nas praças de Recife, Olinda \
e R$ 1.000,00 depositados em cheques, 2 transações.";
        let record = BradescoExtractor::new().extract(text);
        let depositos = record.creditos.depositos.as_ref().unwrap();
        assert_eq!(depositos.total, 6000.0);
        assert_eq!(depositos.quantidade, 4);
        assert_eq!(depositos.cheque.valor, 1000.0);
        assert_eq!(depositos.cheque.quantidade, 2);
    }

    #[test]
    fn test_spouse_income_and_transfers() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        let conjuge = record.conjuge.as_ref().unwrap();
        assert_eq!(conjuge.nome, "Maria dos Santos");
        assert_eq!(conjuge.cpf_cnpj, "987.654.321-00");
        assert_eq!(record.renda_mensal, Some(5000.0));

        let transferencias = record.creditos.transferencias.as_ref().unwrap();
        assert_eq!(transferencias.total, 2000.0);
        assert_eq!(transferencias.quantidade, 5);

        let debito_transf = record.debitos.transferencias.as_ref().unwrap();
        assert_eq!(debito_transf.total, 2500.0);
        assert_eq!(debito_transf.quantidade, 4);

        let pagamentos = record.debitos.pagamentos.as_ref().unwrap();
        assert_eq!(pagamentos.total, 1500.0);
        assert_eq!(pagamentos.quantidade, 7);
    }

    #[test]
    fn test_risk_indicators() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        let resumo = &record.resumo_financeiro;
        // 14.000 movimentados não excedem 3x a renda anual de 60.000
        assert!(!resumo.incompatibilidade_renda);
        // Espécie de 15.000 excede 2x a renda de 5.000
        assert!(resumo
            .indicadores_risco
            .contains(&"Depósitos em espécie elevados".to_string()));
        // Quatro praças excedem o limite de três
        assert!(resumo
            .indicadores_risco
            .contains(&"Depósitos em múltiplas localidades".to_string()));
    }

    #[test]
    fn test_income_incompatibility() {
        let text = "Cliente declara renda mensal de R$ 1.000,00. Entre 01.01.2023 e \
31.01.2023, os créditos somaram R$ 30.000,00. Os débitos, em igual período, \
totalizaram R$ 10.000,00.";
        let record = BradescoExtractor::new().extract(text);
        assert!(record.resumo_financeiro.incompatibilidade_renda);
        assert!(record
            .resumo_financeiro
            .indicadores_risco
            .contains(&"Movimentação incompatível com renda/faturamento declarado".to_string()));
    }

    #[test]
    fn test_employment_links_and_activities() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        assert_eq!(record.vinculos_empresariais, vec!["Alfa Comércio Ltda"]);
        assert!(record
            .atividades_suspeitas
            .contains(&"Lavagem de dinheiro".to_string()));
        assert!(record.possiveis_crimes.contains("lavagem"));
        assert!(record.possiveis_crimes.contains("indício"));
    }

    #[test]
    fn test_closing_paragraph() {
        let record = BradescoExtractor::new().extract(NARRATIVE_RICH);
        assert_eq!(record.informacoes_finais.len(), 1);
        assert!(record.informacoes_finais[0].starts_with("há indícios de lavagem"));
    }

    const NARRATIVE_TABLES: &str = "\
os créditos somaram R$ 50.000,00. Demonstramos os principais remetentes: \
12.000,00 03 Fulano de Tal 123.456.789-00 Comerciante \
Os débitos, em igual período, totalizaram R$ 20.000,00, com pagamentos de \
boletos de cobrança a terceiros e por amostragem, demonstramos os principais \
pagadores/sacados registrados na emissão dos boletos: \
R$2.000,00 2 Sicrano Pereira 111.222.333-44 \
Cliente informou não possuir relação com os sacados. \
Demonstramos os principais favorecidos: \
9.000,00___00 04 Beltrana Dias 222.333.444-55 Autônoma \
Notas: - sem outras observações";

    #[test]
    fn test_counterparty_and_boleto_tables() {
        let record = BradescoExtractor::new().extract(NARRATIVE_TABLES);

        let depositantes = &record.creditos.principais_depositantes;
        assert_eq!(depositantes.len(), 1);
        assert_eq!(depositantes[0].valor, 12000.0);
        assert_eq!(depositantes[0].quantidade, 3);
        assert_eq!(depositantes[0].nome, "Fulano de Tal");

        // Underscore padding in the payee value is tolerated
        let favorecidos = &record.debitos.principais_favorecidos;
        assert_eq!(favorecidos.len(), 1);
        assert_eq!(favorecidos[0].valor, 9000.0);
        assert_eq!(favorecidos[0].nome, "Beltrana Dias");

        assert_eq!(record.boletos.len(), 1);
        assert_eq!(record.boletos[0].valor, 2000.0);
        assert_eq!(record.boletos[0].quantidade, 2);
        assert_eq!(record.boletos[0].nome_sacado, "Sicrano Pereira");
        assert_eq!(record.boletos[0].cpf_cnpj_sacado, "111.222.333-44");
    }

    #[test]
    fn test_business_account_revenue() {
        let text = "Empresa com faturamento médio mensal de R$ 100.000,00 declarado.";
        let record = BradescoExtractor::new().extract(text);
        assert_eq!(record.faturamento_mensal, Some(100000.0));
        assert!(record.renda_mensal.is_none());
    }

    #[test]
    fn test_empty_narrative_keeps_defaults() {
        let record = BradescoExtractor::new().extract("");
        assert_eq!(record.creditos.total, 0.0);
        assert_eq!(record.debitos.total, 0.0);
        assert!(record.periodo.is_none());
        assert!(record.creditos.depositos.is_some());
        assert_eq!(record.resumo_financeiro.saldo_periodo, 0.0);
        assert!(record.possiveis_crimes.is_empty());
    }
}
