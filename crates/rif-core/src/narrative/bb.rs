//! Banco do Brasil narrative extractor.
//!
//! Narrower than the Bradesco template: identity and residence city, a
//! single officer line, account identifiers, credit/debit summaries with
//! per-category rows and the two counterparty lists.

use tracing::debug;

use crate::models::narrative::{EntryType, ParsedNarrative, Period, PersonDocument};

use super::rules::patterns::*;
use super::rules::{
    collect_bullet_notes, extract_name_first_rows, normalize_brl, scan_crime_keywords,
};
use super::NarrativeExtractor;

/// Extractor for Banco do Brasil report narratives.
pub struct BancoDoBrasilExtractor;

impl NarrativeExtractor for BancoDoBrasilExtractor {
    fn extract(&self, text: &str) -> ParsedNarrative {
        debug!("parsing Banco do Brasil narrative ({} chars)", text.len());

        let mut record = ParsedNarrative::default();

        if let Some(caps) = TITULAR_BB.captures(text) {
            record.titular = Some(caps[1].trim().to_string());
            record.cidade = Some(caps[2].trim().to_string());
        }

        if let Some(caps) = RENDIMENTOS_BB.captures(text) {
            record.renda_mensal = Some(normalize_brl(&caps[1]));
        }

        if let Some(caps) = SOCIO_DIRIGENTE.captures(text) {
            record.socio_diretor = Some(PersonDocument {
                nome: caps[1].trim().to_string(),
                cpf_cnpj: caps[2].trim().to_string(),
            });
        }

        record.contas = AGENCIA_CONTA
            .captures_iter(text)
            .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
            .collect();

        if let Some(caps) = PERIODO_BB.captures(text) {
            record.periodo = Some(Period {
                inicio: caps[1].to_string(),
                fim: caps[2].to_string(),
            });
        }

        if let Some(caps) = RESUMO_CREDITO_BB.captures(text) {
            record.creditos.total = normalize_brl(&caps[1]);
        }

        if let Some(caps) = RESUMO_DEBITO_BB.captures(text) {
            record.debitos.total = normalize_brl(&caps[1]);
        }

        // The per-category rows carry no side marker of their own; the
        // source template repeats one list under both summaries, so a single
        // scan feeds both groups.
        let tipos: Vec<EntryType> = TIPO_LANCAMENTO
            .captures_iter(text)
            .map(|caps| EntryType {
                quantidade: caps[1].parse().unwrap_or(0),
                tipo: caps[2].trim().to_string(),
                valor: normalize_brl(&caps[3]),
            })
            .collect();
        record.creditos.tipos = tipos.clone();
        record.debitos.tipos = tipos;

        if let Some(caps) = BLOCO_DEPOSITANTES_BB.captures(text) {
            record.creditos.principais_depositantes = extract_name_first_rows(&caps[1]);
        }

        if let Some(caps) = BLOCO_DESTINATARIOS_BB.captures(text) {
            record.debitos.principais_favorecidos = extract_name_first_rows(&caps[1]);
        }

        record.notas = collect_bullet_notes(text);

        if let Some(caps) = INFORMACOES_FINAIS_BB.captures(text) {
            record.informacoes_finais.push(caps[1].trim().to_string());
        }

        record.possiveis_crimes = scan_crime_keywords(text);

        record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NARRATIVE: &str = "\
Titular cadastrado como: João Pereira Lima, empresário, residente na cidade de Uberlândia.
Percebe rendimentos de R$ 12.000,00 mensais.
Sócio/Dirigente : Carlos Andrade - 12.345.678/0001-55
Contas analisadas: 1234 / 56.789 e 4321 / 98.765
Período analisado: 01/02/2023 - 28/02/2023
Resumo de lançamentos a crédito totais no período Total R$ 90.000,00:
12 TED RECEBIDA - R$ 60.000,00
30 DEPOSITO EM DINHEIRO - R$ 30.000,00
Principais remetentes/depositantes identificados:
Marcos Oliveira - 123.456.789-00 (Produtor rural) - 8 lançamento(s) no total de: R$25.000,00
Comercial Beta Ltda - 12.345.678/0001-99 (Atacadista) - 3 lançamento(s) no total de: R$18.000,00
Resumo de lançamentos a débito totais no período Total R$ 70.000,00:
Principais destinatários de recursos identificados:
Distribuidora Gama - 98.765.432/0001-11 (Distribuidora) - 5 lançamento(s) no total de: R$40.000,00
Movimentação no período não é compatível com a renda declarada, havendo suspeita de interposição.";

    #[test]
    fn test_identity_and_accounts() {
        let record = BancoDoBrasilExtractor.extract(NARRATIVE);
        assert_eq!(record.titular.as_deref(), Some("João Pereira Lima"));
        assert_eq!(record.cidade.as_deref(), Some("Uberlândia"));
        assert_eq!(record.renda_mensal, Some(12000.0));

        let socio = record.socio_diretor.as_ref().unwrap();
        assert_eq!(socio.nome, "Carlos Andrade");
        assert_eq!(socio.cpf_cnpj, "12.345.678/0001-55");

        assert!(record.contas.contains(&"1234/56.789".to_string()));
        assert!(record.contas.contains(&"4321/98.765".to_string()));
    }

    #[test]
    fn test_period_and_totals() {
        let record = BancoDoBrasilExtractor.extract(NARRATIVE);
        let periodo = record.periodo.as_ref().unwrap();
        assert_eq!(periodo.inicio, "01/02/2023");
        assert_eq!(periodo.fim, "28/02/2023");
        assert_eq!(record.creditos.total, 90000.0);
        assert_eq!(record.debitos.total, 70000.0);
    }

    #[test]
    fn test_entry_type_rows() {
        let record = BancoDoBrasilExtractor.extract(NARRATIVE);
        let ted = record
            .creditos
            .tipos
            .iter()
            .find(|t| t.tipo.contains("TED"))
            .unwrap();
        assert_eq!(ted.quantidade, 12);
        assert_eq!(ted.valor, 60000.0);

        let dinheiro = record
            .creditos
            .tipos
            .iter()
            .find(|t| t.tipo.contains("DINHEIRO"))
            .unwrap();
        assert_eq!(dinheiro.quantidade, 30);
        assert_eq!(dinheiro.valor, 30000.0);
    }

    #[test]
    fn test_counterparty_tables() {
        let record = BancoDoBrasilExtractor.extract(NARRATIVE);

        let depositantes = &record.creditos.principais_depositantes;
        assert_eq!(depositantes.len(), 2);
        assert_eq!(depositantes[0].nome, "Marcos Oliveira");
        assert_eq!(depositantes[0].profissao.as_deref(), Some("Produtor rural"));
        assert_eq!(depositantes[0].quantidade, 8);
        assert_eq!(depositantes[0].valor, 25000.0);
        assert_eq!(depositantes[1].cpf_cnpj, "12.345.678/0001-99");

        let favorecidos = &record.debitos.principais_favorecidos;
        assert_eq!(favorecidos.len(), 1);
        assert_eq!(favorecidos[0].nome, "Distribuidora Gama");
        assert_eq!(favorecidos[0].valor, 40000.0);
    }

    #[test]
    fn test_closing_paragraph_and_crimes() {
        let record = BancoDoBrasilExtractor.extract(NARRATIVE);
        assert_eq!(record.informacoes_finais.len(), 1);
        assert!(record.informacoes_finais[0].contains("renda declarada"));
        assert!(record.possiveis_crimes.contains("suspeita"));
    }

    #[test]
    fn test_empty_narrative_keeps_defaults() {
        let record = BancoDoBrasilExtractor.extract("");
        assert!(record.titular.is_none());
        assert!(record.contas.is_empty());
        assert_eq!(record.creditos.total, 0.0);
        assert!(record.creditos.tipos.is_empty());
        assert!(record.possiveis_crimes.is_empty());
    }
}
