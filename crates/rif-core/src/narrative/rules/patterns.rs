//! Compiled regex templates for Brazilian narrative extraction.
//!
//! All patterns are compiled once and shared read-only across callers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace normalization applied before the Bradesco passes
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Bradesco identity and income clauses
    pub static ref CONJUGE: Regex = Regex::new(
        r"(?i)cônjuge,\s*([\w\s\.\-]+),\s*CPF\s*([\d\-\.]+)"
    ).unwrap();

    pub static ref RENDA_MENSAL: Regex = Regex::new(
        r"(?i)renda mensal de R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref FATURAMENTO_MENSAL: Regex = Regex::new(
        r"(?i)faturamento (?:médio )?mensal de R\$\s*([\d\.,]+)"
    ).unwrap();

    // Period clauses (dotted form in Bradesco prose, slashed in Nubank/BB)
    pub static ref PERIODO_PONTUADO: Regex = Regex::new(
        r"Entre (\d{2}\.\d{2}\.\d{4}) e (\d{2}\.\d{2}\.\d{4})"
    ).unwrap();

    pub static ref PERIODO_BARRADO: Regex = Regex::new(
        r"Entre (\d{2}/\d{2}/\d{4}) e (\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Bradesco credit side
    pub static ref CREDITOS_SOMARAM: Regex = Regex::new(
        r"os créditos somaram R\$\s*([\d\.,]+)"
    ).unwrap();

    // Richer deposit clause: total, count, municipality list and cheque slice
    // in a single sentence
    pub static ref DEPOSITOS_DETALHADOS: Regex = Regex::new(
        r"sendo R\$ ([\d\.,]+) por meio de (\d+) depósitos realizados nas praças de ([^,]+(?:, [^,]+)*),? destes, R\$ ([\d\.,]+) depositados em cheques, (\d+) transações"
    ).unwrap();

    // Simplified template fallback: total, count and municipalities only
    pub static ref DEPOSITOS_SIMPLES: Regex = Regex::new(
        r"sendo R\$ ([\d\.,]+) por meio de (\d+) depósitos realizados nas praças de ([^,]+(?:, [^,]+)*)"
    ).unwrap();

    pub static ref DEPOSITOS_ESPECIE: Regex = Regex::new(
        r"R\$ ([\d\.,]+) constando como efetuados em espécie, (\d+) transação"
    ).unwrap();

    // Standalone cheque clause used by the simplified template
    pub static ref DEPOSITOS_CHEQUE: Regex = Regex::new(
        r"R\$ ([\d\.,]+) depositados em cheques, (\d+) transações"
    ).unwrap();

    pub static ref TRANSFERENCIAS_CREDITO: Regex = Regex::new(
        r"(?i)R\$ ([\d\.,]+) provenientes de (\d+) TEDs, DOCs, PIXs e transferências entre contas"
    ).unwrap();

    pub static ref BLOCO_REMETENTES: Regex = Regex::new(
        r"(?s)Demonstramos os principais remetentes:(.+?)(?:Os débitos|Notas:)"
    ).unwrap();

    // Bradesco debit side
    pub static ref DEBITOS_TOTALIZARAM: Regex = Regex::new(
        r"Os débitos, em igual período, totalizaram R\$ ([\d\.,]+)"
    ).unwrap();

    pub static ref PAGAMENTOS_DIVERSOS: Regex = Regex::new(
        r"R\$ ([\d\.,]+) utilizados para pagamentos diversos, (\d+) transações"
    ).unwrap();

    pub static ref TRANSFERENCIAS_DEBITO: Regex = Regex::new(
        r"R\$ ([\d\.,]+) destinados para quitação de (\d+) TEDs, DOCs, PIXs, transferências e depósitos em contas"
    ).unwrap();

    pub static ref BLOCO_FAVORECIDOS: Regex = Regex::new(
        r"(?s)Demonstramos os principais favorecidos:(.+?)(?:Notas:|Diante do exposto)"
    ).unwrap();

    // Tabular rows: value, count, name, document. The payee variant tolerates
    // underscore padding leaked by malformed exports.
    pub static ref LINHA_TABELA: Regex = Regex::new(
        r"(\d{1,3}(?:\.\d{3})*(?:,\d{2})*)\s+(\d+)\s+([\w\s\.\-]+?)\s+([\d\-/\.]+)\s+[\w\s\(\)/-]+"
    ).unwrap();

    pub static ref LINHA_TABELA_SUBLINHADA: Regex = Regex::new(
        r"(\d{1,3}(?:\.\d{3})*(?:,\d{2})*(?:___\d{2})?)\s+(\d+)\s+([\w\s\.\-]+?)\s+([\d\-/\.]+)\s+[\w\s\(\)/-]+"
    ).unwrap();

    // Boleto table
    pub static ref BLOCO_BOLETOS: Regex = Regex::new(
        r"(?s)pagamentos de boletos de cobrança a terceiros e por amostragem, demonstramos os principais pagadores/sacados registrados na emissão dos boletos:(.+?)Cliente informou"
    ).unwrap();

    pub static ref LINHA_BOLETO: Regex = Regex::new(
        r"R\$([\d\.,]+)\s+(\d+)\s+([\w\s\.\-]+?)\s+([\d\-/\.]+)"
    ).unwrap();

    pub static ref VINCULO_EMPREGATICIO: Regex = Regex::new(
        r"(?i)vínculo empregatício com a empresa ([^,]+)"
    ).unwrap();

    pub static ref INFORMACOES_FINAIS_BRADESCO: Regex = Regex::new(
        r"(?s)Diante do exposto,(.+)"
    ).unwrap();

    // Banco do Brasil clauses
    pub static ref TITULAR_BB: Regex = Regex::new(
        r"(?i)cadastrado como:\s*([\w\s\-]+),.*residente na cidade de ([^\.\n]+)"
    ).unwrap();

    pub static ref RENDIMENTOS_BB: Regex = Regex::new(
        r"(?i)rendimentos de R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref SOCIO_DIRIGENTE: Regex = Regex::new(
        r"Sócio/Dirigente\s*:\s*([\w\s\-\.]+)\s*-\s*([\d\./\-]+)"
    ).unwrap();

    pub static ref AGENCIA_CONTA: Regex = Regex::new(
        r"(\d{4})\s*/\s*([\d\.]+)"
    ).unwrap();

    pub static ref PERIODO_BB: Regex = Regex::new(
        r"Período analisado: (\d{2}/\d{2}/\d{4}) - (\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref RESUMO_CREDITO_BB: Regex = Regex::new(
        r"(?s)Resumo de lançamentos a crédito.*?Total R\$ ([\d\.,]+):"
    ).unwrap();

    pub static ref RESUMO_DEBITO_BB: Regex = Regex::new(
        r"(?s)Resumo de lançamentos a débito.*?Total R\$ ([\d\.,]+):"
    ).unwrap();

    pub static ref TIPO_LANCAMENTO: Regex = Regex::new(
        r"(\d+)\s+([A-Z\s/\(\)]+)\s*-\s*R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref BLOCO_DEPOSITANTES_BB: Regex = Regex::new(
        r"(?s)Principais remetentes/depositantes identificados:(.+?)Resumo de lançamentos a débito"
    ).unwrap();

    pub static ref BLOCO_DESTINATARIOS_BB: Regex = Regex::new(
        r"(?s)Principais destinatários de recursos identificados:(.+?)Movimentação no período"
    ).unwrap();

    // Counterparty line: name, one of the four Brazilian tax-ID layouts,
    // parenthesized profession, launch count and value
    pub static ref LINHA_CONTRAPARTE_BB: Regex = Regex::new(
        r"(.+?)\s*-\s*(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}|\d{2}\.\d{3}\.\d{3}-\d{2}|\d{3}\.\d{3}\.\d{3}/\d{4}-\d{2})\s*\(([^)]+)\)\s*-\s*(\d+) lançamento\(s\) no total de: R\$([\d\.,]+)"
    ).unwrap();

    pub static ref INFORMACOES_FINAIS_BB: Regex = Regex::new(
        r"(?s)Movimentação no período não é compatível(.+)"
    ).unwrap();

    // Nubank / generic loose lookups
    pub static ref TITULAR_EM_NOME: Regex = Regex::new(
        r"(?i)em nome de ([^,]+)"
    ).unwrap();

    pub static ref CPF_SOLTO: Regex = Regex::new(
        r"(?i)CPF\s*([\d\-\.]+)"
    ).unwrap();

    pub static ref RENDA_LIVRE: Regex = Regex::new(
        r"(?i)renda.*?R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref CREDITOS_LIVRE: Regex = Regex::new(
        r"(?i)créditos.*?R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref DEBITOS_LIVRE: Regex = Regex::new(
        r"(?i)débitos.*?R\$\s*([\d\.,]+)"
    ).unwrap();

    pub static ref CONTAGEM_TRANSFERENCIAS: Regex = Regex::new(
        r"(?i)(\d+)\s+(?:TED|DOC|PIX|transferência)"
    ).unwrap();

    // Opportunistic numbered-field lookups shared by Nubank and the generic
    // fallback
    pub static ref CAMPOS_NUMERADOS: Vec<(&'static str, Regex)> = {
        ["CampoA", "CampoB", "CampoC", "CampoD", "CampoE"]
            .iter()
            .map(|campo| {
                let re = Regex::new(&format!(r"(?i){campo}.*?R\$\s*([\d\.,]+)")).unwrap();
                (*campo, re)
            })
            .collect()
    };

    // Generic fallback: ordered phrasing alternatives per field, first match
    // wins, fields independent
    pub static ref GENERICO_TITULAR: Vec<Regex> = compile_all(&[
        r"(?i)em nome de ([^,]+)",
        r"(?i)titular[:\s]+([^,\n]+)",
        r"(?i)conta.*?([^,\n]+)",
    ]);

    pub static ref GENERICO_CPF: Vec<Regex> = compile_all(&[
        r"(?i)CPF[:\s]*([\d\-\.]+)",
        r"(?i)CPF/CNPJ[:\s]*([\d\-\.\/]+)",
    ]);

    pub static ref GENERICO_PERIODO: Vec<Regex> = compile_all(&[
        r"(?i)Entre (\d{2}[/\.]\d{2}[/\.]\d{4}) e (\d{2}[/\.]\d{2}[/\.]\d{4})",
        r"(?i)Período[:\s]*(\d{2}[/\.]\d{2}[/\.]\d{4})[^\d]*(\d{2}[/\.]\d{2}[/\.]\d{4})",
    ]);

    pub static ref GENERICO_RENDA: Vec<Regex> = compile_all(&[
        r"(?i)renda.*?R\$\s*([\d\.,]+)",
        r"(?i)salário.*?R\$\s*([\d\.,]+)",
        r"(?i)remuneração.*?R\$\s*([\d\.,]+)",
    ]);

    pub static ref GENERICO_CREDITOS: Vec<Regex> = compile_all(&[
        r"(?i)créditos.*?R\$\s*([\d\.,]+)",
        r"(?i)entradas.*?R\$\s*([\d\.,]+)",
        r"(?i)depósitos.*?R\$\s*([\d\.,]+)",
    ]);

    pub static ref GENERICO_DEBITOS: Vec<Regex> = compile_all(&[
        r"(?i)débitos.*?R\$\s*([\d\.,]+)",
        r"(?i)saídas.*?R\$\s*([\d\.,]+)",
        r"(?i)pagamentos.*?R\$\s*([\d\.,]+)",
    ]);
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}
