//! Parse command - extract a structured record from a single narrative file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rif_core::models::config::RifConfig;
use rif_core::{extract, format_brl, Institution, ParsedNarrative};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input narrative text file
    #[arg(required = true)]
    input: PathBuf,

    /// Declared reporting-institution name (drives extractor selection)
    #[arg(short, long)]
    institution: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        RifConfig::from_file(std::path::Path::new(path))?
    } else {
        RifConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;

    // Empty narratives are a caller error, rejected before the engine runs
    if text.trim().is_empty() {
        anyhow::bail!("Narrative text is empty: {}", args.input.display());
    }

    let institution = Institution::detect(&args.institution);
    info!(
        "Parsing {} as {:?} narrative",
        args.input.display(),
        institution
    );

    let record = extract(&text, &args.institution);

    let output = format_record(&record, args.format, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "{} risk indicator(s), {} crime tag(s)",
        record.resumo_financeiro.indicadores_risco.len(),
        record.possiveis_crimes.len()
    );

    Ok(())
}

pub fn format_record(
    record: &ParsedNarrative,
    format: OutputFormat,
    config: &RifConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if config.output.pretty_json {
                Ok(serde_json::to_string_pretty(record)?)
            } else {
                Ok(serde_json::to_string(record)?)
            }
        }
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &ParsedNarrative) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Titular: {}\n",
        record.titular.as_deref().unwrap_or("-")
    ));
    if let Some(periodo) = &record.periodo {
        output.push_str(&format!("Período: {} a {}\n", periodo.inicio, periodo.fim));
    }
    output.push('\n');

    output.push_str(&format!(
        "Créditos: R$ {}\n",
        format_brl(record.creditos.total)
    ));
    output.push_str(&format!(
        "Débitos:  R$ {}\n",
        format_brl(record.debitos.total)
    ));
    output.push_str(&format!(
        "Saldo:    R$ {}\n",
        format_brl(record.resumo_financeiro.saldo_periodo)
    ));

    if record.resumo_financeiro.movimentacao_diaria_media > 0.0 {
        output.push_str(&format!(
            "Movimentação diária média: R$ {}\n",
            format_brl(record.resumo_financeiro.movimentacao_diaria_media)
        ));
    }

    if !record.resumo_financeiro.indicadores_risco.is_empty() {
        output.push_str("\nIndicadores de risco:\n");
        for indicador in &record.resumo_financeiro.indicadores_risco {
            output.push_str(&format!("  - {}\n", indicador));
        }
    }

    if !record.possiveis_crimes.is_empty() {
        output.push_str("\nPossíveis crimes:\n");
        for tag in &record.possiveis_crimes {
            output.push_str(&format!("  - {}\n", tag));
        }
    }

    if !record.notas.is_empty() {
        output.push_str(&format!("\n{} nota(s) registrada(s)\n", record.notas.len()));
    }

    output
}
