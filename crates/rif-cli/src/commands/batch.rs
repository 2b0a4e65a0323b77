//! Batch processing command for multiple narrative files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use rif_core::models::config::RifConfig;
use rif_core::{extract, ParsedNarrative};

use super::parse::{format_record, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Declared reporting-institution name applied to every file
    #[arg(short, long)]
    institution: String,

    /// Output directory (one JSON per input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<ParsedNarrative>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RifConfig::from_file(std::path::Path::new(path))?
    } else {
        RifConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let result = process_single_file(&path, &args, &config);

        match result {
            Ok(record) => {
                debug!("processed {}", path.display());
                results.push(ProcessResult {
                    path,
                    record: Some(record),
                    error: None,
                });
            }
            Err(e) => {
                error!("failed on {}: {}", path.display(), e);
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(e);
                }
                results.push(ProcessResult {
                    path,
                    record: None,
                    error: Some(e.to_string()),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&results, &summary_path)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failures = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "{} Processed {} file(s), {} failure(s) in {:.1}s",
        style("✓").green(),
        results.len(),
        failures,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    args: &BatchArgs,
    config: &RifConfig,
) -> anyhow::Result<ParsedNarrative> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        anyhow::bail!("narrative text is empty");
    }

    let record = extract(&text, &args.institution);

    if let Some(ref output_dir) = args.output_dir {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("narrative");
        let out_path = output_dir.join(format!("{stem}.json"));
        let json = format_record(&record, OutputFormat::Json, config)?;
        fs::write(out_path, json)?;
    }

    Ok(record)
}

fn write_summary(results: &[ProcessResult], path: &PathBuf) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "arquivo",
        "titular",
        "periodo_inicio",
        "periodo_fim",
        "total_creditos",
        "total_debitos",
        "saldo_periodo",
        "indicadores_risco",
        "erro",
    ])?;

    for result in results {
        let arquivo = result.path.display().to_string();
        match (&result.record, &result.error) {
            (Some(record), _) => {
                let (inicio, fim) = record
                    .periodo
                    .as_ref()
                    .map(|p| (p.inicio.clone(), p.fim.clone()))
                    .unwrap_or_default();
                wtr.write_record([
                    arquivo,
                    record.titular.clone().unwrap_or_default(),
                    inicio,
                    fim,
                    record.creditos.total.to_string(),
                    record.debitos.total.to_string(),
                    record.resumo_financeiro.saldo_periodo.to_string(),
                    record.resumo_financeiro.indicadores_risco.join("; "),
                    String::new(),
                ])?;
            }
            (None, Some(error)) => {
                wtr.write_record([
                    arquivo,
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    error.clone(),
                ])?;
            }
            (None, None) => {}
        }
    }

    wtr.flush()?;
    Ok(())
}
