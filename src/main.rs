// ==========================================
// Traffic KPI Core - CLI Entry Point
// ==========================================
// Ingests a traffic export (CSV/XLSX), validates it and
// prints the KPI summary plus data-quality report as JSON
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use traffic_kpi::engine::{data_quality_report, KpiEngine};
use traffic_kpi::{logging, ImportConfig, TrafficImporter, TrafficImporterImpl};

#[derive(Serialize)]
struct Report {
    file: String,
    records: usize,
    kpi: traffic_kpi::KpiSummary,
    data_quality: traffic_kpi::DataQualityReport,
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: traffic-kpi <file.csv|file.xlsx>"),
    };

    tracing::info!("==================================================");
    tracing::info!("{} v{}", traffic_kpi::APP_NAME, traffic_kpi::VERSION);
    tracing::info!("==================================================");

    let importer = TrafficImporterImpl::new(ImportConfig::default());

    // Phase 1: structure analysis
    let analysis = importer
        .analyze_structure(&path)
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    tracing::info!(
        columns = analysis.columns.len(),
        needs_mapping = analysis.needs_mapping,
        "structure analyzed"
    );
    if analysis.needs_mapping {
        tracing::warn!(
            "some required columns did not resolve automatically; \
             records may fail validation"
        );
    }

    // Phase 2: full parse + validation. One validate_file pass
    // yields the quality report and the record collection.
    let validation = importer
        .validate_file(&path, None)
        .with_context(|| format!("failed to read {}", path.display()))?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    let data_quality = data_quality_report(&validation);

    if !validation.is_valid {
        bail!("{}", validation.failure_message());
    }
    if validation.data.is_empty() {
        bail!("{} contains no valid data rows", path.display());
    }

    let mut records = validation.data;
    records.sort_by_key(|record| record.date);
    tracing::info!(records = records.len(), "file parsed and validated");

    let kpi = KpiEngine::new().calculate(&records);

    let report = Report {
        file: path.display().to_string(),
        records: records.len(),
        kpi,
        data_quality,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
