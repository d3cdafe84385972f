use crate::config::ConverterConfig;
use crate::discover::{discover_report_files, ReportFile};
use crate::docx::document::VulnerabilityDocument;
use crate::error::CoreResult;
use crate::report::model::sorted_by_severity;
use crate::report::parser::parse_report;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Convert one report file into its output document: parse, order, render,
/// save. The input handle is scoped to the parse and closed before the
/// document is written.
pub fn execute_report_workflow(report: &ReportFile) -> CoreResult<()> {
    tracing::info!("processing report file: {}", report.input_path.display());

    let records = {
        let file = File::open(&report.input_path)?;
        parse_report(BufReader::new(file))?
    };
    let sorted = sorted_by_severity(records);
    tracing::info!("parsed {} unique finding(s)", sorted.len());

    let title = report.input_path.display().to_string();
    let document = VulnerabilityDocument::new(&title, sorted);
    let sha256 = document.save(&report.output_path)?;
    tracing::info!(
        "saved document: {} (sha256 {})",
        report.output_path.display(),
        sha256
    );
    Ok(())
}

/// Batch driver: create the output directory once, discover report files,
/// then run each file's conversion in sequence. A failing file is logged
/// and counted; it never stops the remaining files.
pub fn run_batch(config: &ConverterConfig) -> CoreResult<RunSummary> {
    std::fs::create_dir_all(&config.output_dir)?;

    let reports = discover_report_files(config)?;
    let mut summary = RunSummary::default();
    let mut claimed_outputs: HashSet<PathBuf> = HashSet::new();

    for report in &reports {
        if !claimed_outputs.insert(report.output_path.clone()) {
            tracing::warn!(
                "output collision: {} replaces a document generated earlier in this run",
                report.output_path.display()
            );
        }
        match execute_report_workflow(report) {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                tracing::error!(
                    "failed to convert {}: {}",
                    report.input_path.display(),
                    err
                );
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
