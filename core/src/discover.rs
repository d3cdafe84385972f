use crate::config::ConverterConfig;
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A report file slated for conversion: where it was found and where the
/// rendered document goes. The output path is derived at discovery time so
/// every later stage works with the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Extension predicate for candidate report files. Extensionless files
/// never match.
pub fn has_report_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

/// Walk the input tree and classify every file exactly once: matching files
/// become [`ReportFile`]s, everything else is skipped with a warning.
/// Unreadable entries (including a missing input root) are warned about and
/// do not abort the walk.
pub fn discover_report_files(config: &ConverterConfig) -> CoreResult<Vec<ReportFile>> {
    let mut reports = Vec::new();

    for entry in WalkDir::new(&config.input_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if has_report_extension(path, &config.input_extension) {
            let input_path =
                std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            tracing::info!("found report file: {}", input_path.display());
            let output_path = output_path_for(config, path)?;
            reports.push(ReportFile {
                input_path,
                output_path,
            });
        } else {
            tracing::warn!("skipping file: {}", path.display());
        }
    }

    Ok(reports)
}

/// Flattening policy: only the base name survives, with the report
/// extension swapped for the document extension. Inputs from different
/// subdirectories with the same base name therefore land on the same
/// output path; the driver warns when that happens.
fn output_path_for(config: &ConverterConfig, input: &Path) -> CoreResult<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        CoreError::Discovery(format!("no file name in path: {}", input.display()))
    })?;
    let document_name = Path::new(file_name).with_extension(&config.output_extension);
    Ok(config.output_dir.join(document_name))
}
