use npm_audit_core::config::ConverterConfig;
use npm_audit_core::workflow::run_batch;
use time::macros::format_description;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

fn main() {
    // report_converter walks the configured input tree, converts every
    // matching report into a docx document, and exits non-zero when any
    // file failed to convert.
    init_logging();

    let config = ConverterConfig::default();
    tracing::info!("creating output directory: {}", config.output_dir.display());

    match run_batch(&config) {
        Ok(summary) => {
            tracing::info!(
                "finished: {} document(s) written, {} file(s) failed",
                summary.converted,
                summary.failed
            );
            if !summary.is_clean() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            tracing::error!("batch run aborted: {}", err);
            std::process::exit(1);
        }
    }
}

/// Structured log lines (timestamp, level, message) on stdout. Level comes
/// from RUST_LOG with an info default.
fn init_logging() {
    let timer = UtcTime::new(format_description!(
        "[day]/[month repr:short]/[year] [weekday repr:short] [hour]:[minute]:[second]"
    ));
    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_target(false)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
