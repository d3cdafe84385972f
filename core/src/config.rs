use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conversion settings for one batch run. Built once at process start and
/// passed by reference to discovery and the driver; nothing reads these
/// values from ambient process state.
///
/// Extensions are stored without the leading dot and matched
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_extension: String,
    pub output_extension: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./npm"),
            output_dir: PathBuf::from("output"),
            input_extension: "txt".to_string(),
            output_extension: "docx".to_string(),
        }
    }
}
