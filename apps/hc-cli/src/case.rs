//! Case files: operating points stored as YAML or JSON.

use crate::error::{CliError, CliResult};
use hc_cycle::CycleInputs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CliError::UnsupportedCaseFormat(path.to_path_buf())),
        }
    }
}

/// Parse case text in the given format.
pub fn parse_case(text: &str, format: CaseFormat) -> Result<CycleInputs, String> {
    match format {
        CaseFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        CaseFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Load a case file from disk.
pub fn load_case(path: &Path) -> CliResult<CycleInputs> {
    let format = CaseFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| CliError::CaseFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = parse_case(&text, format).map_err(|message| CliError::CaseParse {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::info!(path = %path.display(), ?inputs, "loaded case file");
    Ok(inputs)
}
