use crate::error::{CliError, Result};
use druginteract::core::io::sink::ReportFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data: Option<FileDataConfig>,
    pub report: Option<FileReportConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileDataConfig {
    pub interactions: Option<PathBuf>,
    pub drugs: Option<PathBuf>,
    pub combinations: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileReportConfig {
    pub format: Option<FileReportFormat>,
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileReportFormat {
    Text,
    Pdf,
}

impl From<FileReportFormat> for ReportFormat {
    fn from(f: FileReportFormat) -> Self {
        match f {
            FileReportFormat::Text => ReportFormat::Text,
            FileReportFormat::Pdf => ReportFormat::Pdf,
        }
    }
}

impl FileReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
