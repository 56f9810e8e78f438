use druginteract::core::io::sink::ReportFormat;
use druginteract::engine::config::AnalysisConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub interactions_path: PathBuf,
    pub drugs_path: PathBuf,
    pub combinations_path: PathBuf,
    pub output_path: PathBuf,
    pub format: ReportFormat,
    pub core_config: AnalysisConfig,
}
