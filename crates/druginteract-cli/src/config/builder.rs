use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileReportFormat};
use super::models::AppConfig;
use crate::cli::{AnalyzeArgs, FormatArg};
use crate::error::{CliError, Result};
use druginteract::core::io::sink::ReportFormat;
use druginteract::engine::config::AnalysisConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

pub fn build_config(args: &AnalyzeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let data_file = file_config.data.take().unwrap_or_default();
    let interactions_path = args
        .interactions
        .clone()
        .or(data_file.interactions)
        .unwrap_or_else(|| PathBuf::from(defaults.interactions));
    let drugs_path = args
        .drugs
        .clone()
        .or(data_file.drugs)
        .unwrap_or_else(|| PathBuf::from(defaults.drugs));
    let combinations_path = args
        .combinations
        .clone()
        .or(data_file.combinations)
        .unwrap_or_else(|| PathBuf::from(defaults.combinations));

    let report_file = file_config.report.take().unwrap_or_default();
    let precision = args
        .precision
        .or(report_file.precision)
        .unwrap_or(defaults.precision);

    let format = match args.format {
        Some(FormatArg::Text) => ReportFormat::Text,
        Some(FormatArg::Pdf) => ReportFormat::Pdf,
        None => report_file
            .format
            .map(Into::into)
            .or_else(|| ReportFormat::from_path(&args.output))
            .unwrap_or(ReportFormat::Text),
    };

    let core_config = AnalysisConfigBuilder::new()
        .first_agent(args.first_drug())
        .second_agent(args.second_drug())
        .score_precision(precision)
        .build()?;

    debug!(
        interactions = %interactions_path.display(),
        drugs = %drugs_path.display(),
        combinations = %combinations_path.display(),
        ?format,
        precision,
        "Resolved analysis configuration."
    );

    Ok(AppConfig {
        interactions_path,
        drugs_path,
        combinations_path,
        output_path: args.output.clone(),
        format,
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "data.interactions" => {
                config.data.get_or_insert_with(Default::default).interactions =
                    Some(PathBuf::from(value_str));
            }
            "data.drugs" => {
                config.data.get_or_insert_with(Default::default).drugs =
                    Some(PathBuf::from(value_str));
            }
            "data.combinations" => {
                config.data.get_or_insert_with(Default::default).combinations =
                    Some(PathBuf::from(value_str));
            }
            "report.format" => {
                let format = FileReportFormat::parse(value_str).ok_or_else(|| {
                    CliError::Config(format!(
                        "Invalid report format for {}: '{}'. Expected 'text' or 'pdf'.",
                        key, value_str
                    ))
                })?;
                config.report.get_or_insert_with(Default::default).format = Some(format);
            }
            "report.precision" => {
                config.report.get_or_insert_with(Default::default).precision =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
