use crate::cli::AnalyzeArgs;
use crate::config;
use crate::error::Result;
use crate::utils::{progress::CliProgressHandler, validate};
use druginteract::{
    core::models::tables::DataTables, engine::progress::ProgressReporter, workflows,
};
use tracing::info;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = config::build_config(&args)?;
    validate::output_path(&app_config.output_path)?;

    info!("Loading input tables...");
    let tables = DataTables::load(
        &app_config.interactions_path,
        &app_config.drugs_path,
        &app_config.combinations_path,
    )?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Analyzing '{}' with '{}'...",
        app_config.core_config.first_agent, app_config.core_config.second_agent
    );
    let result = workflows::analyze::run(&tables, &app_config.core_config, &reporter)?;

    info!(
        format = ?app_config.format,
        "Writing report to {:?}",
        &app_config.output_path
    );
    app_config
        .format
        .sink()
        .write_report(&result.report, &app_config.output_path)?;

    println!(
        "Overlapping genes: {} | Combination result: {}",
        result.overlap.len(),
        result.classification.label()
    );
    println!("Report written to {}", app_config.output_path.display());
    println!("Note: this assessment is indicative only and is not medical advice.");

    Ok(())
}
