use crate::cli::CheckArgs;
use crate::config::PartialCheckConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use topocheck::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialCheckConfig::from_file(path)?,
        None => PartialCheckConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;

    let progress_handler = settings.show_progress.then(CliProgressHandler::new);
    let reporter = match &progress_handler {
        Some(handler) => ProgressReporter::with_callback(handler.get_callback()),
        None => ProgressReporter::new(),
    };

    info!(
        "Checking {:?} against allow-list {:?}",
        settings.input, settings.allow_list
    );
    let result = workflows::check::run_from_paths(
        &settings.input,
        &settings.allow_list,
        &settings.check,
        &reporter,
    );

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if let Some(handler) = &progress_handler {
                handler.abandon();
            }
            return Err(e.into());
        }
    };

    for category in &report.categories {
        println!("{}", category);
    }
    println!(
        "✓ Topology is consistent ({} interactions checked).",
        report.total()
    );
    Ok(())
}
