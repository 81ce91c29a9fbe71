use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use super::input::{self, LoadedProject};
use crate::Result;
use crate::engine::aggregate;
use crate::reports::{collect, generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = " aggregate";

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Path to the JSON component tree holding the leaf measures
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Utf8PathBuf,

    /// Path to configuration file (default is `rollup.toml` next to the input)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Also report measures that are only kept in memory during aggregation
    #[arg(long)]
    pub include_memory_only: bool,

    /// Output the aggregated measures to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the aggregated measures to the console.
    /// If omitted, console output is shown only when no other report is generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Load a component tree, derive every computed metric, and report the result
///
/// # Errors
///
/// Returns an error if the configuration or the input tree cannot be loaded, or if a report
/// cannot be written
pub fn aggregate_tree<H: Host>(host: &mut H, args: &AggregateArgs) -> Result<()> {
    init_logging(args.log_level);

    let base_dir = args
        .input
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let config = Config::load(base_dir, args.config.as_ref())?;
    let catalogue = config.catalogue()?;

    let LoadedProject { tree, mut store } = input::load(&args.input)?.into_project(&catalogue)?;
    let summary = aggregate(&catalogue, &tree, &mut store);
    log::debug!(target: LOG_TARGET, "{summary:?}");

    let include_memory_only = args.include_memory_only || config.include_memory_only;
    let nodes = collect(&catalogue, &tree, &store, include_memory_only);

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&nodes, config.precision, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
    }

    if args.console || args.json.is_none() {
        let mut console_output = String::new();
        generate_console(&nodes, args.color.use_colors(), config.precision, &mut console_output)?;
        write!(host.output(), "{console_output}").into_app_err("writing console report")?;
    }

    Ok(())
}
