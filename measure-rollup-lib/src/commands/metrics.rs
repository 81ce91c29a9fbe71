use super::Host;
use super::config::Config;
use crate::Result;
use crate::metrics::Metric;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::fmt::Write as _;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct MetricsArgs {
    /// Path to configuration file (default is `rollup.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// List every registered metric instead of only the computed ones
    #[arg(long)]
    pub all: bool,
}

/// Print the metrics of the configured catalogue
///
/// Computed metrics are listed in the order they are evaluated, dependencies first.
/// With `--all`, every metric is listed in registration order.
pub fn list_metrics<H: Host>(host: &mut H, args: &MetricsArgs) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let catalogue = config.catalogue()?;

    let metrics: Vec<&Metric> = if args.all {
        catalogue.iter().collect()
    } else {
        catalogue.evaluation_order().collect()
    };

    let mut output = String::new();
    write_metric_list(&metrics, &mut output)?;
    write!(host.output(), "{output}").into_app_err("writing metric list")?;
    Ok(())
}

fn write_metric_list(metrics: &[&Metric], writer: &mut String) -> Result<()> {
    let key_width = metrics.iter().map(|m| m.key().len()).max().unwrap_or(0);
    let formulas: Vec<String> = metrics.iter().map(|m| describe_formula(m)).collect();
    let formula_width = formulas.iter().map(String::len).max().unwrap_or(0);

    for (metric, formula) in metrics.iter().zip(&formulas) {
        let value_type: &'static str = metric.value_type().into();
        writeln!(
            writer,
            "{:<key_width$}  {value_type:<8}  {formula:<formula_width$}  {}",
            metric.key(),
            metric.name()
        )?;
    }

    Ok(())
}

fn describe_formula(metric: &Metric) -> String {
    metric.formula().map_or_else(
        || "-".to_string(),
        |formula| {
            let depends_upon = formula.depends_upon();
            if depends_upon.is_empty() {
                formula.kind().to_string()
            } else {
                format!("{}({})", formula.kind(), depends_upon.join(", "))
            }
        },
    )
}
