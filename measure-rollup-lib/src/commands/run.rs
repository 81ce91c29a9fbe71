//! Command dispatch logic for measure-rollup

use super::{AggregateArgs, InitArgs, MetricsArgs, ValidateArgs, aggregate_tree, init_config, list_metrics, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "measure-rollup", author, version, long_about = None)]
#[command(about = "Roll code measures up from files to directories and projects")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RollupSubcommand,
}

#[derive(Subcommand, Debug)]
enum RollupSubcommand {
    /// Derive every computed metric over a component tree and report the result
    Aggregate(Box<AggregateArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// List the metrics of the configured catalogue
    Metrics(MetricsArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        RollupSubcommand::Aggregate(aggregate_args) => aggregate_tree(host, aggregate_args),
        RollupSubcommand::Init(init_args) => init_config(host, init_args),
        RollupSubcommand::Validate(validate_args) => validate_config(host, validate_args),
        RollupSubcommand::Metrics(metrics_args) => list_metrics(host, metrics_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_aggregate() {
        let cli = Cli::try_parse_from(["measure-rollup", "aggregate", "--input", "tree.json", "--json", "out.json", "--console"]).unwrap();
        let RollupSubcommand::Aggregate(args) = cli.command else {
            panic!("expected the aggregate subcommand");
        };

        assert_eq!(args.input, "tree.json");
        assert_eq!(args.json.as_deref().map(camino::Utf8Path::as_str), Some("out.json"));
        assert!(args.console);
        assert!(!args.include_memory_only);
    }

    #[test]
    fn test_aggregate_requires_input() {
        assert!(Cli::try_parse_from(["measure-rollup", "aggregate"]).is_err());
    }
}
