use super::Host;
use super::config::Config;
use crate::Result;
use crate::metrics::MetricCatalogue;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `rollup.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Validates a configuration file by loading it and building its metric catalogue
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or parsed, or if its metrics do not
/// form a valid catalogue (duplicate keys, unknown dependencies, cycles)
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<MetricCatalogue> {
    let config = Config::load(base_dir, config_path)?;
    config.catalogue()
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    validate_config_in(host, Utf8Path::new("."), args)
}

fn validate_config_in<H: Host>(host: &mut H, base_dir: &Utf8Path, args: &ValidateArgs) -> Result<()> {
    let config_path = args.config.as_ref();

    match validate_config_inner(base_dir, config_path) {
        Ok(catalogue) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else if base_dir.join(super::config::CONFIG_FILE_NAME).exists() {
                let _ = writeln!(host.output(), "Config file: {}", base_dir.join(super::config::CONFIG_FILE_NAME));
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }

            let computed = catalogue.evaluation_order().count();
            let _ = writeln!(host.output(), "{} metric(s), {computed} computed", catalogue.len());
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
