use crate::Result;
use crate::formulas::Formula;
use crate::metrics::{Direction, Metric, MetricCatalogue, ValueType};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "rollup.toml";

/// Largest number of decimals reports can show
const MAX_PRECISION: u8 = 6;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metrics whose formula never runs
    #[serde(default)]
    pub disabled_metrics: Vec<String>,

    /// Whether reports include measures that are not persisted
    #[serde(default)]
    pub include_memory_only: bool,

    /// Number of decimals shown for numeric values in reports
    #[serde(default = "default_precision")]
    pub precision: u8,

    /// User-defined metrics registered after the built-in ones
    #[serde(default)]
    pub metrics: Vec<MetricSpec>,
}

/// A user-defined metric as written in the configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricSpec {
    pub key: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub value_type: ValueType,

    #[serde(default)]
    pub direction: Direction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default)]
    pub qualitative: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_value: Option<f64>,

    #[serde(default)]
    pub optimized_best_value: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<Formula>,
}

const fn default_precision() -> u8 {
    1
}

impl MetricSpec {
    /// Turn the specification into a [`Metric`]
    ///
    /// # Errors
    ///
    /// Returns an error if the key or the name is blank
    pub fn to_metric(&self) -> Result<Metric> {
        let mut builder = Metric::builder(self.key.as_str(), self.name.as_str(), self.value_type)
            .direction(self.direction)
            .qualitative(self.qualitative)
            .optimized_best_value(self.optimized_best_value)
            .hidden(self.hidden);

        if let Some(description) = &self.description {
            builder = builder.description(description.as_str());
        }

        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.as_str());
        }

        if let Some(best) = self.best_value {
            builder = builder.best_value(best);
        }

        if let Some(worst) = self.worst_value {
            builder = builder.worst_value(worst);
        }

        if let Some(formula) = &self.formula {
            builder = builder.formula(formula.clone());
        }

        builder.build()
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading measure-rollup configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading measure-rollup configuration file '{path}'")),
            }
        };

        let config = toml::from_str::<Self>(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Build the metric catalogue described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a user-defined metric is malformed, clashes with another metric, or
    /// introduces a dependency cycle, or if a disabled metric does not exist
    pub fn catalogue(&self) -> Result<MetricCatalogue> {
        let extra = self.metrics.iter().map(MetricSpec::to_metric).collect::<Result<Vec<_>>>()?;
        let catalogue = MetricCatalogue::with_metrics(extra)?;
        catalogue.disable_formulas(self.disabled_metrics.iter().map(String::as_str))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the precision is out of range
    fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(app_err!("precision must be between 0 and {MAX_PRECISION}, got {}", self.precision));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
