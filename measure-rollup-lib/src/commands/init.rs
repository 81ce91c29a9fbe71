use super::Host;
use super::config::{CONFIG_FILE_NAME, Config};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `rollup.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));

    Config::save_default(&output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_writes_default_config() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Utf8PathBuf::try_from(tmp.path().join("custom.toml")).unwrap();

        let mut host = TestHost::new();
        init_config(&mut host, &InitArgs { output: Some(output.clone()) }).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), super::super::config::DEFAULT_CONFIG_TOML);
        assert_eq!(host.output_text(), format!("Generated default configuration file: {output}\n"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_unwritable_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Utf8PathBuf::try_from(tmp.path().join("missing-dir").join("rollup.toml")).unwrap();

        let mut host = TestHost::new();
        assert!(init_config(&mut host, &InitArgs { output: Some(output) }).is_err());
    }
}
