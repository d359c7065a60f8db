//! `config` subcommand: inspect the resolved configuration.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let data_dir = config::resolve_data_dir(global, &cfg);

            if !global.quiet {
                eprintln!("# config file: {}", config::config_path().display());
                eprintln!("# data dir:    {}", data_dir.display());
            }
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(|e| CliError::DataFile {
                    message: format!("config is not representable as TOML: {e}"),
                    dir: config::config_path().display().to_string(),
                })?;
            println!("{rendered}");
            Ok(())
        }
    }
}
