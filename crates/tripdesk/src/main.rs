mod cli;
mod commands;
mod config;
mod error;
mod output;
mod shell;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't touch the data directory
        Some(Command::Config(args)) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Some(Command::Completions(args)) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "tripdesk", &mut std::io::stdout());
            Ok(())
        }

        // Scriptable read-only commands over the data files
        Some(cmd) => {
            let cfg = config::load_config_or_default();
            let data_dir = config::resolve_data_dir(&cli.global, &cfg);
            let output = config::resolve_output(&cli.global, &cfg);
            tracing::debug!(command = ?cmd, data_dir = %data_dir.display(), "dispatching command");
            commands::dispatch(cmd, &data_dir, &output, &cli.global)
        }

        // No subcommand: the interactive reservation desk
        None => {
            let cfg = config::load_config_or_default();
            let data_dir = config::resolve_data_dir(&cli.global, &cfg);
            shell::run(&data_dir, &cli.global)
        }
    }
}
