// ABOUTME: Main entry point for the iv image grid pager
// ABOUTME: Sets up logging and color, runs one invocation and reports errors on stderr

use clap::Parser;
use iv_cli::app::{core_error, run};
use iv_cli::cli::Cli;
use iv_cli::cli_output::CliOutput;
use iv_core::TerminalProbe;
use std::env;
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = CliOutput::with_color(use_color(&cli, std::io::stderr().is_terminal()));
    let stdout_color = use_color(&cli, std::io::stdout().is_terminal());

    match run(&cli, &TerminalProbe::stdout(), stdout_color) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            output.error(&format!("{:#}", err));
            if let Some(hint) = core_error(&err).and_then(|e| e.help_text()) {
                output.hint(hint);
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Color is on for terminals unless disabled by flag, NO_COLOR or a dumb TERM
fn use_color(cli: &Cli, is_terminal: bool) -> bool {
    if cli.no_color || env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if cli.force_color {
        return true;
    }
    is_terminal && env::var("TERM").unwrap_or_default() != "dumb"
}
