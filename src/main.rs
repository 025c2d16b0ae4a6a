use std::process::ExitCode;

use clap::Parser;

use insurance_check::adapter::inbound::cli::command::Cli;
use insurance_check::adapter::inbound::cli::output::{self, OutputConfig};
use insurance_check::adapter::inbound::cli::{self, diagnostic};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), &cli.color);

    match cli::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if output::is_json() {
                output::error(&err.to_string());
            } else {
                eprintln!("{:?}", diagnostic::report(&err, &cli::config_path(&cli)));
            }
            ExitCode::FAILURE
        }
    }
}
