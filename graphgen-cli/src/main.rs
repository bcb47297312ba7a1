//! `graphgen` binary.
//!
//! Sets up logging, runs one subcommand and prints its summary on stdout.
//! Failures are logged with their stable code and end the process with a
//! non-zero status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphgen_cli::{
    cli::{Cli, CliError, ExecutionSummary, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn execute(cli: Cli) -> Result<ExecutionSummary> {
    let command = cli.command.name();
    run_cli(cli).with_context(|| format!("`{command}` failed"))
}

fn print_summary(summary: &ExecutionSummary) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut out).context("failed to render summary")?;
    out.flush().context("failed to flush stdout")
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        logging_unavailable(&err);
        return ExitCode::FAILURE;
    }

    let outcome = execute(Cli::parse()).and_then(|summary| print_summary(&summary));
    let Err(err) = outcome else {
        return ExitCode::SUCCESS;
    };

    let code = err
        .downcast_ref::<CliError>()
        .map(|cli_error| field::display(cli_error.code()));
    error!(
        error = %err,
        cause = %err.root_cause(),
        code,
        "graphgen failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber exists to carry this message"
)]
fn logging_unavailable(err: &LoggingError) {
    eprintln!("graphgen: cannot set up logging: {err}");
}
