use clap::Parser;
use std::io;
use std::process::ExitCode;
use word_tally_cli::args::Args;
use word_tally_cli::error::AppError;
use word_tally_cli::{logging, presentation};
use word_tally_engine::config::TallyConfig;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, AppError> {
    let config = TallyConfig::try_from(args)?;
    let result = word_tally_engine::run(&config)?;

    let mut out = io::stdout().lock();
    presentation::write_report(&mut out, &result.entries, args.format)?;

    // The partial report has been printed; the read failure still fails the run.
    if let Some(e) = &result.error {
        eprintln!("Error: {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
