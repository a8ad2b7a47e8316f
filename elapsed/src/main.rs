mod cli;
mod exit_codes;
mod logging;
mod output;
mod run;
mod run_error;

use clap::Parser;
use std::io::Write as _;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_codes::ExitCode::Success.as_i32()
                }
                _ => exit_codes::ExitCode::InvalidInput.as_i32(),
            };
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        cli::Command::Format(args) => run::format(args, &mut out),
        cli::Command::Sum(args) => run::sum(args, &mut out),
    };
    let _ = out.flush();

    let code = match result {
        Ok(()) => exit_codes::ExitCode::Success,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    };

    std::process::exit(code.as_i32());
}
