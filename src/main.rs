use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tilemerge::cli::Cli;
use tilemerge::output::Printer;
use tilemerge::BuildInfo;

fn main() -> ExitCode {
    let info = BuildInfo::current();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{}", info.usage());
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::new();

    match tilemerge::cli::build::run(cli.build, &printer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            printer.error("Error", &err.to_string());
            println!("{}", info.usage());
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("{}:{}", err.kind(), err);
            ExitCode::FAILURE
        }
    }
}
