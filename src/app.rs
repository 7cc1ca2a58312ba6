use std::process::ExitCode;

use clap::Parser;

use self::arg::Args;
use self::arg::Command;

mod arg;
mod case;
mod color;
mod dump_help;
mod io;
mod logging;
mod net;
mod serve;

pub fn run() -> ExitCode {
    match run_impl() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            tracing::error!(?error);
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_impl() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    self::logging::set_up_logging(args.log_level, args.log_file.as_deref(), args.log_json)?;

    match args.command {
        Command::Case(args) => self::case::case(&args)?,
        Command::Color(args) => self::color::color(&args)?,
        Command::Net(args) => self::net::net(&args)?,
        Command::Serve(args) => self::serve::serve(&args)?,
        Command::DumpHelp => self::dump_help::dump_help()?,
    }

    Ok(ExitCode::SUCCESS)
}
