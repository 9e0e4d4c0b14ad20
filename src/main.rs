use clap::Parser;
use memsim::cli::Cli;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match memsim::run(&cli, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            eprintln!("memsim: {}", err);
            ExitCode::FAILURE
        }
    }
}
