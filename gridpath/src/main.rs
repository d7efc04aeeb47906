use std::process::ExitCode;

use clap::Parser;
use gridpath::{Args, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridpath: {e}");
            ExitCode::FAILURE
        }
    }
}
