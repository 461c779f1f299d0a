use std::process::ExitCode;

use clap::Parser;

mod audio;
mod config;
mod demo;
mod emulator;
mod error;
mod input;
mod screenshot;
mod video;

use config::{Cli, Settings};
use demo::DemoConsole;
use error::RunError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), RunError> {
    let settings = Settings::from_cli(cli)?;
    let mut console = DemoConsole::new();
    emulator::run(&mut console, &settings)
}
