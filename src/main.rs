use std::io;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

mod app;
mod cli;
mod config;
mod darksky;
mod error;
mod report;
mod units;
mod weather;

use crate::app::{run, Options};
use crate::cli::Args;
use crate::darksky::DarkSky;

fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(config::default_path);
    let options = Options {
        days: args.days,
        units: args.units,
    };

    let mut stdout = io::stdout().lock();
    match run(&config_path, &DarkSky, Local, options, &mut stdout) {
        Ok(days) => {
            log::info!("rendered {days} days");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
