#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod config;
mod core;
mod platform;
mod ui;

use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use crate::cli::{Args, ArgsError, RuntimeFlags};
use crate::config::Config;
use crate::core::image_loader;

fn main() -> ExitCode {
    if env::args_os().len() <= 1 {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }

    let args = Args::parse();
    let verbose = args.verbose;
    platform::show_console_if_verbose(verbose);
    init_logger(verbose);

    let flags = match RuntimeFlags::from_args(args) {
        Ok(flags) => flags,
        Err(e) => {
            error!("{e}");
            if verbose && matches!(e, ArgsError::MissingImagePath) {
                cli::print_usage();
            }
            return ExitCode::FAILURE;
        }
    };

    // Config problems never abort: fall back to defaults and keep going.
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        Config::default()
    });
    info!(
        "display bounds: {}x{}",
        config.display.width, config.display.height
    );

    let image = match image_loader::load_image(&flags.image_path, &config) {
        Ok(image) => image,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "image loaded: {}x{}, displayed at {}x{}",
        image.width, image.height, image.display_width, image.display_height
    );

    match app::run(flags, image) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics are off unless verbose mode is requested; `RUST_LOG` still
/// overrides either way.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
