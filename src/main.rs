use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use gmod_preset_cli::cli::{self, Cli};
use gmod_preset_cli::{app, AppError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cli::show_banner();

    let code = match app::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(err.exit_code())
        }
    };

    if cli.pause {
        wait_for_enter();
    }
    code
}

fn report_error(err: &AppError) {
    match err {
        AppError::Cancelled => println!("Aborted. No changes made to the presets."),
        AppError::StoreNotFound(path) => {
            eprintln!("addonpresets.txt not present at {}.", path.display());
            eprintln!("Please open Garry's Mod and make a preset first!");
        }
        other => {
            log::debug!("{other:?}");
            eprintln!("Error: {other}");
        }
    }
}

fn wait_for_enter() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
}
