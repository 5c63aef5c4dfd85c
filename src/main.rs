use std::process::ExitCode;

use clap::Parser;

use romrebuild::actions::perform_actions;
use romrebuild::cli::Cli;
use romrebuild::config::Config;
use romrebuild::error::RecipeError;

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::try_from(cli)?;
    let plan = perform_actions(&config)?;
    if config.print_plan {
        let serialized = serde_json::to_string_pretty(&plan)?;
        println!("{}", serialized);
    }
    if plan.summary.titles_failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            // usage error: nothing under --input looked like a known title
            if matches!(
                err.downcast_ref::<RecipeError>(),
                Some(RecipeError::UnsupportedLayout { .. })
            ) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
