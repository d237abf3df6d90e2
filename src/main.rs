use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fit_metrics_rs::cli::{Cli, Command, RunArgs};
use fit_metrics_rs::engine::personalize;
use fit_metrics_rs::error::{FitError, Result};
use fit_metrics_rs::interface::{
    NextAction, OnboardingDefaults, collect_form, collect_onboarding, display_calculators,
    display_personalization, display_result, prompt_calculator, prompt_next_action, prompt_yes_no,
};
use fit_metrics_rs::models::{StoredProfile, UnitSystem};
use fit_metrics_rs::session::{CalculatorSession, load_profile, save_profile};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays the user-facing output. `RUST_LOG` overrides.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fit_metrics_rs=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc { units } => cmd_calc(units.into()),
        Command::Run(args) => cmd_run(&args),
        Command::Onboard => cmd_onboard(&cli.file),
        Command::Summary => cmd_summary(&cli.file),
    }
}

/// Interactive calculators: pick, fill the form, see the result.
fn cmd_calc(units: UnitSystem) -> Result<()> {
    let mut session = CalculatorSession::new(units);
    display_calculators();

    loop {
        let Some(kind) = prompt_calculator()? else {
            return Ok(());
        };
        session.select(kind);
        println!();
        println!("--- {} ---", kind.name());

        loop {
            collect_form(&mut session)?;

            let units = session.units();
            match session.submit() {
                Some(result) => display_result(result, units),
                None => {
                    println!("Not enough input to calculate. Fill in every field with a positive number.");
                    continue;
                }
            }

            match prompt_next_action()? {
                NextAction::Recalculate => continue,
                NextAction::Back => {
                    session.back();
                    break;
                }
                NextAction::Quit => return Ok(()),
            }
        }
    }
}

/// One calculation from command-line values.
fn cmd_run(args: &RunArgs) -> Result<()> {
    let mut session = args.to_session()?;
    let units = session.units();

    match session.submit() {
        Some(result) => display_result(result, units),
        None => println!("Not enough input to calculate."),
    }

    Ok(())
}

/// Collect a profile, show the personalized plan and optionally save it.
///
/// An existing profile at `file_path` pre-fills every prompt.
fn cmd_onboard(file_path: &str) -> Result<()> {
    let existing = match load_profile(Path::new(file_path)) {
        Ok(profile) => Some(profile),
        Err(FitError::ProfileNotFound(_)) => None,
        Err(e) => return Err(e),
    };
    let defaults = match &existing {
        Some(profile) => {
            println!("Updating the profile saved in {}.", file_path);
            OnboardingDefaults::from_profile(profile)
        }
        None => OnboardingDefaults::default(),
    };

    let profile = collect_onboarding(&defaults)?;
    show_personalization(&profile, existing.is_some())?;

    let save = prompt_yes_no("Save profile?", true)?;
    if save {
        save_profile(Path::new(file_path), &profile)?;
        println!("Profile saved to {}.", file_path);
    }

    Ok(())
}

/// Show the personalized plan for the saved profile.
fn cmd_summary(file_path: &str) -> Result<()> {
    let profile = match load_profile(Path::new(file_path)) {
        Ok(profile) => profile,
        Err(FitError::ProfileNotFound(path)) => {
            eprintln!("Profile not found: {}", path);
            eprintln!("Run 'onboard' first to create one.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    show_personalization(&profile, false)
}

fn show_personalization(profile: &StoredProfile, updated: bool) -> Result<()> {
    let plan = personalize(&profile.physiology(), profile.goal).ok_or_else(|| {
        FitError::InvalidInput("Profile needs a positive age, weight and height".to_string())
    })?;
    info!(goal = profile.goal.label(), target = plan.calorie_target, "personalized plan");

    display_personalization(&plan, updated);
    Ok(())
}
