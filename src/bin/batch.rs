use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fit_metrics_rs::batch::{evaluate_all, print_summary, read_profiles, write_report};

#[derive(Parser, Debug)]
#[command(name = "fit-batch")]
#[command(about = "Compute body metrics for every profile in a CSV file")]
struct Args {
    /// Profiles CSV: name,sex,age,weight_kg,height_cm,activity,goal
    #[arg(long, default_value = "profiles.csv")]
    input: PathBuf,

    /// Output CSV file for the metrics report
    #[arg(long, default_value = "metrics_report.csv")]
    output: PathBuf,

    /// Skip the stdout summary table
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fit_metrics_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let rows = match read_profiles(&args.input) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error reading profiles {:?}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        eprintln!("Error: no profiles in {:?}", args.input);
        std::process::exit(1);
    }

    println!("Loaded {} profiles from {:?}", rows.len(), args.input);

    let metrics = evaluate_all(&rows);

    if !args.quiet {
        print_summary(&metrics);
    }

    if let Err(e) = write_report(&metrics, &args.output) {
        eprintln!("Error writing report {:?}: {}", args.output, e);
        std::process::exit(1);
    }

    println!("Report written to {:?}", args.output);
}
