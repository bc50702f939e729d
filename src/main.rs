//! Cohort Projection CLI
//!
//! Runs a single program scenario and prints its fiscal-year P&L

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Parser;

use cohort_projection::{
    output::{session_records, write_cohorts, write_csv},
    ScenarioConfig, ScenarioResults, compute_scenario,
};

#[derive(Parser, Debug)]
#[command(name = "cohort_projection")]
#[command(about = "Project enrollment, revenue, and cost for an academic program")]
struct Cli {
    /// Scenario config (JSON); omitted fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Growth table CSV (year,fall,spring,summer[,fall_a,...])
    #[arg(long)]
    growth_csv: Option<PathBuf>,

    /// Override projection horizon in years
    #[arg(long)]
    years: Option<usize>,

    /// Override first fiscal year
    #[arg(long)]
    start_fy: Option<u32>,

    /// Directory for sessions.csv, pl_summary.csv, cohorts.csv
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print full results as JSON instead of the P&L table
    #[arg(long)]
    json: bool,
}

/// Fiscal year N runs July of N-1 through June of N
fn current_fiscal_year() -> u32 {
    let today = Local::now().date_naive();
    let year = today.year() as u32;
    if today.month() >= 7 { year + 1 } else { year }
}

fn load_config(cli: &Cli) -> anyhow::Result<ScenarioConfig> {
    let mut config = match &cli.config {
        Some(path) => ScenarioConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let mut config = ScenarioConfig::default_program();
            config.structure.start_fiscal_year = current_fiscal_year();
            config
        }
    };

    if let Some(path) = &cli.growth_csv {
        config = config
            .with_growth_csv(path)
            .with_context(|| format!("Failed to load growth table {}", path.display()))?;
    }
    if let Some(years) = cli.years {
        config.structure.projection_years = years;
    }
    if let Some(fy) = cli.start_fy {
        config.structure.start_fiscal_year = fy;
    }

    Ok(config)
}

fn print_pl(results: &ScenarioResults) {
    println!("Program: {}", results.program_name);
    println!("  Sessions: {}", results.sessions.len());
    println!("  Program duration: {} sessions", results.program_duration);
    println!();

    println!("{:>8} {:>16} {:>16} {:>16} {:>16} {:>9} {:>10}",
        "Period", "Revenue", "Cost", "Net", "Cumulative", "Margin%", "Headcount");
    println!("{}", "-".repeat(97));

    for row in &results.pl_summary {
        println!("{:>8} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>9.2} {:>10.1}",
            row.period.to_string(),
            row.revenue,
            row.cost,
            row.net,
            row.cumulative,
            row.margin_pct,
            row.headcount,
        );
    }

    let summary = results.summary();
    println!();
    println!("Peak headcount: {:.1}", summary.peak_headcount);
    println!("Total enrolled: {:.1}", summary.total_enrolled);
    println!("Total graduated: {:.1}", summary.total_graduated);
    match summary.break_even_year {
        Some(fy) => println!("Break-even: FY{}", fy),
        None => println!("Break-even: not reached within the horizon"),
    }
}

fn write_outputs(dir: &Path, config: &ScenarioConfig, results: &ScenarioResults) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let records = session_records(results, config.structure.start_fiscal_year);
    write_csv(dir.join("sessions.csv"), &records).context("Failed to write sessions.csv")?;
    write_csv(dir.join("pl_summary.csv"), &results.pl_summary).context("Failed to write pl_summary.csv")?;

    let cohorts_path = dir.join("cohorts.csv");
    let file = fs::File::create(&cohorts_path)
        .with_context(|| format!("Failed to create {}", cohorts_path.display()))?;
    write_cohorts(file, results).context("Failed to write cohorts.csv")?;

    println!("\nResults written to: {}", dir.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    log::info!(
        "Projecting {} years from FY{}",
        config.structure.projection_years,
        config.structure.start_fiscal_year
    );
    let results = compute_scenario(&config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_pl(&results);
    }

    if let Some(dir) = &cli.output_dir {
        write_outputs(dir, &config, &results)?;
    }

    Ok(())
}
