//! Compare several program scenarios side by side
//!
//! Usage: `compare_scenarios <config.json>... [--csv comparison.csv]`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use cohort_projection::{
    output::write_csv,
    ScenarioConfig, ScenarioRunner, ScenarioComparison,
};

#[derive(Parser, Debug)]
#[command(name = "compare_scenarios")]
#[command(about = "Run several scenario configs and compare cumulative net by fiscal year")]
struct Args {
    /// Scenario configs (JSON); each becomes one named scenario
    #[arg(required = true)]
    configs: Vec<PathBuf>,

    /// Include the built-in reference program as "Base"
    #[arg(long)]
    with_base: bool,

    /// Write the comparison table to CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// One comparison cell, long format
#[derive(Debug, Serialize)]
struct ComparisonRecord<'a> {
    scenario: &'a str,
    fiscal_year: u32,
    cumulative_net: f64,
}

/// Load a config along with the `program_name` it sets explicitly, if any
fn load_named_config(path: &Path) -> anyhow::Result<(Option<String>, ScenarioConfig)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    let explicit = raw
        .get("program_name")
        .and_then(|v| v.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    let config = ScenarioConfig::from_json_str(&text)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok((explicit, config))
}

/// Display name: the explicit program name, otherwise the file stem
fn scenario_name(path: &Path, explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Add under `base`, suffixing " (2)", " (3)", ... when the name is taken
fn add_unique(runner: &mut ScenarioRunner, base: String, config: ScenarioConfig) -> String {
    let mut name = base.clone();
    let mut n = 2;
    while runner.get(&name).is_some() {
        name = format!("{} ({})", base, n);
        n += 1;
    }
    if name != base {
        log::warn!("Scenario name '{}' already used; adding as '{}'", base, name);
    }
    runner.add(name.clone(), config);
    name
}

fn print_comparison(comparison: &ScenarioComparison) {
    let years: Vec<u32> = comparison
        .entries
        .first()
        .map(|e| e.cumulative_by_year.iter().map(|(fy, _)| *fy).collect())
        .unwrap_or_default();

    print!("{:<24}", "Scenario");
    for fy in &years {
        print!(" {:>14}", format!("FY{}", fy));
    }
    println!(" {:>14} {:>9} {:>11}", "Total net", "Margin%", "Break-even");
    println!("{}", "-".repeat(24 + 15 * years.len() + 37));

    for entry in &comparison.entries {
        print!("{:<24}", entry.name);
        for (_, cumulative) in &entry.cumulative_by_year {
            print!(" {:>14.2}", cumulative);
        }
        let break_even = entry
            .break_even_year
            .map(|fy| format!("FY{}", fy))
            .unwrap_or_else(|| "-".to_string());
        println!(" {:>14.2} {:>9.2} {:>11}", entry.total_net, entry.total_margin, break_even);
    }

    println!();
    if let Some(best) = comparison.best_by_net() {
        println!("Highest total net: {}", best.name);
    }
    if let Some(earliest) = comparison.earliest_break_even() {
        println!("Earliest break-even: {}", earliest.name);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut runner = ScenarioRunner::new();

    if args.with_base {
        add_unique(&mut runner, "Base".to_string(), ScenarioConfig::default_program());
    }
    for path in &args.configs {
        let (explicit, config) = load_named_config(path)?;
        add_unique(&mut runner, scenario_name(path, explicit.as_deref()), config);
    }

    let start = Instant::now();
    let comparison = runner.compare();
    log::info!("Compared {} scenarios in {:?}", runner.len(), start.elapsed());

    print_comparison(&comparison);

    if let Some(csv_path) = &args.csv {
        let records: Vec<ComparisonRecord> = comparison
            .entries
            .iter()
            .flat_map(|e| {
                e.cumulative_by_year.iter().map(move |(fy, cumulative)| ComparisonRecord {
                    scenario: &e.name,
                    fiscal_year: *fy,
                    cumulative_net: *cumulative,
                })
            })
            .collect();
        write_csv(csv_path, &records)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        println!("\nComparison written to: {}", csv_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_tuition(name: &str, tuition: f64) -> ScenarioConfig {
        let mut config = ScenarioConfig::default_program();
        config.program_name = name.to_string();
        config.revenue.tuition_per_credit = tuition;
        config
    }

    #[test]
    fn test_same_program_name_keeps_both_scenarios() {
        let mut runner = ScenarioRunner::new();
        let first = add_unique(&mut runner, "MS Analytics".to_string(), config_with_tuition("MS Analytics", 800.0));
        let second = add_unique(&mut runner, "MS Analytics".to_string(), config_with_tuition("MS Analytics", 2_500.0));
        let third = add_unique(&mut runner, "MS Analytics".to_string(), config_with_tuition("MS Analytics", 1_000.0));

        assert_eq!(first, "MS Analytics");
        assert_eq!(second, "MS Analytics (2)");
        assert_eq!(third, "MS Analytics (3)");

        let comparison = runner.compare();
        assert_eq!(comparison.entries.len(), 3);
        assert!(comparison.entries[1].total_revenue > comparison.entries[0].total_revenue);
    }

    #[test]
    fn test_unnamed_configs_with_same_stem() {
        let a = Path::new("a/x.json");
        let b = Path::new("b/x.json");
        assert_eq!(scenario_name(a, None), "x");

        let mut runner = ScenarioRunner::new();
        add_unique(&mut runner, scenario_name(a, None), ScenarioConfig::default_program());
        add_unique(&mut runner, scenario_name(b, None), ScenarioConfig::default_program());

        assert_eq!(runner.len(), 2);
        assert!(runner.get("x").is_some());
        assert!(runner.get("x (2)").is_some());
    }

    #[test]
    fn test_explicit_default_name_is_kept() {
        let path = Path::new("plans/base.json");
        assert_eq!(
            scenario_name(path, Some("New Graduate Program")),
            "New Graduate Program"
        );
        assert_eq!(scenario_name(path, None), "base");
    }

    #[test]
    fn test_load_named_config_reads_explicit_name() {
        let dir = std::env::temp_dir().join(format!("compare_scenarios_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let named = dir.join("named.json");
        fs::write(&named, r#"{"program_name": "New Graduate Program", "revenue": {"tuition_per_credit": 900}}"#).unwrap();
        let unnamed = dir.join("unnamed.json");
        fs::write(&unnamed, r#"{"revenue": {"tuition_per_credit": 900}}"#).unwrap();

        let (explicit, config) = load_named_config(&named).unwrap();
        assert_eq!(explicit.as_deref(), Some("New Graduate Program"));
        assert_eq!(config.revenue.tuition_per_credit, 900.0);
        assert_eq!(scenario_name(&named, explicit.as_deref()), "New Graduate Program");

        let (explicit, _) = load_named_config(&unnamed).unwrap();
        assert_eq!(explicit, None);
        assert_eq!(scenario_name(&unnamed, explicit.as_deref()), "unnamed");

        fs::remove_dir_all(&dir).unwrap();
    }
}
