//! Named scenarios and side-by-side comparison
//!
//! Keeps a set of what-if configurations, runs them independently, and
//! lines their fiscal-year results up for comparison.

use rayon::prelude::*;
use serde::Serialize;

use crate::assumptions::ScenarioConfig;
use crate::projection::{compute_scenario, ScenarioResults};

/// A saved configuration under a display name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub config: ScenarioConfig,
}

/// Scenario set for batch and comparison runs
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new();
/// runner.add("Base", ScenarioConfig::default_program());
/// runner.add("Low growth", low_growth_config);
/// let comparison = runner.compare();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    scenarios: Vec<NamedScenario>,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scenario; an existing scenario with the same name is replaced in place
    pub fn add(&mut self, name: impl Into<String>, config: ScenarioConfig) {
        let name = name.into();
        match self.scenarios.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.config = config,
            None => self.scenarios.push(NamedScenario { name, config }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<NamedScenario> {
        let index = self.scenarios.iter().position(|s| s.name == name)?;
        Some(self.scenarios.remove(index))
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn scenarios(&self) -> &[NamedScenario] {
        &self.scenarios
    }

    pub fn get(&self, name: &str) -> Option<&NamedScenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Run a single named scenario
    pub fn run(&self, name: &str) -> Option<ScenarioResults> {
        self.get(name).map(|s| compute_scenario(&s.config))
    }

    /// Run every scenario in parallel; output keeps insertion order
    pub fn run_all(&self) -> Vec<(String, ScenarioResults)> {
        log::info!("Running {} scenarios", self.scenarios.len());
        self.scenarios
            .par_iter()
            .map(|s| (s.name.clone(), compute_scenario(&s.config)))
            .collect()
    }

    /// Run several configs that are not kept in the runner
    pub fn run_batch(configs: &[ScenarioConfig]) -> Vec<ScenarioResults> {
        configs.par_iter().map(compute_scenario).collect()
    }

    pub fn compare(&self) -> ScenarioComparison {
        ScenarioComparison::from_results(&self.run_all())
    }
}

/// One scenario's line in a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub name: String,

    /// (fiscal year, cumulative net) per projection year
    pub cumulative_by_year: Vec<(u32, f64)>,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net: f64,
    pub total_margin: f64,
    pub break_even_year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub entries: Vec<ComparisonEntry>,
}

impl ScenarioComparison {
    pub fn from_results(results: &[(String, ScenarioResults)]) -> Self {
        let entries = results
            .iter()
            .map(|(name, r)| ComparisonEntry {
                name: name.clone(),
                cumulative_by_year: r
                    .fiscal_years()
                    .filter_map(|row| row.period.fiscal_year().map(|fy| (fy, row.cumulative)))
                    .collect(),
                total_revenue: r.total_revenue,
                total_cost: r.total_cost,
                total_net: r.total_net,
                total_margin: r.total_margin,
                break_even_year: r.break_even_year,
            })
            .collect();

        Self { entries }
    }

    /// Scenario with the highest total net, if any
    pub fn best_by_net(&self) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .max_by(|a, b| a.total_net.total_cmp(&b.total_net))
    }

    /// Scenario that breaks even soonest
    pub fn earliest_break_even(&self) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .filter(|e| e.break_even_year.is_some())
            .min_by_key(|e| e.break_even_year)
    }
}
