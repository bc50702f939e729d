//! Scenario orchestration: config in, results out

use crate::assumptions::ScenarioConfig;
use crate::calendar::Calendar;
use super::costs::compute_costs;
use super::enrollment::{aggregate_enrollment, build_cohorts, intake_series};
use super::graduation::{program_duration_sessions, GraduationCurve};
use super::pl::{compute_pl_summary, find_break_even_year, PlPeriod};
use super::results::ScenarioResults;
use super::revenue::compute_revenue;

/// Main projection engine
///
/// Holds no state between runs; `run` is a pure function of the config.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ScenarioConfig,
}

impl ProjectionEngine {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn calendar(&self) -> Calendar {
        self.config.calendar()
    }

    /// Project every cohort and roll the money flows up to fiscal years
    pub fn run(&self) -> ScenarioResults {
        let config = &self.config;
        let calendar = self.calendar();

        let duration = program_duration_sessions(&config.structure);
        let curve = GraduationCurve::resolve(&config.graduation, duration);

        log::debug!(
            "Projecting '{}': {} sessions ({} per year), program duration {} sessions, curve length {}",
            config.program_name,
            calendar.total_sessions(),
            calendar.sessions_per_year(),
            duration,
            curve.len()
        );

        // Population
        let intakes = intake_series(&calendar, &config.growth);
        let cohorts = build_cohorts(&calendar, &intakes, &curve, &config.retention);
        let enrollment = aggregate_enrollment(&calendar, &cohorts, curve.len());

        // Money flows
        let revenue = compute_revenue(&enrollment, &config.structure, &config.revenue);
        let costs = compute_costs(&calendar, &enrollment, &config.costs);

        // Fiscal years
        let pl_summary = compute_pl_summary(
            &calendar,
            config.structure.start_fiscal_year,
            &enrollment,
            &revenue,
            &costs,
        );
        let break_even_year = find_break_even_year(&pl_summary);

        match break_even_year {
            Some(fy) => log::debug!("'{}' breaks even in FY{}", config.program_name, fy),
            None => log::debug!("'{}' does not break even within the horizon", config.program_name),
        }

        let (total_revenue, total_cost, total_net, total_margin) = pl_summary
            .iter()
            .find(|r| r.period == PlPeriod::Total)
            .map(|t| (t.revenue, t.cost, t.net, t.margin_pct))
            .unwrap_or((0.0, 0.0, 0.0, 0.0));

        ScenarioResults {
            program_name: config.program_name.clone(),
            sessions: calendar.sessions(),
            program_duration: duration,
            graduation_curve: curve.cumulative(),
            intakes,
            cohorts,
            enrollment,
            revenue,
            costs,
            pl_summary,
            break_even_year,
            total_revenue,
            total_cost,
            total_net,
            total_margin,
        }
    }
}

/// Run one scenario
pub fn compute_scenario(config: &ScenarioConfig) -> ScenarioResults {
    ProjectionEngine::new(config.clone()).run()
}
