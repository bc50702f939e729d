//! Scenario output bundle

use serde::Serialize;

use crate::calendar::CalendarSession;
use super::cohort::Cohort;
use super::costs::CostRow;
use super::enrollment::EnrollmentRow;
use super::pl::{PlPeriod, PlRow};
use super::revenue::RevenueRow;

/// Every table derived from one scenario run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResults {
    pub program_name: String,

    /// Calendar timeline
    pub sessions: Vec<CalendarSession>,

    /// Minimum sessions to complete the program
    pub program_duration: usize,

    /// Cumulative graduation fractions used by every cohort
    pub graduation_curve: Vec<f64>,

    /// New-student intake per calendar session
    pub intakes: Vec<f64>,

    /// One cohort per calendar session
    pub cohorts: Vec<Cohort>,

    pub enrollment: Vec<EnrollmentRow>,
    pub revenue: Vec<RevenueRow>,
    pub costs: Vec<CostRow>,

    /// Fiscal-year rows followed by the "Total" row
    pub pl_summary: Vec<PlRow>,

    /// First fiscal year with non-negative cumulative net
    pub break_even_year: Option<u32>,

    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net: f64,
    pub total_margin: f64,
}

impl ScenarioResults {
    /// Fiscal-year P&L rows, without the trailing total
    pub fn fiscal_years(&self) -> impl Iterator<Item = &PlRow> {
        self.pl_summary.iter().filter(|r| r.period != PlPeriod::Total)
    }

    pub fn total_row(&self) -> Option<&PlRow> {
        self.pl_summary.iter().find(|r| r.period == PlPeriod::Total)
    }

    pub fn summary(&self) -> ScenarioSummary {
        let peak_headcount = self.enrollment.iter().map(|r| r.total_active).fold(0.0, f64::max);
        let total_enrolled: f64 = self.intakes.iter().sum();
        let total_graduated: f64 = self.enrollment.iter().map(|r| r.graduating).sum();

        ScenarioSummary {
            total_sessions: self.sessions.len(),
            program_duration: self.program_duration,
            total_revenue: self.total_revenue,
            total_cost: self.total_cost,
            total_net: self.total_net,
            total_margin: self.total_margin,
            break_even_year: self.break_even_year,
            peak_headcount,
            total_enrolled,
            total_graduated,
        }
    }
}

/// Headline figures for a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub total_sessions: usize,
    pub program_duration: usize,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net: f64,
    pub total_margin: f64,
    pub break_even_year: Option<u32>,
    pub peak_headcount: f64,
    pub total_enrolled: f64,
    pub total_graduated: f64,
}

#[cfg(test)]
mod tests {
    use crate::assumptions::ScenarioConfig;
    use crate::projection::compute_scenario;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_matches_tables() {
        let results = compute_scenario(&ScenarioConfig::default_program());
        let summary = results.summary();
        let total = results.total_row().unwrap();

        assert_eq!(summary.total_sessions, 30);
        assert_eq!(summary.program_duration, 10);
        assert_eq!(summary.total_revenue, total.revenue);
        assert_eq!(summary.total_cost, total.cost);
        assert_eq!(summary.total_net, total.net);
        assert_eq!(summary.total_margin, total.margin_pct);
        assert_eq!(summary.break_even_year, results.break_even_year);

        let peak = results
            .enrollment
            .iter()
            .map(|r| r.total_active)
            .fold(0.0, f64::max);
        assert_eq!(summary.peak_headcount, peak);
        assert_eq!(summary.peak_headcount, total.headcount);
        assert!(results.enrollment.iter().all(|r| r.total_active <= summary.peak_headcount));

        let enrolled: f64 = results.enrollment.iter().map(|r| r.new_students).sum();
        let graduated: f64 = results.enrollment.iter().map(|r| r.graduating).sum();
        assert_relative_eq!(summary.total_enrolled, enrolled, epsilon = 1e-6);
        assert_relative_eq!(summary.total_enrolled, total.new_students, epsilon = 1e-6);
        assert_relative_eq!(summary.total_graduated, graduated, epsilon = 1e-6);
        assert_relative_eq!(summary.total_graduated, total.graduates, epsilon = 1e-6);

        assert!(summary.total_graduated > 0.0);
        assert!(summary.total_graduated <= summary.total_enrolled);
    }

    #[test]
    fn test_summary_without_break_even() {
        let mut config = ScenarioConfig::default_program();
        config.revenue.tuition_per_credit = 10.0;

        let summary = compute_scenario(&config).summary();
        assert_eq!(summary.break_even_year, None);
        assert!(summary.total_net < 0.0);
    }
}
