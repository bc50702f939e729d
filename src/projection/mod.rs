//! Multi-cohort enrollment and P&L projection

mod graduation;
mod cohort;
mod enrollment;
mod revenue;
mod costs;
mod pl;
mod results;
mod engine;

pub use graduation::{
    program_duration_sessions, duration_for_credits, default_graduation_curve, GraduationCurve,
};
pub use cohort::Cohort;
pub use enrollment::{
    growth_rate_for_session, intake_series, build_cohorts, aggregate_enrollment, EnrollmentRow,
};
pub use revenue::{RevenueRow, compute_revenue, base_session_revenue};
pub use costs::{CostRow, compute_costs, sections_needed, faculty_cost};
pub use pl::{PlRow, PlPeriod, compute_pl_summary, find_break_even_year, margin_pct};
pub use results::{ScenarioResults, ScenarioSummary};
pub use engine::{ProjectionEngine, compute_scenario};

/// Round a money amount to whole cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compounded escalation multiplier for a fiscal year index
pub fn inflation_factor(annual_rate: f64, year: usize) -> f64 {
    (1.0 + annual_rate).powi(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.005_1), 1.01);
        assert_eq!(round_cents(-2.499), -2.5);
        assert_eq!(round_cents(240_000.0), 240_000.0);
    }

    #[test]
    fn test_inflation_factor() {
        assert_eq!(inflation_factor(0.07, 0), 1.0);
        assert!((inflation_factor(0.07, 2) - 1.1449).abs() < 1e-12);
    }
}
