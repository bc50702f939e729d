//! Per-session delivery cost
//!
//! Six components: faculty sections, teaching assistants, amortized course
//! development, variable overhead, fixed overhead, and acquisition (CAC).
//! Every component is computed on an un-inflated base and then scaled by
//! the same cost-inflation multiplier for the session's fiscal year.

use serde::{Deserialize, Serialize};

use crate::assumptions::CostAssumptions;
use crate::calendar::Calendar;
use super::enrollment::EnrollmentRow;
use super::{inflation_factor, round_cents};

/// Cost breakdown for one calendar session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    pub session: usize,
    pub label: String,
    pub year: usize,
    pub active_students: f64,
    pub new_students: f64,
    pub sections: u64,

    // Inflated components
    pub faculty: f64,
    pub teaching_assistants: f64,
    pub course_development: f64,
    pub variable_overhead: f64,
    pub fixed_overhead: f64,
    pub acquisition: f64,

    /// Sum of components before inflation
    pub base_total: f64,
    pub total_cost: f64,
}

/// Sections needed to seat the active students, at least one whenever anyone is enrolled
pub fn sections_needed(active_students: f64, max_students_per_section: u32) -> u64 {
    if active_students <= 0.0 {
        return 0;
    }
    if max_students_per_section == 0 {
        return 1;
    }
    let sections = (active_students / max_students_per_section as f64).ceil();
    (sections as u64).max(1)
}

pub fn faculty_cost(active_students: f64, assumptions: &CostAssumptions) -> f64 {
    sections_needed(active_students, assumptions.max_students_per_section) as f64
        * assumptions.faculty_cost_per_section
}

/// Un-inflated component amounts for one session
#[derive(Debug, Clone, Copy, PartialEq)]
struct BaseComponents {
    faculty: f64,
    teaching_assistants: f64,
    course_development: f64,
    variable_overhead: f64,
    fixed_overhead: f64,
    acquisition: f64,
}

impl BaseComponents {
    fn for_session(
        session: usize,
        active: f64,
        new_students: f64,
        calendar: &Calendar,
        assumptions: &CostAssumptions,
    ) -> Self {
        Self {
            faculty: faculty_cost(active, assumptions),
            teaching_assistants: active * assumptions.ta_cost_per_student(),
            course_development: assumptions.amortized_development(session),
            variable_overhead: active * assumptions.variable_overhead_per_student,
            // Split evenly across the sessions of a semester
            fixed_overhead: assumptions.fixed_overhead_per_semester
                / calendar.sessions_per_semester() as f64,
            // Charged on the full incoming cohort, before any dropout
            acquisition: new_students * assumptions.cac_per_student,
        }
    }

    fn total(&self) -> f64 {
        self.faculty
            + self.teaching_assistants
            + self.course_development
            + self.variable_overhead
            + self.fixed_overhead
            + self.acquisition
    }
}

pub fn compute_costs(
    calendar: &Calendar,
    enrollment: &[EnrollmentRow],
    assumptions: &CostAssumptions,
) -> Vec<CostRow> {
    enrollment
        .iter()
        .map(|row| {
            let mult = inflation_factor(assumptions.cost_inflation, row.year);
            let base = BaseComponents::for_session(
                row.session,
                row.total_active,
                row.new_students,
                calendar,
                assumptions,
            );
            let base_total = base.total();

            CostRow {
                session: row.session,
                label: row.label.clone(),
                year: row.year,
                active_students: row.total_active,
                new_students: row.new_students,
                sections: sections_needed(row.total_active, assumptions.max_students_per_section),
                faculty: round_cents(base.faculty * mult),
                teaching_assistants: round_cents(base.teaching_assistants * mult),
                course_development: round_cents(base.course_development * mult),
                variable_overhead: round_cents(base.variable_overhead * mult),
                fixed_overhead: round_cents(base.fixed_overhead * mult),
                acquisition: round_cents(base.acquisition * mult),
                base_total: round_cents(base_total),
                total_cost: round_cents(base_total * mult),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DeliveryFormat;
    use approx::assert_relative_eq;

    fn enrollment_row(session: usize, year: usize, total_active: f64, new_students: f64) -> EnrollmentRow {
        EnrollmentRow {
            session,
            label: format!("S{}", session),
            year,
            total_active,
            new_students,
            graduating: 0.0,
        }
    }

    #[test]
    fn test_reference_faculty_cost() {
        let assumptions = CostAssumptions {
            faculty_cost_per_section: 12_000.0,
            max_students_per_section: 100,
            ..Default::default()
        };

        assert_eq!(sections_needed(150.0, 100), 2);
        assert_eq!(faculty_cost(150.0, &assumptions), 24_000.0);
    }

    #[test]
    fn test_sections_minimum_and_empty() {
        assert_eq!(sections_needed(0.0, 30), 0);
        assert_eq!(sections_needed(0.4, 30), 1);
        assert_eq!(sections_needed(30.0, 30), 1);
        assert_eq!(sections_needed(30.5, 30), 2);
        assert_eq!(sections_needed(12.0, 0), 1);
    }

    #[test]
    fn test_component_breakdown_year_zero() {
        let calendar = Calendar::new(DeliveryFormat::EightWeek, true, 1);
        let assumptions = CostAssumptions::default();
        let rows = compute_costs(&calendar, &[enrollment_row(0, 0, 25.0, 25.0)], &assumptions);
        let row = &rows[0];

        assert_eq!(row.sections, 1);
        assert_eq!(row.faculty, 12_000.0);
        assert_relative_eq!(row.teaching_assistants, 2_800.0);
        assert_eq!(row.course_development, 75_000.0);
        assert_eq!(row.variable_overhead, 1_250.0);
        // 50,000 per semester split over two 8-week sessions
        assert_eq!(row.fixed_overhead, 25_000.0);
        assert_eq!(row.acquisition, 75_000.0);
        assert_relative_eq!(row.total_cost, 191_050.0);
        assert_relative_eq!(row.base_total, row.total_cost);
    }

    #[test]
    fn test_inflation_applies_to_every_component() {
        let calendar = Calendar::new(DeliveryFormat::SixteenWeek, false, 3);
        let assumptions = CostAssumptions {
            cost_inflation: 0.10,
            dev_amortization_terms: 1,
            ..Default::default()
        };
        let rows = compute_costs(&calendar, &[enrollment_row(4, 2, 10.0, 0.0)], &assumptions);
        let row = &rows[0];

        // Development finished in session 0; no new students
        assert_eq!(row.course_development, 0.0);
        assert_eq!(row.acquisition, 0.0);
        assert_relative_eq!(row.fixed_overhead, 60_500.0);
        assert_relative_eq!(row.faculty, 14_520.0);
        assert_relative_eq!(row.total_cost, row.base_total * 1.21, epsilon = 0.01);
    }

    #[test]
    fn test_no_students_still_carries_fixed_costs() {
        let calendar = Calendar::new(DeliveryFormat::SixteenWeek, true, 1);
        let assumptions = CostAssumptions {
            dev_amortization_terms: 1,
            ..Default::default()
        };
        let rows = compute_costs(&calendar, &[enrollment_row(2, 0, 0.0, 0.0)], &assumptions);

        assert_eq!(rows[0].faculty, 0.0);
        assert_eq!(rows[0].total_cost, 50_000.0);
    }
}
