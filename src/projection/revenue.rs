//! Per-session tuition revenue

use serde::{Deserialize, Serialize};

use crate::assumptions::{ProgramStructure, RevenueAssumptions};
use super::enrollment::EnrollmentRow;
use super::{inflation_factor, round_cents};

/// Tuition revenue for one calendar session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRow {
    pub session: usize,
    pub label: String,
    pub year: usize,
    pub active_students: f64,

    /// Tuition per credit after inflation
    pub tuition_per_credit: f64,
    pub credits_per_session: f64,

    /// Revenue before tuition inflation
    pub base_revenue: f64,
    pub revenue: f64,
}

/// Revenue before inflation for a session's active headcount
pub fn base_session_revenue(
    active_students: f64,
    number_of_programs: u32,
    tuition_per_credit: f64,
    credits_per_session: f64,
) -> f64 {
    active_students * number_of_programs as f64 * tuition_per_credit * credits_per_session
}

pub fn compute_revenue(
    enrollment: &[EnrollmentRow],
    structure: &ProgramStructure,
    assumptions: &RevenueAssumptions,
) -> Vec<RevenueRow> {
    enrollment
        .iter()
        .map(|row| {
            let mult = inflation_factor(assumptions.tuition_inflation, row.year);
            let base = base_session_revenue(
                row.total_active,
                structure.number_of_programs,
                assumptions.tuition_per_credit,
                structure.credits_per_session,
            );

            RevenueRow {
                session: row.session,
                label: row.label.clone(),
                year: row.year,
                active_students: row.total_active,
                tuition_per_credit: round_cents(assumptions.tuition_per_credit * mult),
                credits_per_session: structure.credits_per_session,
                base_revenue: round_cents(base),
                revenue: round_cents(base * mult),
            }
        })
        .collect()
}
