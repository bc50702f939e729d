//! Intake growth and cohort aggregation onto the calendar

use serde::{Deserialize, Serialize};

use crate::assumptions::{GrowthAssumptions, RetentionAssumptions};
use crate::calendar::Calendar;
use super::cohort::Cohort;
use super::graduation::GraduationCurve;

/// Growth rate applied when moving into calendar session `index`
///
/// Uses the fiscal-year row for the session (clamped to the last row). In
/// the 8-week format a half-semester override wins over the semester rate.
pub fn growth_rate_for_session(index: usize, calendar: &Calendar, growth: &GrowthAssumptions) -> f64 {
    match growth.row_for_year(calendar.year_of(index)) {
        Some(row) => row.rate_for(calendar.semester_of(index), calendar.slot_of(index)),
        None => 0.0,
    }
}

/// New-student intake for every calendar session
///
/// `intake[0]` is the initial intake; each later session compounds the
/// previous intake by its growth rate. Values stay fractional.
pub fn intake_series(calendar: &Calendar, growth: &GrowthAssumptions) -> Vec<f64> {
    let sessions = calendar.total_sessions();
    let mut intakes: Vec<f64> = Vec::with_capacity(sessions);

    for t in 0..sessions {
        let intake = match intakes.last() {
            None => growth.initial_intake,
            Some(&previous) => previous * (1.0 + growth_rate_for_session(t, calendar, growth)),
        };
        intakes.push(intake);
    }

    intakes
}

/// Simulate one cohort per calendar session
pub fn build_cohorts(
    calendar: &Calendar,
    intakes: &[f64],
    curve: &GraduationCurve,
    retention: &RetentionAssumptions,
) -> Vec<Cohort> {
    intakes
        .iter()
        .enumerate()
        .map(|(start, &intake)| {
            Cohort::simulate(calendar.session_label(start), start, intake, curve, retention)
        })
        .collect()
}

/// Student counts for one calendar session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRow {
    pub session: usize,
    pub label: String,
    pub year: usize,
    pub total_active: f64,
    pub new_students: f64,
    pub graduating: f64,
}

/// Overlay every cohort onto the calendar
///
/// Only cohorts that started within the last `window` sessions contribute,
/// so the work is bounded by sessions x program duration.
pub fn aggregate_enrollment(calendar: &Calendar, cohorts: &[Cohort], window: usize) -> Vec<EnrollmentRow> {
    (0..calendar.total_sessions())
        .map(|t| {
            let mut total_active = 0.0;
            let mut graduating = 0.0;

            for offset in 0..window.min(t + 1) {
                if let Some(cohort) = cohorts.get(t - offset) {
                    total_active += cohort.active_at(offset);
                    graduating += cohort.graduating_at(offset);
                }
            }

            let new_students = cohorts
                .get(t)
                .filter(|c| c.start_session == t)
                .map(|c| c.intake)
                .unwrap_or(0.0);

            EnrollmentRow {
                session: t,
                label: calendar.session_label(t),
                year: calendar.year_of(t),
                total_active,
                new_students,
                graduating,
            }
        })
        .collect()
}
