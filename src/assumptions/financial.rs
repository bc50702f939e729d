//! Tuition and cost structure

use serde::{Deserialize, Serialize};

/// Tuition pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueAssumptions {
    pub tuition_per_credit: f64,

    /// Annual tuition escalation, compounded per fiscal year
    pub tuition_inflation: f64,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            tuition_per_credit: 1_395.0,
            tuition_inflation: 0.0,
        }
    }
}

/// Delivery, development, overhead, and acquisition costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAssumptions {
    // Faculty
    pub faculty_cost_per_section: f64,
    pub max_students_per_section: u32,

    // Teaching assistants
    /// Students per TA
    pub ta_student_ratio: f64,
    pub ta_hourly_rate: f64,
    pub ta_hours_per_week: f64,
    pub weeks_per_session: f64,

    // Course development
    pub courses_to_develop: u32,
    pub dev_cost_per_course: f64,
    pub courses_to_revise: u32,
    /// Revision cost as a fraction of new-course development cost
    pub revision_cost_pct: f64,
    /// Sessions over which development cost is spread
    pub dev_amortization_terms: usize,

    // Overhead and marketing
    pub variable_overhead_per_student: f64,
    pub fixed_overhead_per_semester: f64,
    pub cac_per_student: f64,

    /// Annual cost escalation, compounded per fiscal year
    pub cost_inflation: f64,
}

impl CostAssumptions {
    /// TA cost per active student per session (0 when the ratio is 0)
    pub fn ta_cost_per_student(&self) -> f64 {
        if self.ta_student_ratio == 0.0 {
            return 0.0;
        }
        self.ta_hourly_rate * self.ta_hours_per_week * self.weeks_per_session / self.ta_student_ratio
    }

    /// New-course development plus weighted revision cost
    pub fn total_development_cost(&self) -> f64 {
        let new_courses = self.courses_to_develop as f64 * self.dev_cost_per_course;
        let revisions =
            self.courses_to_revise as f64 * self.dev_cost_per_course * self.revision_cost_pct;
        new_courses + revisions
    }

    /// Development cost charged in a calendar session, before inflation
    pub fn amortized_development(&self, session: usize) -> f64 {
        let terms = self.dev_amortization_terms.max(1);
        if session < terms {
            self.total_development_cost() / terms as f64
        } else {
            0.0
        }
    }
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            faculty_cost_per_section: 12_000.0,
            max_students_per_section: 30,
            ta_student_ratio: 30.0,
            ta_hourly_rate: 21.0,
            ta_hours_per_week: 20.0,
            weeks_per_session: 8.0,
            courses_to_develop: 3,
            dev_cost_per_course: 50_000.0,
            courses_to_revise: 0,
            revision_cost_pct: 0.30,
            dev_amortization_terms: 2,
            variable_overhead_per_student: 50.0,
            fixed_overhead_per_semester: 50_000.0,
            cac_per_student: 3_000.0,
            cost_inflation: 0.07,
        }
    }
}
