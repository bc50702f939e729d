//! Scenario assumptions: program structure, growth, retention, and money flows

mod growth;
mod retention;
mod financial;
pub mod loader;

pub use growth::{GrowthAssumptions, YearGrowthRate, SessionRateOverrides};
pub use retention::{RetentionAssumptions, GraduationAssumption};
pub use financial::{RevenueAssumptions, CostAssumptions};
pub use loader::{ConfigError, load_growth_rates};

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, DeliveryFormat};

/// Structural parameters of the program being planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramStructure {
    pub total_courses: u32,
    pub credits_per_course: f64,

    /// Credits a student takes each session; assumed > 0
    pub credits_per_session: f64,

    pub delivery_format: DeliveryFormat,
    pub include_summer: bool,

    /// Projection horizon in fiscal years; assumed >= 1
    pub projection_years: usize,

    /// Fiscal year number of the first projection year
    pub start_fiscal_year: u32,

    /// Identical programs sharing this enrollment profile
    pub number_of_programs: u32,
}

impl ProgramStructure {
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.delivery_format, self.include_summer, self.projection_years)
    }

    pub fn total_credits(&self) -> f64 {
        self.total_courses as f64 * self.credits_per_course
    }
}

impl Default for ProgramStructure {
    fn default() -> Self {
        Self {
            total_courses: 10,
            credits_per_course: 3.0,
            credits_per_session: 3.0,
            delivery_format: DeliveryFormat::EightWeek,
            include_summer: true,
            projection_years: 5,
            start_fiscal_year: 2026,
            number_of_programs: 1,
        }
    }
}

/// Complete input to one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub program_name: String,
    pub structure: ProgramStructure,
    pub growth: GrowthAssumptions,
    pub retention: RetentionAssumptions,
    pub graduation: GraduationAssumption,
    pub revenue: RevenueAssumptions,
    pub costs: CostAssumptions,
}

impl ScenarioConfig {
    /// Reference program used when no configuration is supplied
    pub fn default_program() -> Self {
        Self {
            program_name: "New Graduate Program".to_string(),
            structure: ProgramStructure::default(),
            growth: GrowthAssumptions::default(),
            retention: RetentionAssumptions::default(),
            graduation: GraduationAssumption::Cliff,
            revenue: RevenueAssumptions::default(),
            costs: CostAssumptions::default(),
        }
    }

    pub fn calendar(&self) -> Calendar {
        self.structure.calendar()
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::default_program()
    }
}
