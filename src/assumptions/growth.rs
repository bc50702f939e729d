//! Enrollment growth assumptions
//!
//! Growth is given per fiscal year as Fall/Spring/Summer fractions. The
//! 8-week format may override individual half-semester sessions; any slot
//! without an override falls back to its semester rate.

use serde::{Deserialize, Serialize};

use crate::calendar::{Semester, SessionSlot};

/// Optional per-slot growth overrides for the 8-week format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRateOverrides {
    pub fall_a: Option<f64>,
    pub fall_b: Option<f64>,
    pub spring_a: Option<f64>,
    pub spring_b: Option<f64>,
    pub summer_a: Option<f64>,
    pub summer_b: Option<f64>,
}

impl SessionRateOverrides {
    pub fn get(&self, slot: SessionSlot) -> Option<f64> {
        match slot {
            SessionSlot::FallA => self.fall_a,
            SessionSlot::FallB => self.fall_b,
            SessionSlot::SpringA => self.spring_a,
            SessionSlot::SpringB => self.spring_b,
            SessionSlot::SummerA => self.summer_a,
            SessionSlot::SummerB => self.summer_b,
        }
    }

    pub fn set(&mut self, slot: SessionSlot, rate: Option<f64>) {
        let field = match slot {
            SessionSlot::FallA => &mut self.fall_a,
            SessionSlot::FallB => &mut self.fall_b,
            SessionSlot::SpringA => &mut self.spring_a,
            SessionSlot::SpringB => &mut self.spring_b,
            SessionSlot::SummerA => &mut self.summer_a,
            SessionSlot::SummerB => &mut self.summer_b,
        };
        *field = rate;
    }

    pub fn is_empty(&self) -> bool {
        SessionSlot::ALL.iter().all(|&slot| self.get(slot).is_none())
    }
}

/// Growth fractions for one fiscal year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearGrowthRate {
    pub fall: f64,
    pub spring: f64,
    pub summer: f64,

    #[serde(default, skip_serializing_if = "SessionRateOverrides::is_empty")]
    pub overrides: SessionRateOverrides,
}

impl YearGrowthRate {
    pub fn new(fall: f64, spring: f64, summer: f64) -> Self {
        Self {
            fall,
            spring,
            summer,
            overrides: SessionRateOverrides::default(),
        }
    }

    /// Set a half-semester override
    pub fn with_override(mut self, slot: SessionSlot, rate: f64) -> Self {
        self.overrides.set(slot, Some(rate));
        self
    }

    pub fn semester_rate(&self, semester: Semester) -> f64 {
        match semester {
            Semester::Fall => self.fall,
            Semester::Spring => self.spring,
            Semester::Summer => self.summer,
        }
    }

    /// Rate for a session: the slot override if one is set, else the semester rate
    pub fn rate_for(&self, semester: Semester, slot: Option<SessionSlot>) -> f64 {
        slot.and_then(|s| self.overrides.get(s))
            .unwrap_or_else(|| self.semester_rate(semester))
    }
}

/// Intake size and year-by-year growth table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthAssumptions {
    /// Students in the first cohort
    pub initial_intake: f64,

    /// Growth rows by fiscal year (index 0 = first projection year)
    pub yearly: Vec<YearGrowthRate>,
}

impl GrowthAssumptions {
    /// Same semester rates for every year of the horizon
    pub fn uniform(initial_intake: f64, rate: YearGrowthRate, years: usize) -> Self {
        Self {
            initial_intake,
            yearly: vec![rate; years.max(1)],
        }
    }

    /// Growth row for a fiscal year, clamped to the last defined row
    pub fn row_for_year(&self, year: usize) -> Option<&YearGrowthRate> {
        self.yearly.get(year).or_else(|| self.yearly.last())
    }
}

impl Default for GrowthAssumptions {
    fn default() -> Self {
        Self::uniform(25.0, YearGrowthRate::new(0.25, 0.01, 0.01), 5)
    }
}
