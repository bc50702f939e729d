//! Retention and graduation behavior

use serde::{Deserialize, Serialize};

/// Two-stage retention: an early rate for the first sessions, then a late rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionAssumptions {
    /// Retention applied while the internal session index is below the threshold
    pub early_rate: f64,

    /// Retention applied from the threshold session onwards
    pub late_rate: f64,

    /// First internal session that uses the late rate
    pub threshold_session: usize,
}

impl RetentionAssumptions {
    /// Retention rate for a cohort's internal session index
    pub fn rate_at(&self, internal_session: usize) -> f64 {
        if internal_session < self.threshold_session {
            self.early_rate
        } else {
            self.late_rate
        }
    }
}

impl Default for RetentionAssumptions {
    fn default() -> Self {
        Self {
            early_rate: 0.85,
            late_rate: 0.90,
            threshold_session: 4,
        }
    }
}

/// How students leave the program on completion
///
/// `Cliff` graduates every surviving student once the credit requirement is
/// met. `Custom` supplies a cumulative graduation fraction per internal
/// session; it is assumed monotonic and is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraduationAssumption {
    #[default]
    Cliff,
    Custom(Vec<f64>),
}
