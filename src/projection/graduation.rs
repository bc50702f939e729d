//! Program duration and cumulative graduation curves

use serde::{Deserialize, Serialize};

use crate::assumptions::{GraduationAssumption, ProgramStructure};

/// Minimum sessions needed to earn the program's credits
///
/// `max(1, ceil(total_credits / credits_per_session))`. A non-positive
/// credit load yields a one-session program.
pub fn program_duration_sessions(structure: &ProgramStructure) -> usize {
    duration_for_credits(structure.total_credits(), structure.credits_per_session)
}

pub fn duration_for_credits(total_credits: f64, credits_per_session: f64) -> usize {
    if credits_per_session <= 0.0 {
        return 1;
    }
    let sessions = (total_credits / credits_per_session).ceil();
    if sessions.is_finite() && sessions > 1.0 {
        sessions as usize
    } else {
        1
    }
}

/// Cliff curve: nobody graduates until the final session, then everyone does
pub fn default_graduation_curve(duration: usize) -> Vec<f64> {
    let duration = duration.max(1);
    let mut curve = vec![0.0; duration];
    curve[duration - 1] = 1.0;
    curve
}

/// Cumulative fraction of a cohort's intake graduated by the end of each internal session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraduationCurve {
    Cliff(usize),
    Custom(Vec<f64>),
}

impl GraduationCurve {
    /// Pick the curve for a scenario; an empty custom curve falls back to the cliff
    pub fn resolve(assumption: &GraduationAssumption, duration: usize) -> Self {
        match assumption {
            GraduationAssumption::Custom(curve) if !curve.is_empty() => {
                GraduationCurve::Custom(curve.clone())
            }
            _ => GraduationCurve::Cliff(duration.max(1)),
        }
    }

    /// Internal sessions a cohort spends in the program
    pub fn len(&self) -> usize {
        match self {
            GraduationCurve::Cliff(duration) => (*duration).max(1),
            GraduationCurve::Custom(curve) => curve.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cumulative(&self) -> Vec<f64> {
        match self {
            GraduationCurve::Cliff(duration) => default_graduation_curve(*duration),
            GraduationCurve::Custom(curve) => curve.clone(),
        }
    }

    /// Cumulative fraction at an internal index; past the end everyone has graduated
    pub fn cumulative_at(&self, index: usize) -> f64 {
        match self {
            GraduationCurve::Cliff(duration) => {
                if index + 1 >= (*duration).max(1) { 1.0 } else { 0.0 }
            }
            GraduationCurve::Custom(curve) => curve.get(index).copied().unwrap_or(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_duration() {
        // 10 courses x 3 credits at 3 credits per session
        assert_eq!(duration_for_credits(30.0, 3.0), 10);
        assert_eq!(duration_for_credits(30.0, 6.0), 5);
        assert_eq!(duration_for_credits(30.0, 4.0), 8);
    }

    #[test]
    fn test_duration_floors_at_one() {
        assert_eq!(duration_for_credits(0.0, 3.0), 1);
        assert_eq!(duration_for_credits(2.0, 3.0), 1);
        assert_eq!(duration_for_credits(30.0, 0.0), 1);
        assert_eq!(duration_for_credits(30.0, -3.0), 1);
    }

    #[test]
    fn test_duration_monotonic() {
        let mut previous = 0;
        for credits in (0..=60).map(|c| c as f64) {
            let d = duration_for_credits(credits, 3.0);
            assert!(d >= previous);
            previous = d;
        }

        let mut previous = usize::MAX;
        for load in 1..=12 {
            let d = duration_for_credits(30.0, load as f64);
            assert!(d <= previous);
            previous = d;
        }
    }

    #[test]
    fn test_cliff_curve_shape() {
        let curve = default_graduation_curve(4);
        assert_eq!(curve, vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(default_graduation_curve(0), vec![1.0]);
    }

    #[test]
    fn test_resolve_prefers_custom() {
        let custom = GraduationAssumption::Custom(vec![0.0, 0.4, 1.0]);
        let curve = GraduationCurve::resolve(&custom, 10);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.cumulative(), vec![0.0, 0.4, 1.0]);

        let empty = GraduationAssumption::Custom(Vec::new());
        assert_eq!(GraduationCurve::resolve(&empty, 10), GraduationCurve::Cliff(10));
        assert_eq!(GraduationCurve::resolve(&GraduationAssumption::Cliff, 7), GraduationCurve::Cliff(7));
    }

    #[test]
    fn test_cumulative_at_matches_vector() {
        let curve = GraduationCurve::Cliff(5);
        let values = curve.cumulative();
        for (i, value) in values.iter().enumerate() {
            assert_eq!(curve.cumulative_at(i), *value);
        }
        assert_eq!(curve.cumulative_at(12), 1.0);
    }
}
