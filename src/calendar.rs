//! Academic calendar model
//!
//! Derives the session timeline (sessions per year, labels, semester
//! classification) from the delivery format and summer inclusion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Course delivery format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryFormat {
    /// Two 8-week sessions per semester
    #[serde(rename = "8-week")]
    EightWeek,
    /// One 16-week session per semester
    #[serde(rename = "16-week")]
    SixteenWeek,
}

impl DeliveryFormat {
    /// Sessions run inside one semester
    pub fn sessions_per_semester(self) -> usize {
        match self {
            DeliveryFormat::EightWeek => 2,
            DeliveryFormat::SixteenWeek => 1,
        }
    }
}

impl Default for DeliveryFormat {
    fn default() -> Self {
        DeliveryFormat::EightWeek
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Spring,
    Summer,
}

impl Semester {
    pub fn name(self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First or second half of a semester (8-week format only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPart {
    A,
    B,
}

impl fmt::Display for SessionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPart::A => f.write_str("A"),
            SessionPart::B => f.write_str("B"),
        }
    }
}

/// Sub-semester session slot within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionSlot {
    FallA,
    FallB,
    SpringA,
    SpringB,
    SummerA,
    SummerB,
}

impl SessionSlot {
    pub const ALL: [SessionSlot; 6] = [
        SessionSlot::FallA,
        SessionSlot::FallB,
        SessionSlot::SpringA,
        SessionSlot::SpringB,
        SessionSlot::SummerA,
        SessionSlot::SummerB,
    ];

    pub fn new(semester: Semester, part: SessionPart) -> Self {
        match (semester, part) {
            (Semester::Fall, SessionPart::A) => SessionSlot::FallA,
            (Semester::Fall, SessionPart::B) => SessionSlot::FallB,
            (Semester::Spring, SessionPart::A) => SessionSlot::SpringA,
            (Semester::Spring, SessionPart::B) => SessionSlot::SpringB,
            (Semester::Summer, SessionPart::A) => SessionSlot::SummerA,
            (Semester::Summer, SessionPart::B) => SessionSlot::SummerB,
        }
    }

    pub fn semester(self) -> Semester {
        match self {
            SessionSlot::FallA | SessionSlot::FallB => Semester::Fall,
            SessionSlot::SpringA | SessionSlot::SpringB => Semester::Spring,
            SessionSlot::SummerA | SessionSlot::SummerB => Semester::Summer,
        }
    }

    pub fn part(self) -> SessionPart {
        match self {
            SessionSlot::FallA | SessionSlot::SpringA | SessionSlot::SummerA => SessionPart::A,
            SessionSlot::FallB | SessionSlot::SpringB | SessionSlot::SummerB => SessionPart::B,
        }
    }
}

/// One session on the calendar timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSession {
    /// Calendar session index (0-based)
    pub index: usize,

    /// Fiscal year index (0-based)
    pub year: usize,

    pub semester: Semester,

    /// Half of the semester, only set in the 8-week format
    pub part: Option<SessionPart>,

    /// Display label, e.g. "Fall-1" or "Fall A-1"
    pub label: String,
}

impl CalendarSession {
    /// Sub-semester slot, if this session is one half of a semester
    pub fn slot(&self) -> Option<SessionSlot> {
        self.part.map(|part| SessionSlot::new(self.semester, part))
    }
}

const WITH_SUMMER: [Semester; 3] = [Semester::Fall, Semester::Spring, Semester::Summer];
const WITHOUT_SUMMER: [Semester; 2] = [Semester::Fall, Semester::Spring];

/// Session timeline for a projection horizon
///
/// Summer sessions are omitted from the sequence entirely when summer is
/// excluded, so every index maps to a session that actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub format: DeliveryFormat,
    pub include_summer: bool,
    pub years: usize,
}

impl Calendar {
    pub fn new(format: DeliveryFormat, include_summer: bool, years: usize) -> Self {
        Self {
            format,
            include_summer,
            years,
        }
    }

    /// Semesters that run each year, in academic order
    pub fn semesters(&self) -> &'static [Semester] {
        if self.include_summer {
            &WITH_SUMMER
        } else {
            &WITHOUT_SUMMER
        }
    }

    pub fn sessions_per_semester(&self) -> usize {
        self.format.sessions_per_semester()
    }

    pub fn sessions_per_year(&self) -> usize {
        self.semesters().len() * self.sessions_per_semester()
    }

    /// Total sessions over the projection horizon
    pub fn total_sessions(&self) -> usize {
        self.years * self.sessions_per_year()
    }

    /// Fiscal year index (0-based) of a calendar session
    pub fn year_of(&self, index: usize) -> usize {
        index / self.sessions_per_year()
    }

    pub fn semester_of(&self, index: usize) -> Semester {
        let within_year = index % self.sessions_per_year();
        self.semesters()[within_year / self.sessions_per_semester()]
    }

    /// Half of the semester for the 8-week format, `None` otherwise
    pub fn part_of(&self, index: usize) -> Option<SessionPart> {
        if self.sessions_per_semester() < 2 {
            return None;
        }
        let within_semester = (index % self.sessions_per_year()) % self.sessions_per_semester();
        Some(if within_semester == 0 {
            SessionPart::A
        } else {
            SessionPart::B
        })
    }

    pub fn slot_of(&self, index: usize) -> Option<SessionSlot> {
        self.part_of(index)
            .map(|part| SessionSlot::new(self.semester_of(index), part))
    }

    pub fn session_label(&self, index: usize) -> String {
        let year = self.year_of(index) + 1;
        let semester = self.semester_of(index);
        match self.part_of(index) {
            Some(part) => format!("{} {}-{}", semester, part, year),
            None => format!("{}-{}", semester, year),
        }
    }

    pub fn session(&self, index: usize) -> CalendarSession {
        CalendarSession {
            index,
            year: self.year_of(index),
            semester: self.semester_of(index),
            part: self.part_of(index),
            label: self.session_label(index),
        }
    }

    /// Every session on the horizon, in order
    pub fn sessions(&self) -> Vec<CalendarSession> {
        (0..self.total_sessions()).map(|i| self.session(i)).collect()
    }

    /// Calendar session range covered by a fiscal year
    pub fn year_range(&self, year: usize) -> std::ops::Range<usize> {
        let start = year * self.sessions_per_year();
        start..start + self.sessions_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_per_year() {
        assert_eq!(Calendar::new(DeliveryFormat::SixteenWeek, false, 5).sessions_per_year(), 2);
        assert_eq!(Calendar::new(DeliveryFormat::SixteenWeek, true, 5).sessions_per_year(), 3);
        assert_eq!(Calendar::new(DeliveryFormat::EightWeek, false, 5).sessions_per_year(), 4);
        assert_eq!(Calendar::new(DeliveryFormat::EightWeek, true, 5).sessions_per_year(), 6);
    }

    #[test]
    fn test_summer_excluded_from_sequence() {
        let calendar = Calendar::new(DeliveryFormat::SixteenWeek, false, 3);
        let sessions = calendar.sessions();

        assert_eq!(sessions.len(), 6);
        assert!(sessions.iter().all(|s| s.semester != Semester::Summer));
        assert_eq!(sessions[2].label, "Fall-2");
        assert_eq!(sessions[2].year, 1);
    }

    #[test]
    fn test_eight_week_labels() {
        let calendar = Calendar::new(DeliveryFormat::EightWeek, true, 2);
        let labels: Vec<String> = (0..7).map(|i| calendar.session_label(i)).collect();

        assert_eq!(
            labels,
            vec!["Fall A-1", "Fall B-1", "Spring A-1", "Spring B-1", "Summer A-1", "Summer B-1", "Fall A-2"]
        );
        assert_eq!(calendar.slot_of(3), Some(SessionSlot::SpringB));
        assert_eq!(calendar.year_of(5), 0);
        assert_eq!(calendar.year_of(6), 1);
    }

    #[test]
    fn test_sixteen_week_has_no_parts() {
        let calendar = Calendar::new(DeliveryFormat::SixteenWeek, true, 1);
        assert_eq!(calendar.session_label(2), "Summer-1");
        assert_eq!(calendar.part_of(1), None);
        assert_eq!(calendar.session(1).slot(), None);
    }

    #[test]
    fn test_slot_round_trip() {
        for slot in SessionSlot::ALL {
            assert_eq!(SessionSlot::new(slot.semester(), slot.part()), slot);
        }
    }

    #[test]
    fn test_year_range() {
        let calendar = Calendar::new(DeliveryFormat::EightWeek, false, 3);
        assert_eq!(calendar.year_range(1), 4..8);
    }
}
