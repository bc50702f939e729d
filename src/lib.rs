//! Cohort Projection - Deterministic financial projection engine for academic programs
//!
//! This library provides:
//! - Academic calendars (16-week or 8-week sessions, optional summer)
//! - Multi-cohort enrollment simulation (growth, retention, graduation)
//! - Session-level tuition revenue and operating cost models
//! - Fiscal-year P&L roll-up with break-even detection
//! - Named what-if scenarios and side-by-side comparison

pub mod calendar;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod output;

// Re-export commonly used types
pub use calendar::{Calendar, DeliveryFormat};
pub use assumptions::{ScenarioConfig, ProgramStructure, ConfigError};
pub use projection::{ProjectionEngine, ScenarioResults, PlRow, compute_scenario};
pub use scenario::{ScenarioRunner, ScenarioComparison};
