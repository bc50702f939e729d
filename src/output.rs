//! Tabular CSV output for batch drivers

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::projection::ScenarioResults;

/// Flat per-session row joining enrollment, revenue, and cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub session: usize,
    pub label: String,
    pub fiscal_year: u32,
    pub new_students: f64,
    pub active_students: f64,
    pub graduating: f64,
    pub tuition_per_credit: f64,
    pub base_revenue: f64,
    pub revenue: f64,
    pub sections: u64,
    pub faculty: f64,
    pub teaching_assistants: f64,
    pub course_development: f64,
    pub variable_overhead: f64,
    pub fixed_overhead: f64,
    pub acquisition: f64,
    pub base_cost: f64,
    pub total_cost: f64,
}

/// Join the per-session tables of a run
pub fn session_records(results: &ScenarioResults, start_fiscal_year: u32) -> Vec<SessionRecord> {
    results
        .enrollment
        .iter()
        .zip(&results.revenue)
        .zip(&results.costs)
        .map(|((e, r), c)| SessionRecord {
            session: e.session,
            label: e.label.clone(),
            fiscal_year: start_fiscal_year + e.year as u32,
            new_students: e.new_students,
            active_students: e.total_active,
            graduating: e.graduating,
            tuition_per_credit: r.tuition_per_credit,
            base_revenue: r.base_revenue,
            revenue: r.revenue,
            sections: c.sections,
            faculty: c.faculty,
            teaching_assistants: c.teaching_assistants,
            course_development: c.course_development,
            variable_overhead: c.variable_overhead,
            fixed_overhead: c.fixed_overhead,
            acquisition: c.acquisition,
            base_cost: c.base_total,
            total_cost: c.total_cost,
        })
        .collect()
}

/// Serialize rows to any writer with a header line
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv<P: AsRef<Path>, T: Serialize>(path: P, rows: &[T]) -> Result<(), csv::Error> {
    write_rows(File::create(path)?, rows)
}

/// Cohort matrix: one row per cohort, one column per internal session
pub fn write_cohorts<W: Write>(writer: W, results: &ScenarioResults) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let width = results.cohorts.iter().map(|c| c.active.len()).max().unwrap_or(0);

    let mut header = vec!["cohort".to_string(), "intake".to_string()];
    header.extend((1..=width).map(|i| format!("T{}", i)));
    csv_writer.write_record(&header)?;

    for cohort in &results.cohorts {
        let mut record = vec![cohort.label.clone(), format!("{:.2}", cohort.intake)];
        record.extend(cohort.active.iter().map(|a| format!("{:.2}", a)));
        record.resize(width + 2, String::new());
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
