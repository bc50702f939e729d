//! Fiscal-year profit and loss roll-up

use std::fmt;

use serde::{Serialize, Serializer};

use crate::calendar::Calendar;
use super::costs::CostRow;
use super::enrollment::EnrollmentRow;
use super::revenue::RevenueRow;
use super::round_cents;

/// Period a P&L row covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlPeriod {
    /// Fiscal year number, e.g. 2026
    FiscalYear(u32),
    /// Whole projection horizon
    Total,
}

impl PlPeriod {
    pub fn fiscal_year(&self) -> Option<u32> {
        match self {
            PlPeriod::FiscalYear(fy) => Some(*fy),
            PlPeriod::Total => None,
        }
    }
}

impl fmt::Display for PlPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlPeriod::FiscalYear(fy) => write!(f, "FY{}", fy),
            PlPeriod::Total => f.write_str("Total"),
        }
    }
}

// Flat string form keeps CSV and JSON output tabular
impl Serialize for PlPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlRow {
    pub period: PlPeriod,
    pub revenue: f64,
    pub cost: f64,
    pub net: f64,
    pub cumulative: f64,
    pub margin_pct: f64,

    /// Peak active students within the period
    pub headcount: f64,
    pub new_students: f64,
    pub graduates: f64,
}

/// Net as a percentage of revenue, 0 when there is no revenue
pub fn margin_pct(net: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        0.0
    } else {
        net / revenue * 100.0
    }
}

fn peak(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// Roll sessions into fiscal years and append a "Total" row
pub fn compute_pl_summary(
    calendar: &Calendar,
    start_fiscal_year: u32,
    enrollment: &[EnrollmentRow],
    revenue: &[RevenueRow],
    costs: &[CostRow],
) -> Vec<PlRow> {
    let mut rows = Vec::with_capacity(calendar.years + 1);
    let mut cumulative = 0.0;

    for year in 0..calendar.years {
        let range = calendar.year_range(year);
        let slice = |len: usize| range.start.min(len)..range.end.min(len);

        let year_revenue: f64 = revenue[slice(revenue.len())].iter().map(|r| r.revenue).sum();
        let year_cost: f64 = costs[slice(costs.len())].iter().map(|c| c.total_cost).sum();
        let students = &enrollment[slice(enrollment.len())];

        let net = year_revenue - year_cost;
        cumulative += net;

        log::trace!(
            "FY{}: revenue={:.2} cost={:.2} cumulative={:.2}",
            start_fiscal_year + year as u32,
            year_revenue,
            year_cost,
            cumulative
        );

        rows.push(PlRow {
            period: PlPeriod::FiscalYear(start_fiscal_year + year as u32),
            revenue: round_cents(year_revenue),
            cost: round_cents(year_cost),
            net: round_cents(net),
            cumulative: round_cents(cumulative),
            margin_pct: round_cents(margin_pct(net, year_revenue)),
            headcount: peak(students.iter().map(|s| s.total_active)),
            new_students: students.iter().map(|s| s.new_students).sum(),
            graduates: students.iter().map(|s| s.graduating).sum(),
        });
    }

    let total_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
    let total_cost: f64 = rows.iter().map(|r| r.cost).sum();
    let total_net = total_revenue - total_cost;

    rows.push(PlRow {
        period: PlPeriod::Total,
        revenue: round_cents(total_revenue),
        cost: round_cents(total_cost),
        net: round_cents(total_net),
        cumulative: round_cents(cumulative),
        margin_pct: round_cents(margin_pct(total_net, total_revenue)),
        headcount: peak(rows.iter().map(|r| r.headcount)),
        new_students: rows.iter().map(|r| r.new_students).sum(),
        graduates: rows.iter().map(|r| r.graduates).sum(),
    });

    rows
}

/// First fiscal year whose cumulative net is non-negative
pub fn find_break_even_year(rows: &[PlRow]) -> Option<u32> {
    rows.iter()
        .filter(|row| row.period != PlPeriod::Total)
        .find(|row| row.cumulative >= 0.0)
        .and_then(|row| row.period.fiscal_year())
}
