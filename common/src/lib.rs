//! Shared vacancy types and salary statistics.
//!
//! Everything here is pure: the collector binary fetches records over HTTP
//! and hands them to these functions.

pub mod extract;
pub mod salary;
pub mod stats;
pub mod table;

use serde::{Deserialize, Serialize};

pub use extract::{HeadHunterSalary, SalaryExtractor, SuperJobSalary};
pub use salary::estimate;
pub use stats::aggregate;
pub use table::render_table;

/// One vacancy as returned by a job-board search API.
pub type VacancyRecord = serde_json::Map<String, serde_json::Value>;

/// Salary range reported for a vacancy. Either bound may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryBounds {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
}

impl SalaryBounds {
    pub fn new(lower: Option<i64>, upper: Option<i64>) -> Self {
        Self { lower, upper }
    }

    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Per-keyword result of one collection run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordStatistics {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: i64,
}

/// Statistics for every keyword of one source, in keyword order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    title: String,
    rows: Vec<(String, KeywordStatistics)>,
}

impl ResultTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Stores statistics for `keyword`, replacing an earlier entry in place.
    pub fn insert(&mut self, keyword: impl Into<String>, stats: KeywordStatistics) {
        let keyword = keyword.into();
        match self.rows.iter_mut().find(|(existing, _)| *existing == keyword) {
            Some((_, slot)) => *slot = stats,
            None => self.rows.push((keyword, stats)),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStatistics> {
        self.rows
            .iter()
            .find(|(existing, _)| existing == keyword)
            .map(|(_, stats)| stats)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &KeywordStatistics)> {
        self.rows.iter().map(|(keyword, stats)| (keyword.as_str(), stats))
    }
}
