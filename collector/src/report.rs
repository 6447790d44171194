//! Per-keyword collection across job boards.

use crate::sources::{FetchError, VacancySource};
use common::{aggregate, KeywordStatistics, ResultTable};
use tracing::info;

/// Fetches and summarizes every keyword from `source`, one request at a time.
pub fn collect(
    source: &dyn VacancySource,
    keywords: &[String],
) -> Result<ResultTable, FetchError> {
    let mut table = ResultTable::new(source.title());
    for keyword in keywords {
        let vacancies = source.fetch(keyword)?;
        let stats = if vacancies.is_empty() {
            KeywordStatistics::default()
        } else {
            aggregate(&vacancies, source.extractor())
        };

        info!(
            source = source.title(),
            keyword = keyword.as_str(),
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average_salary = stats.average_salary,
            "collected keyword statistics"
        );
        table.insert(keyword.as_str(), stats);
    }
    Ok(table)
}

/// Collects one table per source, in the order given. The first failure aborts the run.
pub fn run(
    sources: &[&dyn VacancySource],
    keywords: &[String],
) -> Result<Vec<ResultTable>, FetchError> {
    sources
        .iter()
        .map(|source| collect(*source, keywords))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{SalaryBounds, SalaryExtractor, SuperJobSalary, VacancyRecord};
    use reqwest::StatusCode;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Counts how often aggregation reads a salary.
    #[derive(Default)]
    struct CountingSalary {
        calls: Cell<usize>,
    }

    impl SalaryExtractor for CountingSalary {
        fn extract(&self, record: &VacancyRecord) -> SalaryBounds {
            self.calls.set(self.calls.get() + 1);
            SuperJobSalary.extract(record)
        }
    }

    struct StubSource {
        title: &'static str,
        vacancies: HashMap<&'static str, Vec<VacancyRecord>>,
        failing: Option<&'static str>,
        requested: RefCell<Vec<String>>,
        salary: CountingSalary,
    }

    impl StubSource {
        fn new(title: &'static str) -> Self {
            Self {
                title,
                vacancies: HashMap::new(),
                failing: None,
                requested: RefCell::new(Vec::new()),
                salary: CountingSalary::default(),
            }
        }

        fn with(mut self, keyword: &'static str, payments: &[(i64, i64)]) -> Self {
            let records = payments
                .iter()
                .map(|(from, to)| {
                    let mut record = VacancyRecord::new();
                    record.insert("payment_from".to_string(), json!(from));
                    record.insert("payment_to".to_string(), json!(to));
                    record
                })
                .collect();
            self.vacancies.insert(keyword, records);
            self
        }
    }

    impl VacancySource for StubSource {
        fn title(&self) -> &str {
            self.title
        }

        fn fetch(&self, keyword: &str) -> Result<Vec<VacancyRecord>, FetchError> {
            self.requested.borrow_mut().push(keyword.to_string());
            if self.failing == Some(keyword) {
                return Err(FetchError::Status {
                    url: format!("http://stub/{keyword}"),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            Ok(self.vacancies.get(keyword).cloned().unwrap_or_default())
        }

        fn extractor(&self) -> &dyn SalaryExtractor {
            &self.salary
        }
    }

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn collect_builds_row_per_keyword_in_order() {
        let source = StubSource::new("SuperJob Moscow")
            .with("Go", &[(80000, 100000), (0, 0)])
            .with("Rust", &[(100000, 0)]);

        let table = collect(&source, &keywords(&["Rust", "Go"])).expect("collect succeeds");

        let order: Vec<&str> = table.rows().map(|(keyword, _)| keyword).collect();
        assert_eq!(order, vec!["Rust", "Go"]);
        assert_eq!(table.title(), "SuperJob Moscow");
        assert_eq!(
            table.get("Go"),
            Some(&KeywordStatistics {
                vacancies_found: 2,
                vacancies_processed: 1,
                average_salary: 90000,
            })
        );
        assert_eq!(table.get("Rust").map(|s| s.average_salary), Some(120000));
    }

    #[test]
    fn collect_skips_aggregation_for_empty_results() {
        let source = StubSource::new("HeadHunter Moscow");

        let table = collect(&source, &keywords(&["COBOL"])).expect("collect succeeds");

        assert_eq!(table.get("COBOL"), Some(&KeywordStatistics::default()));
        assert_eq!(source.salary.calls.get(), 0);
    }

    #[test]
    fn collect_propagates_fetch_failure() {
        let mut source = StubSource::new("HeadHunter Moscow").with("Rust", &[(1, 2)]);
        source.failing = Some("Go");

        let result = collect(&source, &keywords(&["Rust", "Go", "Java"]));

        assert!(matches!(result, Err(FetchError::Status { .. })));
        assert_eq!(*source.requested.borrow(), vec!["Rust", "Go"]);
    }

    #[test]
    fn run_returns_tables_in_source_order() {
        let superjob = StubSource::new("SuperJob Moscow").with("Rust", &[(50000, 70000)]);
        let headhunter = StubSource::new("HeadHunter Moscow");

        let sources: [&dyn VacancySource; 2] = [&superjob, &headhunter];
        let tables = run(&sources, &keywords(&["Rust"])).expect("run succeeds");

        let titles: Vec<&str> = tables.iter().map(|table| table.title()).collect();
        assert_eq!(titles, vec!["SuperJob Moscow", "HeadHunter Moscow"]);
        assert_eq!(tables[0].get("Rust").map(|s| s.average_salary), Some(60000));
        assert_eq!(tables[1].get("Rust"), Some(&KeywordStatistics::default()));
    }

    #[test]
    fn run_stops_at_first_failing_source() {
        let mut superjob = StubSource::new("SuperJob Moscow");
        superjob.failing = Some("Rust");
        let headhunter = StubSource::new("HeadHunter Moscow");

        let sources: [&dyn VacancySource; 2] = [&superjob, &headhunter];
        let result = run(&sources, &keywords(&["Rust"]));

        assert!(result.is_err());
        assert!(headhunter.requested.borrow().is_empty());
    }
}
