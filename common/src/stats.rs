//! Per-keyword salary statistics.

use crate::extract::SalaryExtractor;
use crate::salary::estimate;
use crate::{KeywordStatistics, VacancyRecord};

/// Summarizes `records` using `extractor` to read each vacancy's salary range.
///
/// Vacancies without a usable estimate count as found but not processed. The
/// average is truncated toward zero and is `0` when nothing was processed.
/// Salaries are summed in `i128`, so the total never overflows.
pub fn aggregate(
    records: &[VacancyRecord],
    extractor: &dyn SalaryExtractor,
) -> KeywordStatistics {
    let salaries: Vec<i64> = records
        .iter()
        .filter_map(|record| estimate(extractor.extract(record)))
        .filter(|salary| *salary != 0)
        .collect();

    let vacancies_processed = salaries.len();
    let average_salary = if vacancies_processed == 0 {
        0
    } else {
        let total: i128 = salaries.iter().map(|salary| i128::from(*salary)).sum();
        let average = total / vacancies_processed as i128;
        i64::try_from(average).unwrap_or(i64::MAX)
    };

    KeywordStatistics {
        vacancies_found: records.len(),
        vacancies_processed,
        average_salary,
    }
}
