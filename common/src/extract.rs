//! Source-specific readers of salary fields.

use crate::{SalaryBounds, VacancyRecord};
use serde_json::Value;

/// Reads the salary range out of a raw vacancy record.
///
/// Missing or malformed fields yield unknown bounds rather than an error.
pub trait SalaryExtractor {
    fn extract(&self, record: &VacancyRecord) -> SalaryBounds;
}

/// HeadHunter nests the range in a `salary` object with its own currency.
#[derive(Debug, Clone)]
pub struct HeadHunterSalary {
    currency: String,
}

impl HeadHunterSalary {
    pub const RUBLE: &'static str = "RUR";

    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Default for HeadHunterSalary {
    fn default() -> Self {
        Self::new(Self::RUBLE)
    }
}

impl SalaryExtractor for HeadHunterSalary {
    fn extract(&self, record: &VacancyRecord) -> SalaryBounds {
        let Some(salary) = record.get("salary").and_then(Value::as_object) else {
            return SalaryBounds::unknown();
        };
        if salary.get("currency").and_then(Value::as_str) != Some(self.currency.as_str()) {
            return SalaryBounds::unknown();
        }

        SalaryBounds::new(
            salary.get("from").and_then(amount),
            salary.get("to").and_then(amount),
        )
    }
}

/// SuperJob reports flat `payment_from`/`payment_to` fields in rubles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperJobSalary;

impl SalaryExtractor for SuperJobSalary {
    fn extract(&self, record: &VacancyRecord) -> SalaryBounds {
        SalaryBounds::new(
            record.get("payment_from").and_then(amount),
            record.get("payment_to").and_then(amount),
        )
    }
}

/// Positive salary figure, or `None` for null, zero, negative and non-numbers.
fn amount(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.round() as i64))?,
        _ => return None,
    };
    (number > 0).then_some(number)
}
