//! HeadHunter (hh.ru) vacancy search.

use super::{get_json, paginate, FetchError, Page, VacancySource, PAGE_SIZE};
use crate::config::HeadHunterConfig;
use common::{HeadHunterSalary, SalaryExtractor, VacancyRecord};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Moscow in the hh.ru area dictionary.
const AREA_MOSCOW: u32 = 1;

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<VacancyRecord>,
    #[serde(default)]
    pages: u64,
}

pub struct HeadHunter {
    client: Client,
    endpoint: String,
    salary: HeadHunterSalary,
}

impl HeadHunter {
    pub fn new(client: Client, config: &HeadHunterConfig) -> Self {
        Self {
            client,
            endpoint: format!("{}/vacancies", config.base_url),
            salary: HeadHunterSalary::default(),
        }
    }

    fn fetch_page(&self, keyword: &str, page: u64) -> Result<Page, FetchError> {
        let text = format!("NAME:Программист AND {keyword}");
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("text", text)])
            .query(&[("area", AREA_MOSCOW), ("per_page", PAGE_SIZE)])
            .query(&[("page", page)]);

        let SearchPage { items, pages } = get_json(request)?;
        Ok(Page {
            records: items,
            pages,
        })
    }
}

impl VacancySource for HeadHunter {
    fn title(&self) -> &str {
        "HeadHunter Moscow"
    }

    fn fetch(&self, keyword: &str) -> Result<Vec<VacancyRecord>, FetchError> {
        paginate("headhunter", keyword, |page| self.fetch_page(keyword, page))
    }

    fn extractor(&self) -> &dyn SalaryExtractor {
        &self.salary
    }
}
