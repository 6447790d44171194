//! SuperJob (superjob.ru) vacancy search.

use super::{get_json, paginate, FetchError, Page, VacancySource, PAGE_SIZE};
use crate::config::SuperJobConfig;
use common::{SalaryExtractor, SuperJobSalary, VacancyRecord};
use reqwest::blocking::Client;
use serde::Deserialize;

const TOWN: &str = "Москва";
/// "Development, programming" in the SuperJob catalogue.
const CATALOGUE_PROGRAMMING: u32 = 48;

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    objects: Vec<VacancyRecord>,
    #[serde(default)]
    total: u64,
}

pub struct SuperJob {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SuperJob {
    pub fn new(client: Client, config: &SuperJobConfig) -> Self {
        Self {
            client,
            endpoint: format!("{}/2.0/vacancies/", config.base_url),
            api_key: config.api_key.clone(),
        }
    }

    fn fetch_page(&self, keyword: &str, page: u64) -> Result<Page, FetchError> {
        let request = self
            .client
            .get(&self.endpoint)
            .header("X-Api-App-Id", self.api_key.as_str())
            .query(&[("town", TOWN), ("keyword", keyword)])
            .query(&[("catalogues", CATALOGUE_PROGRAMMING), ("count", PAGE_SIZE)])
            .query(&[("page", page)]);

        let SearchPage { objects, total } = get_json(request)?;
        Ok(Page {
            records: objects,
            pages: total.div_ceil(u64::from(PAGE_SIZE)),
        })
    }
}

impl VacancySource for SuperJob {
    fn title(&self) -> &str {
        "SuperJob Moscow"
    }

    fn fetch(&self, keyword: &str) -> Result<Vec<VacancyRecord>, FetchError> {
        paginate("superjob", keyword, |page| self.fetch_page(keyword, page))
    }

    fn extractor(&self) -> &dyn SalaryExtractor {
        &SuperJobSalary
    }
}
