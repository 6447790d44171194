//! Job-board search APIs.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

use common::{SalaryExtractor, VacancyRecord};
use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Vacancies requested per page from either board.
pub const PAGE_SIZE: u32 = 100;

/// A job board that can be searched by keyword.
pub trait VacancySource {
    /// Heading used for this source's result table.
    fn title(&self) -> &str;

    /// Every vacancy matching `keyword`, across all result pages.
    fn fetch(&self, keyword: &str) -> Result<Vec<VacancyRecord>, FetchError>;

    /// Reader for the salary fields of this source's records.
    fn extractor(&self) -> &dyn SalaryExtractor;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
}

/// One decoded result page: its records and the total page count reported
/// alongside them.
pub(crate) struct Page {
    pub(crate) records: Vec<VacancyRecord>,
    pub(crate) pages: u64,
}

/// Requests pages from 0 upward until the reported page count is reached.
/// The first page is always requested.
pub(crate) fn paginate<F>(
    source: &str,
    keyword: &str,
    mut fetch_page: F,
) -> Result<Vec<VacancyRecord>, FetchError>
where
    F: FnMut(u64) -> Result<Page, FetchError>,
{
    let mut vacancies = Vec::new();
    let mut page = 0;
    loop {
        let Page { records, pages } = fetch_page(page)?;
        debug!(
            source,
            keyword,
            page,
            pages,
            records = records.len(),
            "fetched vacancy page"
        );
        vacancies.extend(records);
        page += 1;
        if page >= pages {
            break;
        }
    }
    Ok(vacancies)
}

/// Sends `request` and decodes a successful JSON body.
pub(crate) fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: response.url().to_string(),
            status,
        });
    }
    Ok(response.json()?)
}
