use std::env;
use std::time::Duration;

/// Languages searched when `VACANCY_KEYWORDS` is not set.
pub const DEFAULT_KEYWORDS: [&str; 13] = [
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "Shell",
    "Go",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];

const DEFAULT_HEADHUNTER_URL: &str = "https://api.hh.ru";
const DEFAULT_SUPERJOB_URL: &str = "https://api.superjob.ru";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Top-level configuration for one collection run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keywords: Vec<String>,
    pub http: HttpConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads the process environment. A `.env` file is applied by `main`
    /// beforehand, not here.
    pub fn load() -> Result<Self, ConfigError> {
        let api_key = env::var("SUPERJOB_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar("SUPERJOB_API_KEY"))?;

        let keywords = match env::var("VACANCY_KEYWORDS") {
            Ok(raw) => parse_keywords(&raw)?,
            Err(_) => DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        };

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent =
            env::var("HTTP_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            keywords,
            http: HttpConfig {
                timeout: Duration::from_secs(timeout_secs),
                user_agent,
            },
            headhunter: HeadHunterConfig {
                base_url: base_url("HEADHUNTER_BASE_URL", DEFAULT_HEADHUNTER_URL),
            },
            superjob: SuperJobConfig {
                base_url: base_url("SUPERJOB_BASE_URL", DEFAULT_SUPERJOB_URL),
                api_key,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings shared by every outgoing request.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn client(&self) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
    #[error("VACANCY_KEYWORDS must name at least one keyword")]
    EmptyKeywords,
}

/// Splits a comma-separated keyword list, dropping blanks and repeats.
fn parse_keywords(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|existing| existing == keyword) {
            keywords.push(keyword.to_string());
        }
    }

    if keywords.is_empty() {
        return Err(ConfigError::EmptyKeywords);
    }
    Ok(keywords)
}

fn base_url(var: &str, default: &str) -> String {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
