use std::time::Duration;

pub const API_BASE: &str = "https://disease.sh/v3/covid-19";

/// Environment variable that overrides [`API_BASE`] in [`api_base_from_env`].
pub const API_BASE_ENV: &str = "COVMAP_API_BASE";

pub const DEFAULT_HISTORY_DAYS: u32 = 120;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Map center used for the worldwide selection.
pub const WORLD_CENTER: (f64, f64) = (34.80746, -40.4796);
pub const WORLD_ZOOM: u8 = 2;
pub const REGION_ZOOM: u8 = 4;

/// Sentinel value of the region selector for the whole-world aggregate.
pub const WORLDWIDE: &str = "worldwide";

pub fn api_base_from_env() -> String {
    match std::env::var(API_BASE_ENV) {
        Ok(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
        _ => API_BASE.to_string(),
    }
}

pub fn all_path() -> &'static str {
    "all"
}

pub fn countries_path() -> &'static str {
    "countries"
}

pub fn country_path(code: &str) -> String {
    format!("countries/{}", code)
}

pub fn historical_all_path(days: u32) -> String {
    format!("historical/all?lastdays={}", days)
}

pub fn historical_path(code: &str, days: u32) -> String {
    format!("historical/{}?lastdays={}", code, days)
}
