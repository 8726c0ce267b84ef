// API client module: a small blocking HTTP client for the i18n address
// metadata service. It answers one question, "what does an address look
// like in country XX?", and is the production `CountryFormatSource`.

use crate::address::{CountryFormat, CountryFormatSource};
use crate::error::{CoaError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_ADDRESS_DATA_URL: &str = "https://chromium-i18n.appspot.com/ssl-address/data";

/// Holds a reqwest blocking client and the base URL of the metadata
/// service. Country data lives at `<base_url>/<COUNTRY>`.
#[derive(Clone)]
pub struct AddressDataClient {
    client: Client,
    base_url: String,
}

impl AddressDataClient {
    /// Create a client configured from the environment variable
    /// `ADDRESS_DATA_URL` or fall back to the public service.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ADDRESS_DATA_URL")
            .unwrap_or_else(|_| DEFAULT_ADDRESS_DATA_URL.into());
        Self::new(&base_url)
    }

    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CoaError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(AddressDataClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn country_url(&self, country: &str) -> String {
        format!("{}/{}", self.base_url, country)
    }

    fn fetch(&self, country: &str) -> Result<CountryFormat> {
        let url = self.country_url(country);
        log::debug!("fetching address format from {url}");

        let res = self.client.get(&url).send()?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_default();
            return Err(CoaError::AddressService(format!(
                "lookup of {country} failed: {status} - {txt}"
            )));
        }
        let body = res.text()?;
        parse_country_format(&body)
    }
}

impl CountryFormatSource for AddressDataClient {
    fn country_format(&self, country: &str) -> Result<CountryFormat> {
        // the lookup is the only slow step of a run; show that we are waiting
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Validating address for {country}..."));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.fetch(country);
        spinner.finish_and_clear();
        result
    }
}

/// Decodes a service response. Unknown countries come back as `{}`,
/// which decodes to a format without a `key`.
pub fn parse_country_format(body: &str) -> Result<CountryFormat> {
    serde_json::from_str(body)
        .map_err(|e| CoaError::AddressService(format!("unreadable address data: {e}")))
}
