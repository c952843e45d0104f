//! Country directory client (restcountries.com) with built-in fallback.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::country::Country;
use crate::error::{Error, Result};
use crate::fallback::fallback_countries;

/// Whole-request limit; a stalled directory counts as a failed fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const RESTCOUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,idd,cca2";

#[derive(Debug, Deserialize)]
pub struct DirectoryName {
    pub common: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryIdd {
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// One entry of the directory's JSON response.
#[derive(Debug, Deserialize)]
pub struct DirectoryCountry {
    pub name: DirectoryName,
    #[serde(default)]
    pub flags: DirectoryFlags,
    #[serde(default)]
    pub idd: DirectoryIdd,
    pub cca2: String,
}

/// Keep entries that have a dialing code and map them to catalog records.
///
/// The dialing code is the IDD root followed by its first suffix, so
/// countries sharing a root (e.g. "+1") collapse to the root plus one suffix.
pub fn countries_from_directory(entries: Vec<DirectoryCountry>) -> Vec<Country> {
    let mut countries: Vec<Country> = entries
        .into_iter()
        .filter_map(|entry| {
            let root = entry.idd.root.filter(|r| !r.is_empty())?;
            let suffix = entry.idd.suffixes.into_iter().next()?;
            let phone_code = format!("{root}{suffix}");
            Some(
                Country::new(&entry.name.common, &entry.cca2, &phone_code)
                    .with_flag_images(entry.flags.svg, entry.flags.png),
            )
        })
        .collect();
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}

#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    url: String,
}

impl DirectoryClient {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub async fn fetch(&self) -> Result<Vec<Country>> {
        debug!(url = %self.url, "Fetching country directory");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(Error::DirectoryStatus {
                status: response.status().as_u16(),
            });
        }

        let entries: Vec<DirectoryCountry> = response.json().await?;
        Ok(countries_from_directory(entries))
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    Builtin,
}

impl CatalogSource {
    pub fn display_name(&self) -> &str {
        match self {
            CatalogSource::Remote(url) => url,
            CatalogSource::Builtin => "built-in list",
        }
    }
}

/// Load the catalog, substituting the built-in list on any fetch failure.
pub async fn load_catalog(source: &CatalogSource) -> Catalog {
    match source {
        CatalogSource::Builtin => Catalog::builtin(),
        CatalogSource::Remote(url) => match DirectoryClient::new(url) {
            Ok(client) => load_from_directory(&client).await,
            Err(e) => {
                warn!(error = %e, "Could not build directory client, using built-in list");
                Catalog::builtin()
            }
        },
    }
}

/// Fetch through `client`, falling back to the built-in list on errors,
/// timeouts, or an empty response.
pub async fn load_from_directory(client: &DirectoryClient) -> Catalog {
    let countries = match client.fetch().await {
        Ok(countries) if !countries.is_empty() => {
            info!(count = countries.len(), "Loaded countries from directory");
            countries
        }
        Ok(_) => {
            warn!("Country directory returned no usable entries, using built-in list");
            fallback_countries()
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch countries, using built-in list");
            fallback_countries()
        }
    };
    Catalog::new(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": {"common": "Brazil", "official": "Federative Republic of Brazil"},
            "flags": {"png": "https://flagcdn.com/w320/br.png", "svg": "https://flagcdn.com/br.svg"},
            "idd": {"root": "+5", "suffixes": ["5"]},
            "cca2": "BR"
        },
        {
            "name": {"common": "Antarctica"},
            "flags": {"png": "https://flagcdn.com/w320/aq.png", "svg": "https://flagcdn.com/aq.svg"},
            "idd": {},
            "cca2": "AQ"
        },
        {
            "name": {"common": "Argentina"},
            "idd": {"root": "+5", "suffixes": ["4"]},
            "cca2": "AR"
        },
        {
            "name": {"common": "United States"},
            "idd": {"root": "+1", "suffixes": ["201", "202"]},
            "cca2": "US"
        }
    ]"#;

    fn sample() -> Vec<Country> {
        let entries: Vec<DirectoryCountry> = serde_json::from_str(SAMPLE).unwrap();
        countries_from_directory(entries)
    }

    #[test]
    fn test_entries_without_idd_are_dropped() {
        assert!(sample().iter().all(|c| c.code != "AQ"));
    }

    #[test]
    fn test_sorted_by_name() {
        let names: Vec<String> = sample().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Argentina", "Brazil", "United States"]);
    }

    #[test]
    fn test_phone_code_joins_root_and_first_suffix() {
        let countries = sample();
        let brazil = countries.iter().find(|c| c.code == "BR").unwrap();
        assert_eq!(brazil.phone_code, "+55");
        let us = countries.iter().find(|c| c.code == "US").unwrap();
        assert_eq!(us.phone_code, "+1201");
    }

    #[test]
    fn test_flags_are_carried_over() {
        let countries = sample();
        let brazil = countries.iter().find(|c| c.code == "BR").unwrap();
        assert_eq!(brazil.flag, "🇧🇷");
        assert_eq!(brazil.flag_svg.as_deref(), Some("https://flagcdn.com/br.svg"));
        let argentina = countries.iter().find(|c| c.code == "AR").unwrap();
        assert!(argentina.flag_png.is_none());
    }

    #[tokio::test]
    async fn test_builtin_source_skips_network() {
        let catalog = load_catalog(&CatalogSource::Builtin).await;
        assert_eq!(catalog.default_country().unwrap().code, "BR");
    }

    #[tokio::test]
    async fn test_unreachable_directory_falls_back() {
        let source = CatalogSource::Remote("http://127.0.0.1:9/countries".to_string());
        let catalog = load_catalog(&source).await;
        assert_eq!(catalog, Catalog::builtin());
    }

    #[tokio::test]
    async fn test_stalled_directory_times_out_and_falls_back() {
        use tokio::net::TcpListener;

        // Accept connections and hold them open without ever replying
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client =
            DirectoryClient::with_timeout(&format!("http://{addr}/all"), Duration::from_millis(300))
                .unwrap();
        assert!(client.fetch().await.is_err());

        let catalog = tokio::time::timeout(Duration::from_secs(5), load_from_directory(&client))
            .await
            .expect("stalled directory should time out");
        assert_eq!(catalog, Catalog::builtin());
    }
}
