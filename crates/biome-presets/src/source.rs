//! Remote preset sources.

use crate::convert::{BrushDocument, parse_document};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// GitHub contents listing of the published biome brushes.
pub const DEFAULT_SOURCE_URL: &str =
    "https://api.github.com/repos/nowaytofindavailableone/redkit3biometool/contents/biomebrushes";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One item of a contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RemoteEntry {
    /// A plain file with a `.json` extension.
    pub fn is_brush(&self) -> bool {
        self.kind == "file" && Path::new(&self.name).extension().is_some_and(|ext| ext == "json")
    }

    /// Local preset name: the file name without `.json`.
    pub fn preset_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Where brush documents come from.
pub trait PresetSource {
    /// List everything the source publishes.
    fn list(&self) -> Result<Vec<RemoteEntry>>;

    /// Download and decode one brush document.
    fn fetch(&self, entry: &RemoteEntry) -> Result<BrushDocument>;
}

/// Parse a contents listing.
pub fn parse_listing(text: &str, origin: &str) -> Result<Vec<RemoteEntry>> {
    serde_json::from_str(text).map_err(|source| Error::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// [`PresetSource`] backed by the GitHub contents API.
pub struct GithubSource {
    listing_url: String,
    client: reqwest::blocking::Client,
}

impl GithubSource {
    pub fn new(listing_url: impl Into<String>) -> Result<Self> {
        let listing_url = listing_url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("biome-manager/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Network {
                url: listing_url.clone(),
                source,
            })?;

        Ok(Self {
            listing_url,
            client,
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    fn get_text(&self, url: &str) -> Result<String> {
        let network = |source| Error::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(network)?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().map_err(network)
    }
}

impl PresetSource for GithubSource {
    fn list(&self) -> Result<Vec<RemoteEntry>> {
        let text = self.get_text(&self.listing_url)?;
        let entries = parse_listing(&text, &self.listing_url)?;
        tracing::debug!("{} entries listed at {}", entries.len(), self.listing_url);
        Ok(entries)
    }

    fn fetch(&self, entry: &RemoteEntry) -> Result<BrushDocument> {
        let url = entry
            .download_url
            .as_deref()
            .ok_or_else(|| Error::MissingDownloadUrl {
                name: entry.name.clone(),
            })?;
        let text = self.get_text(url)?;
        parse_document(&text, url)
    }
}
