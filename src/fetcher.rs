use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// Abstraction over the remote resources the generator consumes.
pub trait Fetcher {
    /// Fetches a UTF-8 text resource into memory.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Fetches a binary resource, writing the full response body to `dest`.
    /// Returns the number of bytes written.
    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Fetcher backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // Archive downloads are unbounded; the client default of 30s
        // would cut them off.
        let client = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|source| Error::FetchFailed { url: url.to_string(), source })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?
            .text()
            .map_err(|source| Error::FetchFailed { url: url.to_string(), source })
    }

    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self.get(url)?;
        let mut file = File::create(dest)?;
        response
            .copy_to(&mut file)
            .map_err(|source| Error::FetchFailed { url: url.to_string(), source })
    }
}
