//! HTTP client for polling a `/debug/pprof/goroutine?debug=2` endpoint.

use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::CollectionError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

/// Client fetching goroutine dumps from a running process
pub struct DumpClient {
    client: Client,
    url: String,
}

impl DumpClient {
    /// Create a new client with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self, CollectionError> {
        Self::with_timeout(url, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, CollectionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CollectionError::Client)?;

        Ok(Self::from_client(client, url))
    }

    /// Wrap an already configured `reqwest` client
    pub fn from_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download one dump
    ///
    /// The body is returned as received; decoding is left to the parser so
    /// that a URL and a file with the same bytes behave the same.
    pub fn fetch(&self) -> Result<Vec<u8>, CollectionError> {
        debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectionError::BadStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?.to_vec();
        debug!("Received {} bytes", body.len());

        Ok(body)
    }
}

/// Fetch `iterations` dumps, sleeping `delay` between two requests
///
/// **Public** - used by the analyze command
///
/// Each body goes to `sink` before the next request is made. The first
/// error from either the request or the sink stops collection; nothing is
/// retried.
pub fn collect_dumps<F, E>(
    client: &DumpClient,
    iterations: usize,
    delay: Duration,
    mut sink: F,
) -> Result<(), E>
where
    F: FnMut(Vec<u8>) -> Result<(), E>,
    E: From<CollectionError>,
{
    for i in 0..iterations {
        info!("Collecting report {}/{} ...", i + 1, iterations);

        let body = client.fetch()?;
        sink(body)?;

        if i + 1 < iterations {
            info!("Sleeping {:?} ...", delay);
            thread::sleep(delay);
        }
    }

    Ok(())
}
