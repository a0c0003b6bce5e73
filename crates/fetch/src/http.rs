//! HTTP fetcher backed by a blocking `reqwest` client.

use exn::ResultExt;
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Fetcher, Method, Request};

/// Fetches pages over HTTP(S).
///
/// The client keeps connections alive between requests, so one instance
/// should be reused for a whole run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}
impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }

    fn build(&self, request: &Request) -> RequestBuilder {
        match request.method {
            Method::Get => self.client.get(&request.url).query(&request.params),
            Method::Post => self.client.post(&request.url).form(&request.params),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, request), fields(request = %request, status))]
    fn fetch(&self, request: &Request) -> Result<Vec<u8>> {
        let response = self.build(request).send().or_raise(|| ErrorKind::Network(request.url.clone()))?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());
        if !status.is_success() {
            exn::bail!(ErrorKind::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().or_raise(|| ErrorKind::Network(request.url.clone()))?;
        tracing::debug!(bytes = body.len(), "Fetched page");
        Ok(body.to_vec())
    }
}
