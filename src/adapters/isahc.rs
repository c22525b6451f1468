//! isahc client configuration, driven through its blocking send path.

use isahc::config::{Configurable, SslOption};
use isahc::{HttpClient, ReadResponseExt, Request};

use super::{join_url, HttpAdapter, JSON_CONTENT_TYPE};
use crate::error::BenchResult;

pub struct IsahcAdapter {
    base_url: String,
    client: HttpClient,
}

impl IsahcAdapter {
    pub fn new(base_url: &str, tls_verify: bool) -> BenchResult<Self> {
        let mut builder = HttpClient::builder();
        if !tls_verify {
            builder = builder.ssl_options(
                SslOption::DANGER_ACCEPT_INVALID_CERTS | SslOption::DANGER_ACCEPT_INVALID_HOSTS,
            );
        }
        Ok(Self {
            base_url: base_url.to_string(),
            client: builder.build()?,
        })
    }
}

impl HttpAdapter for IsahcAdapter {
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16> {
        let request = Request::post(join_url(&self.base_url, path))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body.to_string())?;
        let mut response = self.client.send(request)?;
        let status = response.status().as_u16();
        response.consume()?;
        Ok(status)
    }
}
