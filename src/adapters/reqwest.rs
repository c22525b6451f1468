//! The two reqwest-backed configurations: fresh connections per request,
//! and the keep-alive variant with a bounded idle pool.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use super::{join_url, HttpAdapter, JSON_CONTENT_TYPE};
use crate::error::BenchResult;

/// Blocking client with the idle pool disabled, so every request pays for
/// a new connection (and TLS handshake when the scheme is https).
pub struct ReqwestAdapter {
    base_url: String,
    client: Client,
}

impl ReqwestAdapter {
    pub fn new(base_url: &str, tls_verify: bool) -> BenchResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!tls_verify)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }
}

impl HttpAdapter for ReqwestAdapter {
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16> {
        let response = self
            .client
            .post(join_url(&self.base_url, path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_string())
            .send()?;
        let status = response.status().as_u16();
        response.bytes()?;
        Ok(status)
    }
}

/// Blocking client that keeps up to `pool_size` idle connections per host,
/// so after the first request the loop mostly reuses one socket.
pub struct PooledReqwestAdapter {
    base_url: String,
    client: Client,
}

impl PooledReqwestAdapter {
    pub fn new(base_url: &str, tls_verify: bool, pool_size: usize) -> BenchResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!tls_verify)
            .pool_max_idle_per_host(pool_size)
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }
}

impl HttpAdapter for PooledReqwestAdapter {
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16> {
        let response = self
            .client
            .post(join_url(&self.base_url, path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_string())
            .send()?;
        let status = response.status().as_u16();
        response.bytes()?;
        Ok(status)
    }
}
