//! libcurl easy-handle configuration. The handle is reused across the
//! whole loop, which gives libcurl's connection cache a chance to keep the
//! socket open between requests.

use curl::easy::{Easy, List};

use super::{join_url, HttpAdapter, JSON_CONTENT_TYPE};
use crate::error::BenchResult;

pub struct CurlAdapter {
    base_url: String,
    easy: Easy,
}

impl CurlAdapter {
    pub fn new(base_url: &str, tls_verify: bool) -> BenchResult<Self> {
        let mut easy = Easy::new();
        // Swallow response bodies; libcurl writes them to stdout otherwise.
        easy.write_function(|data| Ok(data.len()))?;
        if !tls_verify {
            easy.ssl_verify_peer(false)?;
            easy.ssl_verify_host(false)?;
        }
        Ok(Self {
            base_url: base_url.to_string(),
            easy,
        })
    }
}

impl HttpAdapter for CurlAdapter {
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16> {
        self.easy.url(&join_url(&self.base_url, path))?;
        self.easy.post(true)?;

        let mut headers = List::new();
        headers.append(&format!("Content-Type: {}", JSON_CONTENT_TYPE))?;
        self.easy.http_headers(headers)?;

        self.easy.post_fields_copy(body.as_bytes())?;
        self.easy.perform()?;
        Ok(self.easy.response_code()? as u16)
    }
}
