//! attohttpc session configuration.

use attohttpc::header::CONTENT_TYPE;
use attohttpc::Session;

use super::{join_url, HttpAdapter, JSON_CONTENT_TYPE};
use crate::error::BenchResult;

pub struct AttohttpcAdapter {
    base_url: String,
    session: Session,
}

impl AttohttpcAdapter {
    pub fn new(base_url: &str, tls_verify: bool) -> BenchResult<Self> {
        let mut session = Session::new();
        if !tls_verify {
            session.danger_accept_invalid_certs(true);
        }
        Ok(Self {
            base_url: base_url.to_string(),
            session,
        })
    }
}

impl HttpAdapter for AttohttpcAdapter {
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16> {
        let response = self
            .session
            .post(join_url(&self.base_url, path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .text(body)
            .send()?;
        let status = response.status().as_u16();
        response.bytes()?;
        Ok(status)
    }
}
