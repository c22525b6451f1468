//! Uniform interface over the HTTP client crates under benchmark.
//!
//! Each adapter wraps exactly one client crate, pre-configured with a base
//! URL and the TLS-verification toggle. Constructors never perform network
//! I/O; the first connection is opened by the first [`HttpAdapter::post`].

mod attohttpc;
mod curl;
mod isahc;
mod reqwest;
mod ureq;

pub use self::attohttpc::AttohttpcAdapter;
pub use self::curl::CurlAdapter;
pub use self::isahc::IsahcAdapter;
pub use self::reqwest::{PooledReqwestAdapter, ReqwestAdapter};
pub use self::ureq::UreqAdapter;

use crate::error::BenchResult;

/// `Content-Type` value every benchmark request carries.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A synchronous HTTP client reduced to the one operation the benchmark
/// loop needs.
pub trait HttpAdapter {
    /// Issue one blocking POST of `body` to `path` under the configured
    /// base URL and return the HTTP status the server answered with.
    ///
    /// A served response of any status, 2xx or not, is a success here;
    /// only transport-level failures (DNS, TLS handshake, refused or
    /// dropped connections) come back as errors.
    ///
    /// The response body is read to completion and discarded before this
    /// returns; a keep-alive connection is only reusable once its body
    /// has been consumed.
    fn post(&mut self, path: &str, body: &str) -> BenchResult<u16>;
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
