use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("reqwest transport error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("curl transport error: {0}")]
    Curl(#[from] curl::Error),

    #[error("ureq transport error: {0}")]
    Ureq(Box<ureq::Error>),

    #[error("isahc transport error: {0}")]
    Isahc(#[from] isahc::Error),

    #[error("attohttpc transport error: {0}")]
    Attohttpc(#[from] attohttpc::Error),

    #[error("TLS setup error: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] isahc::http::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// ureq::Error is large; it stays boxed, which rules out #[from].
impl From<ureq::Error> for BenchError {
    fn from(err: ureq::Error) -> Self {
        BenchError::Ureq(Box::new(err))
    }
}

pub type BenchResult<T> = Result<T, BenchError>;
