//! Common test utilities for benchmark tests
//!
//! Provides a localhost capture server that stands in for the remote
//! endpoint: it records every request it receives and answers 403, the
//! status unauthenticated POSTs to the real rate-limit endpoint get.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct CaptureServer {
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
    base_url: String,
}

impl CaptureServer {
    pub fn start() -> CaptureServer {
        let server =
            Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind capture server"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("capture server has an IP address")
            .port();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let thread_server = Arc::clone(&server);
        let thread_requests = Arc::clone(&requests);
        let handle = std::thread::spawn(move || {
            for mut request in thread_server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let recorded = RecordedRequest {
                    method: request.method().to_string(),
                    path: request.url().to_string(),
                    content_type,
                    body,
                };
                thread_requests.lock().unwrap().push(recorded);

                let response = tiny_http::Response::from_string(r#"{"message":"rate limited"}"#)
                    .with_status_code(tiny_http::StatusCode(403));
                let _ = request.respond(response);
            }
        });

        CaptureServer {
            base_url: format!("http://127.0.0.1:{}", port),
            server,
            requests,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Drop for CaptureServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
