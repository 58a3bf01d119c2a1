//! HTTP transport shared by the clients.

/// Errors surfaced by the transport layer.
#[derive(Debug)]
pub enum TransportError {
    Http(String),
    Deserialization(String),
}

/// Minimal POST transport against one base URL.
pub struct HttpTransport {
    pub base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}
