//! # HTTP Transport
//!
//! Request descriptor the invoker hands to an [`HttpTransport`], and the
//! `reqwest` implementation used in production. The transport reports the
//! HTTP status and raw body without judging them; interpreting the response
//! envelope is the invoker's job.

use crate::error::{BiosTaskError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use std::time::Duration;
use tracing::debug;

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub protocol: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// When false, self-signed and otherwise invalid certificates are accepted
    pub verify_tls: bool,
    pub receive_timeout: Duration,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        match self.port {
            Some(port) => format!("{}://{}:{}{}", self.protocol, self.host, port, path),
            None => format!("{}://{}{}", self.protocol, self.host, path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Protocol, host and port taken from a gateway URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub protocol: String,
    pub host: String,
    pub port: Option<u16>,
}

impl ServiceEndpoint {
    pub fn parse(gateway: &str) -> Result<Self> {
        let url = Url::parse(gateway.trim()).map_err(|e| {
            BiosTaskError::configuration_missing(format!("Invalid gateway URL '{gateway}': {e}"))
        })?;

        let host = url.host_str().ok_or_else(|| {
            BiosTaskError::configuration_missing(format!("Gateway URL '{gateway}' has no host"))
        })?;

        Ok(Self {
            protocol: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
        })
    }
}

/// Sends a single HTTP request.
///
/// Any failure to obtain a response (connect, TLS, timeout, body read) is a
/// `TransportError`; a response with any HTTP status is `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> Result<HttpResponse>;
}

/// `HttpTransport` over `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    verifying: Client,
    permissive: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let build = |accept_invalid_certs: bool| {
            Client::builder()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .user_agent(format!("bios-config-task/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| {
                    BiosTaskError::TransportError(format!("Failed to create HTTP client: {e}"))
                })
        };

        Ok(Self {
            verifying: build(false)?,
            permissive: build(true)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<HttpResponse> {
        let url = request.url();
        let client = if request.verify_tls {
            &self.verifying
        } else {
            &self.permissive
        };

        debug!(
            url = %url,
            method = %request.method,
            verify_tls = request.verify_tls,
            timeout_ms = request.receive_timeout.as_millis() as u64,
            "Sending request"
        );

        let mut builder = client
            .request(request.method.clone(), &url)
            .timeout(request.receive_timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            BiosTaskError::TransportError(format!("Network error talking to {url}: {e}"))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            BiosTaskError::TransportError(format!("Failed to read response from {url}: {e}"))
        })?;

        debug!(url = %url, status = status, "Received response");

        Ok(HttpResponse { status, body })
    }
}
