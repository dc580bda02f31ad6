//! The HTTP seam between [`FoxClient`](super::FoxClient) and the network.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::Credentials;

/// Timeout applied by the default transport to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `Content-Type` sent with every form body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; param=value";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully-built request, ready to be executed by an [`HttpTransport`].
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
    /// Sent as HTTP Basic auth (account SID as username, auth token as password).
    pub basic_auth: Option<Credentials>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            content_type: None,
            body: None,
            basic_auth: None,
        }
    }

    /// `POST` with an already url-encoded form body.
    pub fn post_form(url: Url, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            content_type: Some(FORM_CONTENT_TYPE),
            body: Some(body),
            basic_auth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP round trip.
///
/// Implementations return `Err` only for network-level failures; every HTTP
/// status, including 4xx and 5xx, comes back as an [`HttpResponse`].
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
/// Default [`HttpTransport`] backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Wrap an existing client. No per-request timeout is added.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Apply `timeout` to every request, on top of the client's own settings.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new()).with_timeout(DEFAULT_TIMEOUT)
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self.client.post(request.url),
            };
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(credentials) = request.basic_auth.as_ref() {
                builder =
                    builder.basic_auth(credentials.account_sid(), Some(credentials.auth_token()));
            }
            if let Some(content_type) = request.content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}
