//! Client layer: validates input, builds requests, and classifies responses.

mod http;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

pub use http::{
    BoxFuture, DEFAULT_TIMEOUT, FORM_CONTENT_TYPE, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, ReqwestTransport,
};

use crate::domain::{
    ApiError, Credentials, Fax, FaxPage, ListOptions, SendOptions, ValidationError,
};
pub use crate::transport::DEFAULT_BASE_URL;
use crate::transport::{self, Endpoint};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`FoxClient`].
///
/// Exactly one variant describes each failed call:
/// - local pre-flight checks ([`FoxError::Validation`]),
/// - Twilio rejecting the request ([`FoxError::Api`]),
/// - the network call itself failing ([`FoxError::Transport`]),
/// - a response body that could not be parsed ([`FoxError::Decode`]).
pub enum FoxError {
    /// A required argument or credential was empty. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Twilio answered with a status other than 200 or 201.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A success or error body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The client could not be configured (for example, an unusable base URL).
    #[error("invalid configuration: {0}")]
    Config(#[source] Box<dyn StdError + Send + Sync>),
}

impl FoxError {
    /// The provider error, when Twilio rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`FoxClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent,
/// default send options or the HTTP transport.
pub struct FoxClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    send_options: SendOptions,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl FoxClientBuilder {
    /// Create a builder with the Twilio base URL, [`DEFAULT_TIMEOUT`] and
    /// [`SendOptions::default`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            send_options: SendOptions::default(),
            transport: None,
        }
    }

    /// Override the scheme and host (and optionally a path prefix) requests go to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to each request by the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Options used by [`FoxClient::send`] when no per-call override is given.
    pub fn send_options(mut self, send_options: SendOptions) -> Self {
        self.send_options = send_options;
        self
    }

    /// Replace the default reqwest transport. `timeout` and `user_agent` are
    /// then the transport's own business.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`FoxClient`].
    pub fn build(self) -> Result<FoxClient, FoxError> {
        let endpoint =
            Endpoint::parse(&self.base_url).map_err(|err| FoxError::Config(Box::new(err)))?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| FoxError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client).with_timeout(self.timeout))
            }
        };

        Ok(FoxClient {
            credentials: self.credentials,
            endpoint,
            send_options: self.send_options,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Twilio fax client.
///
/// Every operation checks its arguments, performs exactly one authenticated
/// HTTP round trip against `https://fax.twilio.com/v1/Faxes` and returns
/// either the decoded payload or a single [`FoxError`]. Nothing is retried.
///
/// The client is immutable after construction and can be shared across tasks.
pub struct FoxClient {
    credentials: Credentials,
    endpoint: Endpoint,
    send_options: SendOptions,
    http: Arc<dyn HttpTransport>,
}

impl FoxClient {
    /// Create a client with the default base URL, timeout and send options.
    ///
    /// For more customization, use [`FoxClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::default(),
            send_options: SendOptions::default(),
            http: Arc::new(ReqwestTransport::default()),
        }
    }

    /// Create a client whose default send options are `send_options`.
    pub fn with_send_options(credentials: Credentials, send_options: SendOptions) -> Self {
        Self {
            send_options,
            ..Self::new(credentials)
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> FoxClientBuilder {
        FoxClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Client-level default used by [`FoxClient::send`].
    pub fn send_options(&self) -> &SendOptions {
        &self.send_options
    }

    /// Send a fax.
    ///
    /// `to` and `from` are expected in E.164 format (or a SIP URI for `to`);
    /// `media_url` must be publicly reachable. `options` overrides the client
    /// default for this call only.
    ///
    /// Errors:
    /// - [`ValidationError::NotAuthenticated`], then
    ///   [`ValidationError::MissingToNumber`], [`ValidationError::MissingFromNumber`]
    ///   and [`ValidationError::MissingMediaUrl`], checked in that order,
    /// - [`FoxError::Api`] when Twilio rejects the request.
    pub async fn send(
        &self,
        to: &str,
        from: &str,
        media_url: &str,
        options: Option<&SendOptions>,
    ) -> Result<Fax, FoxError> {
        self.ensure_authenticated()?;
        if to.is_empty() {
            return Err(ValidationError::MissingToNumber.into());
        }
        if from.is_empty() {
            return Err(ValidationError::MissingFromNumber.into());
        }
        if media_url.is_empty() {
            return Err(ValidationError::MissingMediaUrl.into());
        }

        let options = options.unwrap_or(&self.send_options);
        let params = transport::encode_send_fax_form(to, from, media_url, options);
        let request = HttpRequest::post_form(
            self.endpoint.resource_url(None),
            transport::encode_form_body(&params),
        );

        let body = self.execute(request).await?;
        transport::decode_fax_json_response(&body).map_err(|err| FoxError::Decode(Box::new(err)))
    }

    /// Fetch a single fax by SID.
    pub async fn get(&self, sid: &str) -> Result<Fax, FoxError> {
        self.ensure_authenticated()?;
        ensure_sid(sid)?;

        let request = HttpRequest::get(self.endpoint.resource_url(Some(sid)));

        let body = self.execute(request).await?;
        transport::decode_fax_json_response(&body).map_err(|err| FoxError::Decode(Box::new(err)))
    }

    /// Fetch the first page of faxes matching `options`.
    ///
    /// Following `next_page_url` is left to the caller.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<FaxPage, FoxError> {
        self.ensure_authenticated()?;

        let params = options
            .map(transport::encode_list_faxes_query)
            .unwrap_or_default();
        let request = HttpRequest::get(self.endpoint.collection_url_with_query(&params));

        let body = self.execute(request).await?;
        transport::decode_fax_page_json_response(&body)
            .map_err(|err| FoxError::Decode(Box::new(err)))
    }

    /// Cancel a queued or in-progress fax. Returns the updated snapshot.
    pub async fn cancel(&self, sid: &str) -> Result<Fax, FoxError> {
        self.ensure_authenticated()?;
        ensure_sid(sid)?;

        let params = transport::encode_cancel_fax_form();
        let request = HttpRequest::post_form(
            self.endpoint.resource_url(Some(sid)),
            transport::encode_form_body(&params),
        );

        let body = self.execute(request).await?;
        transport::decode_fax_json_response(&body).map_err(|err| FoxError::Decode(Box::new(err)))
    }

    fn ensure_authenticated(&self) -> Result<(), ValidationError> {
        if self.credentials.is_complete() {
            Ok(())
        } else {
            Err(ValidationError::NotAuthenticated)
        }
    }

    /// Attach credentials, run the request, and return the body of a 200/201
    /// response. Any other status is decoded as an [`ApiError`].
    async fn execute(&self, mut request: HttpRequest) -> Result<String, FoxError> {
        request.basic_auth = Some(self.credentials.clone());
        tracing::debug!(method = %request.method, url = %request.url, "sending fax API request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(FoxError::Transport)?;
        tracing::debug!(status = response.status, "received fax API response");

        if !is_success_status(response.status) {
            let err = transport::decode_api_error_json_response(response.status, &response.body)
                .map_err(|err| FoxError::Decode(Box::new(err)))?;
            tracing::debug!(
                status = err.status,
                code = err.code,
                message = %err.message,
                "fax API returned an error"
            );
            return Err(FoxError::Api(err));
        }

        Ok(response.body)
    }
}

fn ensure_sid(sid: &str) -> Result<(), ValidationError> {
    if sid.is_empty() {
        return Err(ValidationError::MissingSid);
    }
    Ok(())
}

/// Twilio answers 201 for created resources and 200 for everything else that succeeded.
fn is_success_status(status: u16) -> bool {
    matches!(status, 200 | 201)
}
