//! Typed Rust client for the Twilio programmable fax API.
//!
//! The crate is split in three layers: a domain layer of strong types, a
//! transport layer for wire-format details (URL shape, form encoding, JSON
//! payloads), and a small client layer that validates input, performs one
//! authenticated HTTP round trip per call and classifies the result.
//!
//! Phone number validation and status-callback handling are out of scope.
//!
//! ```rust,no_run
//! use fox::{Credentials, FoxClient, Quality, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fox::FoxError> {
//!     let client = FoxClient::new(Credentials::new("AC...", "..."));
//!     let options = SendOptions {
//!         quality: Quality::Superfine,
//!         ..Default::default()
//!     };
//!     let fax = client
//!         .send(
//!             "+15558675310",
//!             "+15017122661",
//!             "https://example.com/fax.pdf",
//!             Some(&options),
//!         )
//!         .await?;
//!     println!("{} is {}", fax.sid, fax.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FORM_CONTENT_TYPE, FoxClient, FoxClientBuilder,
    FoxError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};
pub use domain::{
    ApiError, Credentials, Fax, FaxDirection, FaxLinks, FaxPage, FaxStatus, ListOptions, PageMeta,
    Quality, SendOptions, UnknownVariant, ValidationError,
};
