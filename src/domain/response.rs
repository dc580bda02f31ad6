use chrono::{DateTime, Utc};

use crate::domain::value::{FaxDirection, FaxStatus, Quality};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot of a fax resource as returned by Twilio.
///
/// Fields from `duration` onward stay `None` until the fax completes.
pub struct Fax {
    /// 34-character identifier of this fax.
    pub sid: String,
    pub account_sid: String,
    /// API version used to send the fax, always `v1`.
    pub api_version: String,
    pub status: FaxStatus,
    /// Fully-qualified URL of this resource.
    pub url: String,
    pub direction: FaxDirection,
    /// Phone number or SIP URI of the destination.
    pub to: String,
    /// E.164 number or SIP display name the fax was sent from.
    pub from: String,
    pub quality: Quality,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub links: FaxLinks,
    pub media_sid: Option<String>,
    /// Transmission time in seconds.
    pub duration: Option<u32>,
    pub num_pages: Option<u32>,
    /// Price as sent by Twilio, without reformatting.
    pub price: Option<String>,
    /// Currency of `price`, e.g. `USD`.
    pub price_unit: Option<String>,
    pub media_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// URLs of resources nested under a fax.
pub struct FaxLinks {
    pub media: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of a fax listing.
pub struct FaxPage {
    pub faxes: Vec<Fax>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pagination metadata of a [`FaxPage`].
pub struct PageMeta {
    pub first_page_url: String,
    pub key: String,
    pub next_page_url: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub previous_page_url: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Error payload returned by Twilio for any status other than 200 or 201.
#[error("fox: error {status} (Twilio error {code}): {message}")]
pub struct ApiError {
    /// Twilio error code.
    pub code: i64,
    pub message: String,
    /// Link to the Twilio documentation for `code`.
    pub more_info: Option<String>,
    /// HTTP status under which the error was returned.
    pub status: u16,
}
