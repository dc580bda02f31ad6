use chrono::{DateTime, Utc};

use crate::domain::value::Quality;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Options applied when sending a fax.
///
/// [`SendOptions::default`] mirrors Twilio's own defaults: [`Quality::Fine`]
/// with media storage enabled.
pub struct SendOptions {
    pub quality: Quality,
    /// Password for authentication when sending to a SIP address.
    pub sip_auth_password: Option<String>,
    /// Username for authentication when sending to a SIP address.
    pub sip_auth_username: Option<String>,
    /// URL receiving a request whenever the fax status changes.
    pub status_callback: Option<String>,
    /// Whether Twilio keeps a copy of the sent media for later retrieval.
    pub store_media: bool,
    /// Minutes after initiation during which Twilio keeps trying to deliver.
    ///
    /// `None` and `Some(0)` are both omitted from the request.
    pub ttl_minutes: Option<u32>,
}

impl SendOptions {
    pub const SIP_AUTH_PASSWORD_FIELD: &'static str = "SipAuthPassword";
    pub const SIP_AUTH_USERNAME_FIELD: &'static str = "SipAuthUsername";
    pub const STATUS_CALLBACK_FIELD: &'static str = "StatusCallback";
    pub const STORE_MEDIA_FIELD: &'static str = "StoreMedia";
    pub const TTL_FIELD: &'static str = "Ttl";
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            sip_auth_password: None,
            sip_auth_username: None,
            status_callback: None,
            store_media: true,
            ttl_minutes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters applied when listing faxes. An empty value filters nothing.
pub struct ListOptions {
    /// Only faxes created strictly after this instant.
    pub date_created_after: Option<DateTime<Utc>>,
    /// Only faxes created on or before this instant.
    pub date_created_on_or_before: Option<DateTime<Utc>>,
    /// Only faxes sent from this number (E.164).
    pub from: Option<String>,
    /// Only faxes sent to this number (E.164).
    pub to: Option<String>,
}

impl ListOptions {
    pub const DATE_CREATED_AFTER_FIELD: &'static str = "DateCreatedAfter";
    pub const DATE_CREATED_ON_OR_BEFORE_FIELD: &'static str = "DateCreatedOnOrBefore";
    pub const FROM_FIELD: &'static str = "From";
    pub const TO_FIELD: &'static str = "To";
}
