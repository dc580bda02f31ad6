use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::TransportError;
use super::price::TransportPrice;
use crate::domain::{Fax, FaxLinks, FaxStatus, Quality, SendOptions};

pub const TO_FIELD: &str = "To";
pub const FROM_FIELD: &str = "From";
pub const MEDIA_URL_FIELD: &str = "MediaUrl";

#[derive(Debug, Clone, Deserialize)]
pub(super) struct FaxJson {
    sid: String,
    account_sid: String,
    api_version: String,
    status: String,
    url: String,
    direction: String,
    to: String,
    from: String,
    quality: String,
    date_created: DateTime<Utc>,
    date_updated: DateTime<Utc>,
    links: FaxLinksJson,
    #[serde(default)]
    media_sid: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    num_pages: Option<u32>,
    #[serde(default)]
    price: Option<TransportPrice>,
    #[serde(default)]
    price_unit: Option<String>,
    #[serde(default)]
    media_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct FaxLinksJson {
    media: String,
}

impl FaxJson {
    pub(super) fn into_domain(self) -> Result<Fax, TransportError> {
        Ok(Fax {
            sid: self.sid,
            account_sid: self.account_sid,
            api_version: self.api_version,
            status: self.status.parse()?,
            url: self.url,
            direction: self.direction.parse()?,
            to: self.to,
            from: self.from,
            quality: self.quality.parse()?,
            date_created: self.date_created,
            date_updated: self.date_updated,
            links: FaxLinks {
                media: self.links.media,
            },
            media_sid: self.media_sid,
            duration: self.duration,
            num_pages: self.num_pages,
            price: self.price.map(TransportPrice::into_string),
            price_unit: self.price_unit,
            media_url: self.media_url,
        })
    }
}

pub fn encode_send_fax_form(
    to: &str,
    from: &str,
    media_url: &str,
    options: &SendOptions,
) -> Vec<(String, String)> {
    let mut params = vec![
        (TO_FIELD.to_owned(), to.to_owned()),
        (FROM_FIELD.to_owned(), from.to_owned()),
        (MEDIA_URL_FIELD.to_owned(), media_url.to_owned()),
    ];
    push_send_options(&mut params, options);
    params
}

/// Append the send options. `Quality` and `StoreMedia` are always present.
pub fn push_send_options(params: &mut Vec<(String, String)>, options: &SendOptions) {
    params.push((
        Quality::FIELD.to_owned(),
        options.quality.as_str().to_owned(),
    ));

    push_non_empty(
        params,
        SendOptions::SIP_AUTH_PASSWORD_FIELD,
        options.sip_auth_password.as_deref(),
    );
    push_non_empty(
        params,
        SendOptions::SIP_AUTH_USERNAME_FIELD,
        options.sip_auth_username.as_deref(),
    );
    push_non_empty(
        params,
        SendOptions::STATUS_CALLBACK_FIELD,
        options.status_callback.as_deref(),
    );

    params.push((
        SendOptions::STORE_MEDIA_FIELD.to_owned(),
        options.store_media.to_string(),
    ));

    if let Some(ttl) = options.ttl_minutes.filter(|minutes| *minutes > 0) {
        params.push((SendOptions::TTL_FIELD.to_owned(), ttl.to_string()));
    }
}

pub(super) fn push_non_empty(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        params.push((key.to_owned(), value.to_owned()));
    }
}

pub fn encode_cancel_fax_form() -> Vec<(String, String)> {
    vec![(
        FaxStatus::FIELD.to_owned(),
        FaxStatus::Canceled.as_str().to_owned(),
    )]
}

pub fn decode_fax_json_response(json: &str) -> Result<Fax, TransportError> {
    let parsed: FaxJson = serde_json::from_str(json)?;
    parsed.into_domain()
}
