use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use super::error::TransportError;
use super::fax::{FaxJson, push_non_empty};
use crate::domain::{FaxPage, ListOptions, PageMeta};

#[derive(Debug, Clone, Deserialize)]
struct FaxPageJson {
    faxes: Vec<FaxJson>,
    meta: PageMetaJson,
}

#[derive(Debug, Clone, Deserialize)]
struct PageMetaJson {
    first_page_url: String,
    key: String,
    #[serde(default)]
    next_page_url: Option<String>,
    page: u32,
    page_size: u32,
    #[serde(default)]
    previous_page_url: Option<String>,
    url: String,
}

/// RFC 3339 with a `Z` suffix; fractional seconds appear only when non-zero.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn encode_list_faxes_query(options: &ListOptions) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(after) = options.date_created_after.as_ref() {
        params.push((
            ListOptions::DATE_CREATED_AFTER_FIELD.to_owned(),
            format_timestamp(after),
        ));
    }
    if let Some(before) = options.date_created_on_or_before.as_ref() {
        params.push((
            ListOptions::DATE_CREATED_ON_OR_BEFORE_FIELD.to_owned(),
            format_timestamp(before),
        ));
    }
    push_non_empty(&mut params, ListOptions::FROM_FIELD, options.from.as_deref());
    push_non_empty(&mut params, ListOptions::TO_FIELD, options.to.as_deref());

    params
}

pub fn decode_fax_page_json_response(json: &str) -> Result<FaxPage, TransportError> {
    let parsed: FaxPageJson = serde_json::from_str(json)?;

    let faxes = parsed
        .faxes
        .into_iter()
        .map(FaxJson::into_domain)
        .collect::<Result<Vec<_>, TransportError>>()?;

    let meta = parsed.meta;
    Ok(FaxPage {
        faxes,
        meta: PageMeta {
            first_page_url: meta.first_page_url,
            key: meta.key,
            next_page_url: meta.next_page_url,
            page: meta.page,
            page_size: meta.page_size,
            previous_page_url: meta.previous_page_url,
            url: meta.url,
        },
    })
}
