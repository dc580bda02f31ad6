use url::Url;

/// Scheme and host of the Twilio fax API.
pub const DEFAULT_BASE_URL: &str = "https://fax.twilio.com";

/// API version this crate is pinned to.
pub const API_VERSION: &str = "v1";
/// Collection resource for faxes.
pub const FAXES_RESOURCE: &str = "Faxes";

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid base URL {url:?}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base URL {url:?} cannot carry path segments")]
    NotABase { url: String },
}

/// Composes `{base}/{version}/{resource}[/{sid}]` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(base).map_err(|source| EndpointError::Parse {
            url: base.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(EndpointError::NotABase {
                url: base.to_owned(),
            });
        }
        Ok(Self { base: url })
    }

    /// Resource URL, with the SID segment appended only when present and non-empty.
    pub fn resource_url(&self, sid: Option<&str>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([API_VERSION, FAXES_RESOURCE]);
            if let Some(sid) = sid.filter(|sid| !sid.is_empty()) {
                segments.push(sid);
            }
        }
        url
    }

    /// Collection URL with `params` appended as the query string. No `?` is
    /// added when `params` is empty.
    pub fn collection_url_with_query(&self, params: &[(String, String)]) -> Url {
        let mut url = self.resource_url(None);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}
