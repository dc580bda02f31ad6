/// Pre-flight failures raised before any request is built.
///
/// Each variant is a fixed value per cause, so callers can compare with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("fox: account SID and/or auth token not specified")]
    NotAuthenticated,
    #[error("fox: fax SID not specified")]
    MissingSid,
    #[error("fox: to number not specified")]
    MissingToNumber,
    #[error("fox: from number not specified")]
    MissingFromNumber,
    #[error("fox: media URL not specified")]
    MissingMediaUrl,
}
