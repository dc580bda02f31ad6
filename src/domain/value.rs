use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`Credentials::from_env`] for the account SID.
pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable read by [`Credentials::from_env`] for the auth token.
pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";

#[derive(Clone, PartialEq, Eq)]
/// Twilio account SID and auth token, sent as HTTP Basic credentials.
///
/// Construction never fails. Both parts are checked for emptiness before every
/// call, so a client built with missing credentials reports
/// [`ValidationError::NotAuthenticated`](crate::ValidationError::NotAuthenticated)
/// without touching the network.
pub struct Credentials {
    account_sid: String,
    auth_token: String,
}

impl Credentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Load credentials from `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN`.
    ///
    /// Unset variables are read as empty strings.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(ACCOUNT_SID_ENV).unwrap_or_default(),
            std::env::var(AUTH_TOKEN_ENV).unwrap_or_default(),
        )
    }

    /// Account SID, used as the Basic auth username.
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Auth token, used as the Basic auth password.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// `true` when both parts are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Error returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Fax resolution tier (`Quality`).
pub enum Quality {
    /// 204x98, supported by every device.
    Standard,
    /// 204x196, widely supported.
    #[default]
    Fine,
    /// 204x392, may not be supported by many devices.
    Superfine,
}

impl Quality {
    /// Form field name used by Twilio (`Quality`).
    pub const FIELD: &'static str = "Quality";

    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fine => "fine",
            Self::Superfine => "superfine",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "standard" => Self::Standard,
            "fine" => Self::Fine,
            "superfine" => Self::Superfine,
            _ => {
                return Err(UnknownVariant {
                    kind: "quality",
                    value: s.to_owned(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifecycle status of a fax as reported by Twilio.
///
/// The client never transitions this value itself; it is whatever the last
/// response carried.
pub enum FaxStatus {
    /// Waiting for processing.
    Queued,
    /// Media is being downloaded, uploaded or transcoded.
    Processing,
    Sending,
    Delivered,
    Receiving,
    Received,
    /// The other end did not pick up.
    NoAnswer,
    /// The other end sent back a busy signal.
    Busy,
    Failed,
    /// Canceled through the REST API or rejected by TwiML.
    Canceled,
}

impl FaxStatus {
    /// Form field name used by Twilio (`Status`).
    pub const FIELD: &'static str = "Status";

    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Sending => "sending",
            Self::Delivered => "delivered",
            Self::Receiving => "receiving",
            Self::Received => "received",
            Self::NoAnswer => "no-answer",
            Self::Busy => "busy",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        }
    }

    /// `true` once Twilio will no longer change the status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Delivered
                | Self::Received
                | Self::NoAnswer
                | Self::Busy
                | Self::Failed
                | Self::Canceled
        )
    }
}

impl fmt::Display for FaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaxStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "queued" => Self::Queued,
            "processing" => Self::Processing,
            "sending" => Self::Sending,
            "delivered" => Self::Delivered,
            "receiving" => Self::Receiving,
            "received" => Self::Received,
            "no-answer" => Self::NoAnswer,
            "busy" => Self::Busy,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            _ => {
                return Err(UnknownVariant {
                    kind: "fax status",
                    value: s.to_owned(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Transmission direction. Faxes sent through this client are always outbound.
pub enum FaxDirection {
    Inbound,
    Outbound,
}

impl FaxDirection {
    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl fmt::Display for FaxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaxDirection {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            _ => Err(UnknownVariant {
                kind: "direction",
                value: s.to_owned(),
            }),
        }
    }
}
