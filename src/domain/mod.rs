//! Domain layer: strong types with no I/O.

mod request;
mod response;
mod validation;
mod value;

pub use request::{ListOptions, SendOptions};
pub use response::{ApiError, Fax, FaxLinks, FaxPage, PageMeta};
pub use validation::ValidationError;
pub use value::{
    ACCOUNT_SID_ENV, AUTH_TOKEN_ENV, Credentials, FaxDirection, FaxStatus, Quality, UnknownVariant,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [(FaxStatus, &str); 10] = [
        (FaxStatus::Queued, "queued"),
        (FaxStatus::Processing, "processing"),
        (FaxStatus::Sending, "sending"),
        (FaxStatus::Delivered, "delivered"),
        (FaxStatus::Receiving, "receiving"),
        (FaxStatus::Received, "received"),
        (FaxStatus::NoAnswer, "no-answer"),
        (FaxStatus::Busy, "busy"),
        (FaxStatus::Failed, "failed"),
        (FaxStatus::Canceled, "canceled"),
    ];

    #[test]
    fn quality_renders_wire_labels() {
        assert_eq!(Quality::Standard.as_str(), "standard");
        assert_eq!(Quality::Fine.as_str(), "fine");
        assert_eq!(Quality::Superfine.to_string(), "superfine");
        assert_eq!("superfine".parse::<Quality>(), Ok(Quality::Superfine));
        assert!("ultrafine".parse::<Quality>().is_err());
    }

    #[test]
    fn fax_status_renders_every_wire_label() {
        for (status, label) in ALL_STATUSES {
            assert_eq!(status.as_str(), label);
            assert_eq!(status.to_string(), label);
            assert_eq!(label.parse::<FaxStatus>(), Ok(status));
        }
    }

    #[test]
    fn fax_status_rejects_unknown_labels() {
        let err = "no_answer".parse::<FaxStatus>().unwrap_err();
        assert_eq!(err.kind, "fax status");
        assert_eq!(err.value, "no_answer");
    }

    #[test]
    fn terminal_statuses() {
        assert!(!FaxStatus::Queued.is_terminal());
        assert!(!FaxStatus::Sending.is_terminal());
        assert!(FaxStatus::Delivered.is_terminal());
        assert!(FaxStatus::Canceled.is_terminal());
    }

    #[test]
    fn send_options_default_mirrors_twilio_defaults() {
        let options = SendOptions::default();
        assert_eq!(options.quality, Quality::Fine);
        assert!(options.store_media);
        assert_eq!(options.ttl_minutes, None);
        assert_eq!(options.sip_auth_username, None);
        assert_eq!(options.sip_auth_password, None);
        assert_eq!(options.status_callback, None);
    }

    #[test]
    fn credentials_completeness() {
        assert!(Credentials::new("SID", "TOKEN").is_complete());
        assert!(!Credentials::new("", "TOKEN").is_complete());
        assert!(!Credentials::new("SID", "").is_complete());
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let rendered = format!("{:?}", Credentials::new("SID", "TOKEN"));
        assert!(rendered.contains("SID"));
        assert!(!rendered.contains("TOKEN"));
    }

    #[test]
    fn api_error_renders_fixed_message() {
        let err = ApiError {
            code: 12228,
            message: "Twilio error message".to_owned(),
            more_info: None,
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fox: error 404 (Twilio error 12228): Twilio error message"
        );
    }
}
