use serde::Deserialize;
use serde::de::Error as DeError;

/// Price returned by Twilio as either a JSON string or a JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`-0.0050` remains `"-0.0050"` instead of becoming `"-0.005"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPrice(String);

impl TransportPrice {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected price field to be JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::TransportPrice;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        price: Option<TransportPrice>,
    }

    fn price_of(json: &str) -> Option<String> {
        serde_json::from_str::<Holder>(json)
            .unwrap()
            .price
            .map(TransportPrice::into_string)
    }

    #[test]
    fn keeps_string_and_number_tokens_verbatim() {
        assert_eq!(price_of(r#"{"price": "0.07"}"#).as_deref(), Some("0.07"));
        assert_eq!(price_of(r#"{"price": -0.0050}"#).as_deref(), Some("-0.0050"));
    }

    #[test]
    fn null_and_missing_are_none() {
        assert_eq!(price_of(r#"{"price": null}"#), None);
        assert_eq!(price_of("{}"), None);
    }

    #[test]
    fn rejects_other_json_types() {
        assert!(serde_json::from_str::<Holder>(r#"{"price": true}"#).is_err());
    }
}
