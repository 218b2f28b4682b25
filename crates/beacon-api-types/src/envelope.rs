use serde::{Deserialize, Serialize};

/// Uniform wrapper around every JSON response the backend produces.
///
/// `success == false` means `data` carries nothing meaningful and `message`
/// explains the rejection. `data` is kept optional so failure envelopes that
/// omit or null the field still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    // The explicit default path keeps serde from inferring a `T: Default`
    // bound on the derived impl; `T` only needs to deserialize.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: String::new(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_decodes_without_data() {
        let env: Envelope<Vec<u8>> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).expect("decoded");
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "nope");
    }

    #[test]
    fn payload_type_needs_only_deserialize() {
        // Deliberately no Default impl on the payload.
        #[derive(Debug, Deserialize)]
        struct Receipt {
            id: i64,
        }

        let env: Envelope<Receipt> =
            serde_json::from_str(r#"{"success":true,"data":{"id":7},"message":""}"#)
                .expect("decoded");
        assert_eq!(env.data.map(|r| r.id), Some(7));
    }

    #[test]
    fn failure_envelope_tolerates_null_data() {
        let env: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"data":null,"message":"nope"}"#)
                .expect("decoded");
        assert!(env.data.is_none());
    }
}
