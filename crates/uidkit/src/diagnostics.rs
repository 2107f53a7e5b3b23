//! Structured UID diagnostics.
//!
//! Observability aid for call sites that want one log line describing a UID:
//! its representation kind, bot classification, SDK validity, plus any extra
//! caller-supplied fields. Not part of the validation contract; the record
//! format is not a compatibility surface.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::uid::Uid;
use crate::validate::{is_bot_user, is_valid_web_sdk_uid};

/// One diagnostic record about a UID at a named call site.
#[derive(Clone, Debug, Serialize)]
pub struct UidInfoRecord {
    pub timestamp: String,
    pub context: String,
    pub uid: Value,
    pub kind: &'static str,
    pub is_bot: bool,
    pub is_valid_web_sdk: bool,

    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

/// Build the diagnostic record without emitting it.
pub fn uid_info_record(
    context: &str,
    uid: &Value,
    additional: Option<&Map<String, Value>>,
) -> UidInfoRecord {
    let kind = match Uid::from_value(uid) {
        Some(classified) => classified.kind().as_str(),
        None => "other",
    };

    UidInfoRecord {
        timestamp: Utc::now().to_rfc3339(),
        context: context.to_string(),
        uid: uid.clone(),
        kind,
        is_bot: is_bot_user(uid),
        is_valid_web_sdk: is_valid_web_sdk_uid(uid),
        additional: additional.cloned().unwrap_or_default(),
    }
}

/// Emit a structured diagnostic about `uid` at `context`.
///
/// Side-effect only. Serialization trouble degrades to a debug dump of the
/// record rather than an error.
pub fn log_uid_info(context: &str, uid: &Value, additional: Option<&Map<String, Value>>) {
    let record = uid_info_record(context, uid, additional);
    match serde_json::to_string(&record) {
        Ok(line) => info!(target: "uidkit::uid_info", "{line}"),
        Err(_) => info!(target: "uidkit::uid_info", record = ?record, "uid info"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_classifies_a_numeric_bot_uid() {
        let record = uid_info_record("join", &json!(12345), None);
        assert_eq!(record.context, "join");
        assert_eq!(record.kind, "integer");
        assert!(record.is_bot);
        assert!(record.is_valid_web_sdk);
        assert!(record.additional.is_empty());
    }

    #[test]
    fn record_marks_non_uid_input_as_other() {
        let record = uid_info_record("init", &json!(true), None);
        assert_eq!(record.kind, "other");
        assert!(!record.is_bot);
        assert!(!record.is_valid_web_sdk);
    }

    #[test]
    fn additional_fields_flatten_into_the_record() {
        let mut extra = Map::new();
        extra.insert("channel".to_string(), json!("lobby"));

        let record = uid_info_record("join", &json!("user_7"), Some(&extra));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], json!("string"));
        assert_eq!(value["channel"], json!("lobby"));
        assert_eq!(value["uid"], json!("user_7"));
    }

    #[test]
    fn emitting_never_panics() {
        log_uid_info("init", &json!(null), None);
        log_uid_info("join", &json!("12345"), None);
    }
}
