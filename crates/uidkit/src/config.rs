//! Configuration checking for SDK initialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::uid::DEFAULT_BOT_UID;
use crate::validate::{is_bot_user, is_valid_web_sdk_uid};
use crate::Result;

/// UID-related fields of an SDK init configuration.
///
/// Fields are held as raw JSON values so out-of-range or wrongly typed input
/// still reaches the validator and comes back as a readable error message
/// instead of a deserialization failure. Both fields are optional; absent
/// fields are skipped by validation entirely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UidConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Value>,

    #[serde(default, rename = "botUid", skip_serializing_if = "Option::is_none")]
    pub bot_uid: Option<Value>,
}

impl UidConfig {
    /// Parse a config from raw JSON (SDK init options, config files).
    ///
    /// Unknown keys are ignored; only a malformed document fails.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config = serde_json::from_str(raw)?;
        Ok(config)
    }
}

/// Outcome of `validate_configuration`: overall flag, ordered messages, and
/// an echo of the checked config for traceability.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub config: UidConfig,
}

impl ValidationResult {
    fn new(config: &UidConfig) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            config: config.clone(),
        }
    }
}

/// Validate the UID fields of a configuration.
///
/// Each present field is checked against the Web SDK's accepted domain; a
/// failure appends an error naming the field and value and flips the overall
/// flag. A `botUid` that is in-domain but not the reserved bot identity only
/// warns. This never fails: the result always comes back, carrying any
/// problems as messages.
pub fn validate_configuration(config: &UidConfig) -> ValidationResult {
    let mut result = ValidationResult::new(config);
    check_field(&mut result, "uid", config.uid.as_ref());
    check_field(&mut result, "botUid", config.bot_uid.as_ref());
    result
}

fn check_field(result: &mut ValidationResult, name: &str, value: Option<&Value>) {
    let Some(value) = value else {
        return;
    };

    if !is_valid_web_sdk_uid(value) {
        result
            .errors
            .push(format!("{name} is not a valid Web SDK UID: {value}"));
        result.is_valid = false;
        return;
    }

    if name == "botUid" && !is_bot_user(value) {
        result.warnings.push(format!(
            "botUid {value} differs from the expected bot identity {DEFAULT_BOT_UID}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_uid_and_bot_uid_pass_cleanly() {
        let config = UidConfig {
            uid: Some(json!(5)),
            bot_uid: Some(json!(12345)),
        };
        let result = validate_configuration(&config);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn out_of_range_uid_produces_a_named_error() {
        let config = UidConfig {
            uid: Some(json!(-1)),
            bot_uid: None,
        };
        let result = validate_configuration(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("uid"));
        assert!(result.errors[0].contains("-1"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn non_reserved_bot_uid_warns_but_stays_valid() {
        let config = UidConfig {
            uid: None,
            bot_uid: Some(json!(999)),
        };
        let result = validate_configuration(&config);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("999"));
        assert!(result.warnings[0].contains("12345"));
    }

    #[test]
    fn empty_config_is_valid_with_no_messages() {
        let result = validate_configuration(&UidConfig::default());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn wrongly_typed_field_is_an_error_not_a_crash() {
        let config = UidConfig {
            uid: Some(json!(true)),
            bot_uid: Some(json!("   ")),
        };
        let result = validate_configuration(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn result_echoes_the_input_config() {
        let config = UidConfig {
            uid: Some(json!("user_7")),
            bot_uid: Some(json!(0)),
        };
        let result = validate_configuration(&config);
        assert!(!result.is_valid);
        assert_eq!(result.config.uid, Some(json!("user_7")));
        assert_eq!(result.config.bot_uid, Some(json!(0)));
    }

    #[test]
    fn loads_from_json_with_camel_case_keys() {
        let config = UidConfig::from_json(r#"{"uid": "user_7", "botUid": 12345, "appId": "x"}"#)
            .unwrap();
        assert_eq!(config.uid, Some(json!("user_7")));
        assert_eq!(config.bot_uid, Some(json!(12345)));

        assert!(UidConfig::from_json("not json").is_err());
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = validate_configuration(&UidConfig {
            uid: Some(json!(5)),
            bot_uid: None,
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isValid"], json!(true));
        assert_eq!(value["config"]["uid"], json!(5));
    }
}
