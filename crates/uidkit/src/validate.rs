//! Value-level validation API: the gate callers run on raw, untyped input
//! before handing a UID to the SDK.
//!
//! All functions here are total. Input that does not classify as a UID is
//! answered with `false` (plus a diagnostic warning where that is surprising),
//! never with an error, so these can sit on the hot path of SDK init without
//! error handling.

use serde_json::Value;
use tracing::warn;

use crate::uid::{Uid, DEFAULT_BOT_UID};

/// Whether `value` denotes the reserved bot identity.
///
/// Strings are parsed with the lenient base-10 prefix rule shared with
/// `compare_uids`. Unsupported input kinds classify as "not the bot"; this is
/// a classification query, not a validation gate, so the mismatch is only
/// worth a warning.
pub fn is_bot_user(value: &Value) -> bool {
    match Uid::from_value(value) {
        Some(uid) => uid.is_bot(),
        None => {
            warn!(value = %value, "is_bot_user called with a non-UID value");
            false
        }
    }
}

/// Whether the frontend SDK accepts `value` as a UID.
///
/// Strings: non-empty after trimming. Integers: the backend's `1..=2^32-1`
/// domain. Anything else (booleans, null, floats, objects) is invalid.
pub fn is_valid_web_sdk_uid(value: &Value) -> bool {
    Uid::from_value(value).is_some_and(|uid| uid.is_valid_web_sdk())
}

/// Semantic equality of two possibly mixed-representation UIDs.
///
/// `12345` and `"12345"` are equal; two values of the same kind compare
/// strictly. If either side fails to classify or to coerce, the answer is
/// `false`, never an error.
pub fn compare_uids(a: &Value, b: &Value) -> bool {
    match (Uid::from_value(a), Uid::from_value(b)) {
        (Some(a), Some(b)) => a.semantically_eq(&b),
        _ => false,
    }
}

/// The reserved bot UID.
pub fn default_bot_uid() -> i64 {
    DEFAULT_BOT_UID
}
