use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved integer UID of the automated participant.
pub const DEFAULT_BOT_UID: i64 = 12345;

/// Upper bound of the backend's numeric UID domain (`2^32 - 1`).
pub const MAX_NUMERIC_UID: i64 = u32::MAX as i64;

/// A user identifier as the SDK boundary sees it: numeric or string.
///
/// The untagged serde representation means JSON `5` and `"5"` both
/// round-trip as-is. Classification does not imply validity: `Uid::Int(-1)`
/// is a perfectly classifiable UID that `is_valid_web_sdk` rejects, so config
/// validation can report it instead of refusing to look at it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Uid {
    Int(i64),
    Text(String),
}

/// Runtime representation kind (diagnostics only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UidKind {
    Integer,
    Text,
}

impl UidKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UidKind::Integer => "integer",
            UidKind::Text => "string",
        }
    }
}

impl Uid {
    /// Classify a raw JSON value as a UID.
    ///
    /// Only integers and strings classify; booleans, null, arrays, objects
    /// and non-integral numbers do not.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Uid::Int),
            serde_json::Value::String(s) => Some(Uid::Text(s.clone())),
            _ => None,
        }
    }

    pub fn kind(&self) -> UidKind {
        match self {
            Uid::Int(_) => UidKind::Integer,
            Uid::Text(_) => UidKind::Text,
        }
    }

    /// Whether this UID denotes the reserved bot identity.
    ///
    /// Strings go through the same lenient prefix parse as `semantically_eq`,
    /// so `"12345"` (and `"12345abc"`) count as the bot.
    pub fn is_bot(&self) -> bool {
        match self {
            Uid::Int(n) => *n == DEFAULT_BOT_UID,
            Uid::Text(s) => parse_uid_prefix(s) == Some(DEFAULT_BOT_UID),
        }
    }

    /// Whether the frontend SDK accepts this UID.
    ///
    /// Strings must be non-empty after trimming; integers must fall in the
    /// backend's `1..=2^32-1` domain.
    pub fn is_valid_web_sdk(&self) -> bool {
        match self {
            Uid::Int(n) => (1..=MAX_NUMERIC_UID).contains(n),
            Uid::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Numeric view of the UID, using the lenient prefix parse for strings.
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Uid::Int(n) => Some(*n),
            Uid::Text(s) => parse_uid_prefix(s),
        }
    }

    /// Semantic equality across representations.
    ///
    /// Same kind compares strictly, with no coercion. Mixed kinds compare
    /// through the numeric view; any failed coercion means "not equal".
    pub fn semantically_eq(&self, other: &Uid) -> bool {
        match (self, other) {
            (Uid::Int(a), Uid::Int(b)) => a == b,
            (Uid::Text(a), Uid::Text(b)) => a == b,
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uid::Int(n) => write!(f, "{n}"),
            Uid::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Uid {
    fn from(n: i64) -> Self {
        Uid::Int(n)
    }
}

impl From<String> for Uid {
    fn from(s: String) -> Self {
        Uid::Text(s)
    }
}

impl From<&str> for Uid {
    fn from(s: &str) -> Self {
        Uid::Text(s.to_string())
    }
}

/// Base-10 integer prefix parse, `parseInt` style.
///
/// Leading whitespace and an optional sign are skipped, at least one digit is
/// required, and trailing non-digits are ignored (`"123abc"` parses as 123).
/// A digit run that overflows `i64` is treated as not-a-number.
pub fn parse_uid_prefix(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (negative, digits) = match t.as_bytes().first()? {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for &b in digits.as_bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
