//! UID validation and comparison for the real-time SDK boundary.
//!
//! UIDs arrive from two runtimes: a backend that only speaks the bounded
//! 32-bit unsigned integer domain, and a frontend SDK that also accepts
//! externally generated string identifiers (e.g. `"user_<timestamp>"`). This
//! crate is the compatibility gate between the two: classify raw values,
//! validate them against the SDK's accepted domain, detect the reserved bot
//! identity, and compare UIDs of mixed representation.
//!
//! Everything here is a stateless pure function apart from the `tracing`
//! diagnostic side channel; the public predicates never fail.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod logging;
pub mod uid;
pub mod validate;

pub use config::{validate_configuration, UidConfig, ValidationResult};
pub use diagnostics::{log_uid_info, uid_info_record, UidInfoRecord};
pub use errors::{Error, Result};
pub use uid::{Uid, UidKind, DEFAULT_BOT_UID, MAX_NUMERIC_UID};
pub use validate::{compare_uids, default_bot_uid, is_bot_user, is_valid_web_sdk_uid};
