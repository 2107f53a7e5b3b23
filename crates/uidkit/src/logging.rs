use crate::{errors::Error, Result};

/// Initialize tracing for binaries embedding this crate.
///
/// Default: info for this crate and the named service, overridable with
/// `RUST_LOG`. Installing a second global subscriber is reported as a config
/// error rather than a panic.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,uidkit=info,{service_name}=info")));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Config(format!("failed to install tracing subscriber: {e}")))
}
