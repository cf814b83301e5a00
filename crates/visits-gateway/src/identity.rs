//! Process identity: the label reported in every `GET /` response.

use std::ffi::OsString;
use std::io;

use visits_core::UNKNOWN_IDENTITY;

/// Resolve the local host name once at startup. Never fails.
pub fn resolve_identity() -> String {
    identity_from(hostname::get())
}

/// Map a host name lookup result to an identity, falling back to `"unknown"`.
pub fn identity_from(lookup: io::Result<OsString>) -> String {
    match lookup {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "hostname lookup failed, using fallback identity");
            UNKNOWN_IDENTITY.to_string()
        }
    }
}
