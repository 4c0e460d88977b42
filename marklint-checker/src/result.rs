use serde::{Deserialize, Serialize};

/// Classification of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// HTTP 200.
    Ok,
    /// Any other terminal HTTP status (after redirects).
    BadStatus { code: u16, reason: String },
    /// The request timed out.
    Timeout,
    /// TCP/TLS level failure, or any other transport error.
    ConnectionFailure,
    /// The URL cannot be probed at all: unparseable, or a scheme the
    /// client has no transport for.
    InvalidScheme,
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok)
    }

    /// The failure line shown in the report. `None` for successes.
    pub fn describe(&self) -> Option<String> {
        match self {
            ProbeOutcome::Ok => None,
            ProbeOutcome::BadStatus { code, reason } => {
                Some(format!("Status Code {} ({})", code, reason))
            }
            ProbeOutcome::Timeout => Some("Timeout".to_string()),
            ProbeOutcome::ConnectionFailure => Some("Connection failure".to_string()),
            ProbeOutcome::InvalidScheme => Some("Not a valid URL!!".to_string()),
        }
    }
}
