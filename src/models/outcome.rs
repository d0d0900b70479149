use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A positive probe result. Never discarded once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hit {
    /// Directory mode: an existing path on the target.
    Path { status: u16, url: String },
    /// Login mode: an accepted password.
    Password { secret: String },
}

impl Hit {
    /// `(status-or-marker, locator-or-secret)` pair used for persistence.
    pub fn export_pair(&self) -> (String, String) {
        match self {
            Hit::Path { status, url } => (status.to_string(), url.clone()),
            Hit::Password { secret } => ("valid-password".to_string(), secret.clone()),
        }
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hit::Path { status, url } => write!(f, "[{}] {}", status, url),
            Hit::Password { secret } => write!(f, "[!] valid password: {}", secret),
        }
    }
}

/// Result of one probe. A transport failure is a `Miss`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Hit(Hit),
    Miss,
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }
}

/// Final state of a finished run, handed back to the caller for reporting
/// and persistence.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub hits: Vec<Hit>,
    pub probed: usize,
    pub total_candidates: usize,
    pub elapsed: Duration,
    /// True when the run ended through a stop request (hit in login mode or
    /// user interrupt) rather than queue exhaustion.
    pub interrupted: bool,
}
