use std::collections::HashMap;
use std::time::Duration;

/// Statuses worth reporting even without an indicator match.
pub const DEFAULT_INTERESTING_STATUSES: [u16; 4] = [200, 301, 302, 403];

/// Overall per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Immutable run parameters. Built once by the CLI layer and never mutated
/// afterwards; every worker shares the same view.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_url: String,
    pub concurrency: usize,
    pub delay: Duration,
    pub headers: HashMap<String, String>,
    pub cookies: HashMap<String, String>,
    pub success_indicators: Vec<String>,
    /// Static form fields merged into every login attempt, on top of the
    /// fields discovered from the login page.
    pub form_fields: HashMap<String, String>,
    pub interesting_statuses: Vec<u16>,
}

impl RunConfig {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            concurrency: 10,
            delay: Duration::from_millis(100),
            headers: HashMap::new(),
            cookies: HashMap::new(),
            success_indicators: Vec::new(),
            form_fields: HashMap::new(),
            interesting_statuses: DEFAULT_INTERESTING_STATUSES.to_vec(),
        }
    }
}
