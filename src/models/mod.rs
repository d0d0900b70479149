mod config;
mod outcome;

pub use config::{DEFAULT_INTERESTING_STATUSES, REQUEST_TIMEOUT_SECS, RunConfig};
pub use outcome::{Hit, Outcome, RunReport};
