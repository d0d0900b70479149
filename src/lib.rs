pub mod cli;
pub mod forms;
pub mod http;
pub mod models;
pub mod probe;
pub mod reporter;
pub mod scanner;
pub mod wordlist;

use thiserror::Error;

/// Fatal setup errors. Per-candidate network failures never surface here;
/// they are absorbed as misses inside the probe.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read wordlist {path}: {source}")]
    Wordlist {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to set up HTTP session: {0}")]
    SessionSetup(#[from] reqwest::Error),

    #[error("invalid header '{name}' in configuration")]
    InvalidHeader { name: String },

    #[error("no login form named '{form_name}' found at {url}")]
    FormNotFound { url: String, form_name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use models::{Hit, Outcome, RunConfig, RunReport};
pub use probe::{LoginProbe, PathProbe, Probe};
pub use scanner::{Engine, ResultLog, RunState, StopHandle};
