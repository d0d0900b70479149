mod login;
mod path;

pub use login::LoginProbe;
pub use path::PathProbe;

use crate::models::Outcome;

/// One enumeration strategy: tests a single candidate against the target.
///
/// Implementations must absorb ordinary network failures as `Miss`; only
/// session setup (at construction) may fail the run. Selected once at
/// engine construction, so the worker loop is written a single time.
pub trait Probe: Send + Sync {
    fn attempt(&self, candidate: &str) -> impl Future<Output = Outcome> + Send;

    /// Whether a hit should end the run (first-valid-credential-wins).
    fn stop_on_hit(&self) -> bool {
        false
    }
}
