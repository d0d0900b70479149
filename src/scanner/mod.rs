mod collector;
mod engine;
mod limiter;
mod state;

pub use collector::ResultLog;
pub use engine::Engine;
pub use limiter::RateLimiter;
pub use state::{RunState, StopHandle, StopState};
