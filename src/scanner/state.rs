use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

const RUNNING: u8 = 0;
const STOPPING: u8 = 1;
const STOPPED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StopState {
    Running,
    Stopping,
    Stopped,
}

/// Shared mutable run state: the stop flag and the probe counter.
///
/// The stop flag only moves forward (running -> stopping -> stopped);
/// `fetch_max` keeps the transition monotone under concurrent requests.
pub struct RunState {
    stop: AtomicU8,
    probed: AtomicUsize,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            stop: AtomicU8::new(RUNNING),
            probed: AtomicUsize::new(0),
        }
    }

    pub fn stop_state(&self) -> StopState {
        match self.stop.load(Ordering::SeqCst) {
            RUNNING => StopState::Running,
            STOPPING => StopState::Stopping,
            _ => StopState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop.load(Ordering::SeqCst) == RUNNING
    }

    /// Requests a graceful stop. Callable from any worker or the interrupt
    /// handler; in-flight probes still finish.
    pub fn request_stop(&self) {
        self.stop.fetch_max(STOPPING, Ordering::SeqCst);
    }

    /// Marks the run finished once no worker pulls candidates anymore.
    pub fn mark_stopped(&self) {
        self.stop.fetch_max(STOPPED, Ordering::SeqCst);
    }

    /// Counts one completed probe and returns the new total.
    pub fn record_probe(&self) -> usize {
        self.probed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn probed(&self) -> usize {
        self.probed.load(Ordering::SeqCst)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable cancellation handle handed to the caller (Ctrl+C task).
#[derive(Clone)]
pub struct StopHandle {
    state: Arc<RunState>,
}

impl StopHandle {
    pub(crate) fn new(state: Arc<RunState>) -> Self {
        Self { state }
    }

    pub fn request_stop(&self) {
        self.state.request_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_are_monotone() {
        let state = RunState::new();
        assert_eq!(state.stop_state(), StopState::Running);

        state.request_stop();
        assert_eq!(state.stop_state(), StopState::Stopping);

        state.mark_stopped();
        assert_eq!(state.stop_state(), StopState::Stopped);

        // A late stop request never reverts the terminal state.
        state.request_stop();
        assert_eq!(state.stop_state(), StopState::Stopped);
    }

    #[test]
    fn counter_increments_once_per_probe() {
        let state = RunState::new();
        assert_eq!(state.record_probe(), 1);
        assert_eq!(state.record_probe(), 2);
        assert_eq!(state.probed(), 2);
    }

    #[test]
    fn handle_requests_stop() {
        let state = Arc::new(RunState::new());
        let handle = StopHandle::new(state.clone());

        handle.clone().request_stop();
        assert!(!state.is_running());
    }
}
