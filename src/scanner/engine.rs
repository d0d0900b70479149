use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{Outcome, RunReport};
use crate::probe::Probe;
use crate::scanner::{RateLimiter, ResultLog, RunState, StopHandle, StopState};

/// Cadence of the periodic probes/hits log line.
const PROGRESS_LOG_EVERY: usize = 100;

/// Drives one enumeration run: a fixed pool of workers draining a shared
/// candidate queue through the injected probe strategy.
pub struct Engine<P: Probe> {
    probe: P,
    queue: Mutex<VecDeque<String>>,
    total: usize,
    concurrency: usize,
    limiter: RateLimiter,
    state: Arc<RunState>,
    results: ResultLog,
}

impl<P: Probe> Engine<P> {
    pub fn new(probe: P, candidates: Vec<String>, concurrency: usize, delay: Duration) -> Self {
        let total = candidates.len();
        Self {
            probe,
            queue: Mutex::new(candidates.into()),
            total,
            concurrency: concurrency.max(1),
            limiter: RateLimiter::new(delay),
            state: Arc::new(RunState::new()),
            results: ResultLog::new(),
        }
    }

    /// Cancellation handle for the caller; a requested stop is observed at
    /// the next pull boundary of every worker.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle::new(self.state.clone())
    }

    pub async fn run(&self, verbose: bool) -> RunReport {
        let start = Instant::now();
        let pb = self.create_progress_bar(verbose);

        let workers: Vec<_> = (0..self.concurrency).map(|_| self.worker(&pb)).collect();
        join_all(workers).await;

        // Stop was requested if the flag moved before the queue drained.
        let interrupted = self.state.stop_state() != StopState::Running;
        self.state.mark_stopped();

        pb.finish_with_message("Scan complete");

        RunReport {
            hits: self.results.snapshot(),
            probed: self.state.probed(),
            total_candidates: self.total,
            elapsed: start.elapsed(),
            interrupted,
        }
    }

    async fn worker(&self, pb: &ProgressBar) {
        loop {
            if !self.state.is_running() {
                break;
            }
            let Some(candidate) = self.next_candidate() else {
                break;
            };

            let outcome = self.probe.attempt(&candidate).await;

            if let Outcome::Hit(hit) = outcome {
                tracing::info!(%hit, "hit");
                self.results.record(hit);
                if self.probe.stop_on_hit() {
                    self.state.request_stop();
                }
            }

            let probed = self.state.record_probe();
            pb.inc(1);
            if probed % PROGRESS_LOG_EVERY == 0 {
                tracing::info!(probed, hits = self.results.len(), "progress");
            }

            self.limiter.throttle().await;
        }
    }

    fn next_candidate(&self) -> Option<String> {
        self.queue.lock().expect("candidate queue poisoned").pop_front()
    }

    fn create_progress_bar(&self, verbose: bool) -> ProgressBar {
        let pb = ProgressBar::new(self.total as u64);

        if verbose {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {msg}")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
        } else {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
        }

        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hit;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Networkless probe that counts attempts and hits on chosen candidates.
    struct StubProbe {
        attempts: AtomicUsize,
        hit_on: Vec<&'static str>,
        stop: bool,
    }

    impl StubProbe {
        fn new(hit_on: Vec<&'static str>, stop: bool) -> Self {
            Self {
                attempts: AtomicUsize::new(0),
                hit_on,
                stop,
            }
        }
    }

    impl Probe for StubProbe {
        async fn attempt(&self, candidate: &str) -> Outcome {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.hit_on.contains(&candidate) {
                Outcome::Hit(Hit::Password {
                    secret: candidate.to_string(),
                })
            } else {
                Outcome::Miss
            }
        }

        fn stop_on_hit(&self) -> bool {
            self.stop
        }
    }

    fn candidates(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{}", i)).collect()
    }

    #[tokio::test]
    async fn every_candidate_is_delivered_exactly_once() {
        for concurrency in [1, 4, 8] {
            let engine = Engine::new(
                StubProbe::new(vec![], false),
                candidates(100),
                concurrency,
                Duration::ZERO,
            );
            let report = engine.run(false).await;

            assert_eq!(engine.probe.attempts.load(Ordering::SeqCst), 100);
            assert_eq!(report.probed, 100);
            assert_eq!(report.total_candidates, 100);
            assert!(!report.interrupted);
        }
    }

    #[tokio::test]
    async fn hit_with_stop_on_hit_halts_the_run() {
        let words = vec!["letmein".to_string(), "a".to_string(), "b".to_string()];
        let engine = Engine::new(
            StubProbe::new(vec!["letmein"], true),
            words,
            1,
            Duration::ZERO,
        );
        let report = engine.run(false).await;

        // With one worker and the hit first, nothing else is pulled.
        assert_eq!(engine.probe.attempts.load(Ordering::SeqCst), 1);
        assert_eq!(report.hits.len(), 1);
        assert!(report.interrupted);
    }

    #[tokio::test]
    async fn hits_without_stop_do_not_halt() {
        let engine = Engine::new(
            StubProbe::new(vec!["word3", "word7"], false),
            candidates(10),
            4,
            Duration::ZERO,
        );
        let report = engine.run(false).await;

        assert_eq!(report.probed, 10);
        assert_eq!(report.hits.len(), 2);
        assert!(!report.interrupted);
    }

    #[tokio::test]
    async fn external_stop_prevents_new_pulls() {
        let engine = Engine::new(
            StubProbe::new(vec![], false),
            candidates(50),
            4,
            Duration::ZERO,
        );
        engine.stop_handle().request_stop();

        let report = engine.run(false).await;
        assert_eq!(engine.probe.attempts.load(Ordering::SeqCst), 0);
        assert!(report.hits.is_empty());
        assert!(report.interrupted);
    }

    #[tokio::test]
    async fn state_is_stopped_after_run() {
        let engine = Engine::new(StubProbe::new(vec![], false), candidates(5), 2, Duration::ZERO);
        engine.run(false).await;
        assert_eq!(engine.state.stop_state(), StopState::Stopped);
    }
}
