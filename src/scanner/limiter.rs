use std::time::Duration;

/// Per-worker delay applied after each probe. Suspends only the calling
/// worker; never a shared lock.
pub struct RateLimiter {
    delay: Duration,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn throttle(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_configured_delay() {
        let limiter = RateLimiter::new(Duration::from_millis(250));
        let start = Instant::now();
        limiter.throttle().await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_suspend() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let start = Instant::now();
        limiter.throttle().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
