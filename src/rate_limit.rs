use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// In-memory sliding-window limiter keyed by `bucket:client`.
/// Guards the manual refetch endpoint against hammering the content source.
pub struct RateLimiter {
    max_attempts: u64,
    window: Duration,
    entries: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_attempts: u64, window: Duration) -> Self {
        RateLimiter {
            max_attempts,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Instant>>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Record an attempt and return true if it is under the limit.
    pub fn check_and_record(&self, key: &str) -> bool {
        let mut map = self.lock();
        let now = Instant::now();
        let window = self.window;

        let attempts = map.entry(key.to_string()).or_default();
        attempts.retain(|t| now.duration_since(*t) < window);

        if (attempts.len() as u64) < self.max_attempts {
            attempts.push(now);
            true
        } else {
            false
        }
    }

    /// Attempts left in the current window, without recording one.
    pub fn remaining(&self, key: &str) -> u64 {
        let mut map = self.lock();
        let now = Instant::now();
        let window = self.window;

        let attempts = map.entry(key.to_string()).or_default();
        attempts.retain(|t| now.duration_since(*t) < window);

        self.max_attempts.saturating_sub(attempts.len() as u64)
    }

    /// Drop keys with no attempts inside the window.
    pub fn cleanup(&self) {
        let mut map = self.lock();
        let now = Instant::now();
        let window = self.window;
        map.retain(|_, attempts| {
            attempts.retain(|t| now.duration_since(*t) < window);
            !attempts.is_empty()
        });
    }

    #[cfg(test)]
    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_per_key() {
        let rl = RateLimiter::new(2, Duration::from_secs(60));
        assert!(rl.check_and_record("refetch:1.2.3.4"));
        assert_eq!(rl.remaining("refetch:1.2.3.4"), 1);
        assert!(rl.check_and_record("refetch:1.2.3.4"));
        assert!(!rl.check_and_record("refetch:1.2.3.4"));
        assert!(rl.check_and_record("refetch:5.6.7.8"));
    }

    #[test]
    fn zero_window_expires_immediately() {
        let rl = RateLimiter::new(1, Duration::ZERO);
        assert!(rl.check_and_record("k"));
        assert!(rl.check_and_record("k"));
        rl.cleanup();
        assert_eq!(rl.tracked_keys(), 0);
    }
}
