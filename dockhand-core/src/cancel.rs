use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Cooperative cancellation flag with an interruptible wait.
///
/// Retry loops sleep through `wait` instead of `thread::sleep` so any
/// holder of the shared token can cut a pending interval short.
pub struct CancelToken {
    cancelled: Mutex<bool>,
    signal: Condvar,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Mutex::new(false),
            signal: Condvar::new(),
        }
    }

    /// Marks the token cancelled and wakes every waiter.
    pub fn cancel(&self) {
        let mut cancelled = self.cancelled.lock().expect("Mutex should not be poisoned");
        *cancelled = true;
        self.signal.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.lock().expect("Mutex should not be poisoned")
    }

    /// Blocks for `duration` unless the token is cancelled first.
    ///
    /// Returns `true` when the full duration elapsed and `false` when the
    /// wait was cut short by cancellation.
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut cancelled = self.cancelled.lock().expect("Mutex should not be poisoned");
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (guard, _) = self
                .signal
                .wait_timeout(cancelled, deadline - now)
                .expect("Mutex should not be poisoned");
            cancelled = guard;
        }
        false
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_wait_completes_when_not_cancelled() {
        let token = CancelToken::new();
        assert!(token.wait(Duration::from_millis(5)));
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_wait_returns_immediately_after_cancel() {
        let token = CancelToken::new();
        token.cancel();
        let start = Instant::now();
        assert!(!token.wait(Duration::from_secs(60)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_interrupts_waiting_thread() {
        let token = Arc::new(CancelToken::new());
        let waiter = Arc::clone(&token);
        let handle = thread::spawn(move || waiter.wait(Duration::from_secs(60)));

        thread::sleep(Duration::from_millis(20));
        token.cancel();

        let completed = handle.join().expect("waiter thread should not panic");
        assert!(!completed);
        assert!(token.is_cancelled());
    }
}
