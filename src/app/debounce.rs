//! Cooperative debouncing for text input.
//!
//! Search input should not re-run the query pipeline on every keystroke.
//! [`Debouncer`] is the cancellable delayed task for that: submitting a value
//! schedules it for delivery after a delay, a newer submission replaces and
//! reschedules the pending one, and the owner polls from its event loop to
//! collect the value once the deadline passes. No threads, no timers — the
//! single-threaded cooperative model drives it by polling.

use std::time::{Duration, Instant};

/// Default input debounce delay (matches the 500 ms search-box behavior).
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// A cancellable delayed value.
///
/// At most one value is pending at a time; each submission supersedes the
/// previous one and restarts the delay. Polling at or after the deadline
/// yields the value exactly once.
///
/// # Examples
///
/// ```
/// use jobflow::app::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(500));
/// let start = Instant::now();
///
/// debouncer.submit_at("ru".to_string(), start);
/// debouncer.submit_at("rust".to_string(), start + Duration::from_millis(100));
///
/// // The first submission was superseded; only the second fires.
/// assert_eq!(debouncer.poll_at(start + Duration::from_millis(550)), None);
/// assert_eq!(
///     debouncer.poll_at(start + Duration::from_millis(600)),
///     Some("rust".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Delay between the last submission and delivery.
    delay: Duration,

    /// The pending value and its delivery deadline, if any.
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Creates a debouncer with the default 500 ms delay.
    #[must_use]
    pub fn with_default_delay() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    /// Schedules `value` for delivery after the delay, superseding any
    /// pending value.
    pub fn submit(&mut self, value: String) {
        self.submit_at(value, Instant::now());
    }

    /// [`Debouncer::submit`] with an explicit submission instant.
    pub fn submit_at(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Delivers the pending value if its deadline has passed.
    ///
    /// Returns `None` while nothing is pending or the deadline is still in
    /// the future. A delivered value is consumed; the next poll returns
    /// `None` until a new submission arrives.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// [`Debouncer::poll`] with an explicit observation instant.
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Drops any pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
