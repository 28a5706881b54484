//! Trailing-edge debouncing for noisy inputs.
//!
//! Split in two layers: [`Debouncer`] is a synchronous, clock-agnostic
//! core whose timing contract is testable with explicit instants, and
//! [`use_debounce`] wires that core to a real timer inside a component.

use dioxus::prelude::*;
use std::time::Duration;
use web_time::Instant;

/// Collapses a burst of values into the most recent one, released only
/// after `wait` of silence.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
    last_push: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            last_push: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a value now; any earlier pending value is replaced and
    /// the quiet period restarts.
    pub fn push(&mut self, value: T) {
        self.push_at(value, Instant::now());
    }

    pub fn push_at(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.last_push = Some(now);
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn fire(&mut self) -> Option<T> {
        self.fire_at(Instant::now())
    }

    pub fn fire_at(&mut self, now: Instant) -> Option<T> {
        let last_push = self.last_push?;
        if now.duration_since(last_push) >= self.wait {
            self.last_push = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// When the pending value becomes due, if anything is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_push.map(|pushed| pushed + self.wait)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_push = None;
    }
}

/// Handle returned by [`use_debounce`]. Copy, so event handlers can
/// capture it directly.
pub struct UseDebounce<T: 'static> {
    state: Signal<Debouncer<T>>,
    timer: Signal<Option<Task>>,
    callback: Callback<T>,
}

// Manual impls: derives would put a T: Clone/Copy bound on them, and
// the handle is copyable no matter what T is.
impl<T> Clone for UseDebounce<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for UseDebounce<T> {}

impl<T> UseDebounce<T> {
    /// Feed a value in, restarting the quiet period. The callback runs
    /// with the latest value once input stays quiet for the full wait.
    pub fn call(&mut self, value: T) {
        self.cancel_timer();
        self.state.write().push(value);

        let mut state = self.state;
        let callback = self.callback;
        let task = spawn(async move {
            // Re-check the deadline after sleeping: the clock that ran
            // the timer is not the clock the debouncer reads.
            loop {
                let Some(deadline) = state.peek().deadline() else {
                    break;
                };
                let now = Instant::now();
                if now < deadline {
                    crate::utils::sleep(deadline - now).await;
                    continue;
                }
                // Release the write borrow before running the callback.
                let fired = state.write().fire_at(now);
                if let Some(value) = fired {
                    callback.call(value);
                }
                break;
            }
        });
        self.timer.set(Some(task));
    }

    /// Drop whatever is pending; the callback will not run for it.
    pub fn cancel(&mut self) {
        self.cancel_timer();
        self.state.write().cancel();
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.timer.write().take() {
            task.cancel();
        }
    }
}

/// Debounce hook: `on_fire` runs with the last value passed to
/// [`UseDebounce::call`] once calls stay quiet for `wait`.
pub fn use_debounce<T: 'static>(
    wait: Duration,
    on_fire: impl FnMut(T) + 'static,
) -> UseDebounce<T> {
    let state = use_signal(|| Debouncer::new(wait));
    let timer = use_signal(|| None);
    let callback = use_callback(on_fire);

    UseDebounce {
        state,
        timer,
        callback,
    }
}
