//! Rate limiting for high-frequency browser events.
//!
//! Both types are clock-agnostic: callers pass a millisecond timestamp
//! (`performance.now()` in the browser), which keeps them testable off-wasm.

/// Leading-edge throttle: runs at most once per window and never schedules
/// a trailing call for the calls it drops.
#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    opened_at: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms as f64,
            opened_at: None,
        }
    }

    /// Returns `true` when the caller should run now.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.opened_at {
            Some(opened_at) if now_ms - opened_at < self.window_ms => false,
            _ => {
                self.opened_at = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge debounce. Every `call` pushes the deadline out; `poll`
/// reports `true` exactly once after the input has been quiet for the delay.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms: delay_ms as f64,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms as u64
    }

    pub fn call(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Consumes a pending deadline without consulting the clock. For callers
    /// whose own timer, re-armed on every `call`, has already waited out the
    /// delay; a coarse or early clock reading must not strand the deadline.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
