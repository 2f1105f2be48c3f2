//! Exactly-once capture gate for baseline values.
//!
//! [`Capture`] runs a supplied action the first time it is invoked and is
//! a no-op afterwards, including for callers racing the first invocation.
//! A caller that observes [`Capture::has_captured`] returning `true` also
//! observes every effect of the action.

use std::fmt;
use std::sync::Once;

/// A thread-safe "run at most once" gate.
///
/// Every typed field owns one and uses it to fix its baseline on the
/// first successful scan.
pub struct Capture {
    once: Once,
}

impl Capture {
    /// A gate that has not fired yet.
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// A gate that has already fired.
    pub fn captured() -> Self {
        let gate = Self::new();
        gate.once.call_once(|| {});
        gate
    }

    /// Run `action` if no action has completed on this gate yet.
    ///
    /// Returns `true` if this call ran the action. Concurrent callers
    /// wait for the single invocation to finish and then return `false`.
    pub fn capture<F: FnOnce()>(&self, action: F) -> bool {
        let mut ran = false;
        self.once.call_once(|| {
            action();
            ran = true;
        });
        ran
    }

    /// Whether an action has completed on this gate.
    pub fn has_captured(&self) -> bool {
        self.once.is_completed()
    }
}

impl Default for Capture {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones carry the fired/unfired state, not the action.
impl Clone for Capture {
    fn clone(&self) -> Self {
        if self.has_captured() {
            Self::captured()
        } else {
            Self::new()
        }
    }
}

impl fmt::Debug for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capture")
            .field("captured", &self.has_captured())
            .finish()
    }
}
