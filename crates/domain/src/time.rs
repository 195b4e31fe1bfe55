//! Time helpers.
//!
//! The controller runs on a monotonic millisecond clock that starts at boot.
//! Every component receives the current value from the control loop instead of
//! reading a clock itself, so one loop iteration sees a single instant.

/// Milliseconds elapsed since the controller started.
pub type Millis = u64;

/// Milliseconds between `earlier` and `now`, clamped to zero if the clock
/// appears to have gone backwards.
#[must_use]
pub fn elapsed(now: Millis, earlier: Millis) -> Millis {
    now.saturating_sub(earlier)
}
