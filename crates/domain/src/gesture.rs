//! Gesture detection — turns a sampled contact level into debounced gestures.
//!
//! The detector works in two stages:
//!
//! 1. **Debounce**: a raw level must stay unchanged for
//!    [`debounce_ms`](GestureTimings::debounce_ms) before it becomes the stable
//!    level. Anything shorter is ignored.
//! 2. **Classify**: stable transitions are classified by how long the contact
//!    was held, measured from the start of the press.
//!
//! | Stable sequence | Gesture |
//! |-----------------|---------|
//! | press, release before `long_press_ms` | [`Gesture::Click`] |
//! | press held for `long_press_ms` | [`Gesture::LongPressStart`] |
//! | release after a long press started | [`Gesture::LongPressStop`] |

use crate::state::DoorPosition;
use crate::time::{Millis, elapsed};

/// A debounced contact gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    LongPressStart,
    LongPressStop,
}

impl Gesture {
    /// What the gesture means for the garage door.
    ///
    /// The contact is closed ("pressed") while the door is shut, so a hold
    /// that starts means the door closed and its release means the door
    /// opened. A short click is also read as "closed".
    #[must_use]
    pub fn door_position(self) -> DoorPosition {
        match self {
            Self::Click | Self::LongPressStart => DoorPosition::Closed,
            Self::LongPressStop => DoorPosition::Opened,
        }
    }
}

/// Timing thresholds for gesture detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTimings {
    /// Minimum time a raw level must hold before it is trusted.
    pub debounce_ms: Millis,
    /// Hold duration that separates a click from a long press.
    pub long_press_ms: Millis,
}

impl Default for GestureTimings {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            long_press_ms: 800,
        }
    }
}

/// Debouncing gesture classifier for one contact.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    timings: GestureTimings,
    /// Last raw sample and when it first appeared.
    raw_pressed: bool,
    raw_since: Millis,
    /// Last debounced level.
    stable_pressed: bool,
    pressed_at: Millis,
    long_press_active: bool,
}

impl GestureDetector {
    /// Create a detector that starts in the released state.
    #[must_use]
    pub fn new(timings: GestureTimings) -> Self {
        Self {
            timings,
            raw_pressed: false,
            raw_since: 0,
            stable_pressed: false,
            pressed_at: 0,
            long_press_active: false,
        }
    }

    /// Whether the debounced contact is currently pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Feed one sample. Returns at most one gesture.
    pub fn update(&mut self, pressed: bool, now: Millis) -> Option<Gesture> {
        if pressed != self.raw_pressed {
            self.raw_pressed = pressed;
            self.raw_since = now;
        }

        if self.raw_pressed != self.stable_pressed
            && elapsed(now, self.raw_since) >= self.timings.debounce_ms
        {
            self.stable_pressed = self.raw_pressed;
            if self.stable_pressed {
                self.pressed_at = self.raw_since;
                self.long_press_active = false;
            } else if self.long_press_active {
                self.long_press_active = false;
                return Some(Gesture::LongPressStop);
            } else {
                return Some(Gesture::Click);
            }
        }

        if self.stable_pressed
            && !self.long_press_active
            && elapsed(now, self.pressed_at) >= self.timings.long_press_ms
        {
            self.long_press_active = true;
            return Some(Gesture::LongPressStart);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample `pressed` every 10 ms over `[from, to)` and collect gestures.
    fn hold(detector: &mut GestureDetector, pressed: bool, from: Millis, to: Millis) -> Vec<Gesture> {
        (from..to)
            .step_by(10)
            .filter_map(|t| detector.update(pressed, t))
            .collect()
    }

    fn detector() -> GestureDetector {
        GestureDetector::new(GestureTimings::default())
    }

    #[test]
    fn should_start_released() {
        assert!(!detector().is_pressed());
    }

    #[test]
    fn should_ignore_flicker_shorter_than_debounce() {
        let mut d = detector();
        let mut events = hold(&mut d, true, 0, 30);
        events.extend(hold(&mut d, false, 30, 2_000));
        assert!(events.is_empty());
        assert!(!d.is_pressed());
    }

    #[test]
    fn should_emit_click_for_short_press() {
        let mut d = detector();
        let mut events = hold(&mut d, true, 0, 300);
        events.extend(hold(&mut d, false, 300, 600));
        assert_eq!(events, vec![Gesture::Click]);
    }

    #[test]
    fn should_emit_long_press_start_once_while_held() {
        let mut d = detector();
        let events = hold(&mut d, true, 0, 5_000);
        assert_eq!(events, vec![Gesture::LongPressStart]);
        assert!(d.is_pressed());
    }

    #[test]
    fn should_emit_long_press_stop_on_release_after_long_press() {
        let mut d = detector();
        let mut events = hold(&mut d, true, 0, 1_000);
        events.extend(hold(&mut d, false, 1_000, 1_200));
        assert_eq!(events, vec![Gesture::LongPressStart, Gesture::LongPressStop]);
    }

    #[test]
    fn should_measure_hold_from_start_of_press() {
        let mut d = detector();
        assert_eq!(d.update(true, 0), None);
        assert_eq!(d.update(true, 50), None);
        assert_eq!(d.update(true, 790), None);
        assert_eq!(d.update(true, 800), Some(Gesture::LongPressStart));
    }

    #[test]
    fn should_ignore_release_bounce_during_long_press() {
        let mut d = detector();
        let mut events = hold(&mut d, true, 0, 1_000);
        events.extend(hold(&mut d, false, 1_000, 1_020));
        events.extend(hold(&mut d, true, 1_020, 3_000));
        assert_eq!(events, vec![Gesture::LongPressStart]);
    }

    #[test]
    fn should_detect_repeated_gestures() {
        let mut d = detector();
        let mut events = hold(&mut d, true, 0, 200);
        events.extend(hold(&mut d, false, 200, 400));
        events.extend(hold(&mut d, true, 400, 1_400));
        events.extend(hold(&mut d, false, 1_400, 1_600));
        assert_eq!(
            events,
            vec![
                Gesture::Click,
                Gesture::LongPressStart,
                Gesture::LongPressStop
            ]
        );
    }

    #[test]
    fn should_map_gestures_to_door_positions() {
        assert_eq!(Gesture::Click.door_position(), DoorPosition::Closed);
        assert_eq!(Gesture::LongPressStart.door_position(), DoorPosition::Closed);
        assert_eq!(Gesture::LongPressStop.door_position(), DoorPosition::Opened);
    }

    #[test]
    fn should_have_sensible_default_timings() {
        let timings = GestureTimings::default();
        assert_eq!(timings.debounce_ms, 50);
        assert_eq!(timings.long_press_ms, 800);
    }
}
