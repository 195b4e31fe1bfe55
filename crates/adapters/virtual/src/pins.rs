//! Simulated door contact and output pins.

use std::sync::{Arc, Mutex};

use garagelamp_app::ports::{DigitalInput, DigitalOutput, Level};

use crate::lock;

/// A pulled-up door contact. Starts open (high).
#[derive(Clone)]
pub struct VirtualContact {
    level: Arc<Mutex<Level>>,
}

impl Default for VirtualContact {
    fn default() -> Self {
        Self {
            level: Arc::new(Mutex::new(Level::High)),
        }
    }
}

impl VirtualContact {
    pub fn set_level(&self, level: Level) {
        *lock(&self.level) = level;
    }

    /// Short the contact to ground, as a shut door does.
    pub fn close_door(&self) {
        self.set_level(Level::Low);
    }

    pub fn open_door(&self) {
        self.set_level(Level::High);
    }
}

impl DigitalInput for VirtualContact {
    fn level(&mut self) -> Level {
        *lock(&self.level)
    }
}

#[derive(Default)]
struct OutputState {
    level: Option<Level>,
    writes: u64,
}

/// An output pin that remembers its last level and counts writes.
#[derive(Clone)]
pub struct VirtualOutput {
    name: &'static str,
    state: Arc<Mutex<OutputState>>,
}

impl VirtualOutput {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(OutputState::default())),
        }
    }

    /// The level last written, if any.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        lock(&self.state).level
    }

    /// How many times the pin was written, including redundant writes.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        lock(&self.state).writes
    }
}

impl DigitalOutput for VirtualOutput {
    fn write(&mut self, level: Level) {
        tracing::debug!(pin = self.name, ?level, "virtual pin write");
        let mut state = lock(&self.state);
        state.level = Some(level);
        state.writes = state.writes.saturating_add(1);
    }
}
