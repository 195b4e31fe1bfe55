//! In-memory port implementations shared by the unit tests.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use garagelamp_domain::error::PublishError;

use crate::ports::{DigitalInput, DigitalOutput, InboundMessage, Level, Transport};

/// Input pin whose level the test changes through a shared cell.
pub struct FakeInput {
    pub level: Rc<Cell<Level>>,
}

impl FakeInput {
    pub fn at(level: Level) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }

    pub fn released() -> Self {
        Self::at(Level::High)
    }
}

impl DigitalInput for FakeInput {
    fn level(&mut self) -> Level {
        self.level.get()
    }
}

/// Output pin that remembers every write.
#[derive(Default)]
pub struct FakeOutput {
    pub writes: Vec<Level>,
}

impl FakeOutput {
    pub fn last(&self) -> Option<Level> {
        self.writes.last().copied()
    }
}

impl DigitalOutput for FakeOutput {
    fn write(&mut self, level: Level) {
        self.writes.push(level);
    }
}

/// A message captured by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub topic: String,
    pub payload: String,
    pub retain: bool,
}

/// Transport that records sends and replays queued inbound messages.
#[derive(Default)]
pub struct FakeTransport {
    pub sent: Vec<Sent>,
    pub inbound: VecDeque<InboundMessage>,
    pub reject_sends: bool,
}

impl FakeTransport {
    pub fn sent_on(&self, topic: &str) -> Vec<&Sent> {
        self.sent.iter().filter(|s| s.topic == topic).collect()
    }
}

impl Transport for FakeTransport {
    fn send(&mut self, topic: &str, payload: Vec<u8>, retain: bool) -> Result<(), PublishError> {
        if self.reject_sends {
            return Err(PublishError::Transport(Box::new(std::io::Error::other(
                "queue full",
            ))));
        }
        self.sent.push(Sent {
            topic: topic.to_string(),
            payload: String::from_utf8(payload).unwrap(),
            retain,
        });
        Ok(())
    }

    fn next_inbound(&mut self) -> Option<InboundMessage> {
        self.inbound.pop_front()
    }
}
