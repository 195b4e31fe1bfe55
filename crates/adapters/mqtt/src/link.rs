//! Broker link state and the collaborator that reports it.

use garagelamp_app::ports::Collaborator;
use garagelamp_domain::time::{Millis, elapsed};
use tokio::sync::watch;

/// Whether the broker session is currently usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// Logs broker link transitions from the control loop.
///
/// The event loop task owns reconnection; this only observes the state it
/// publishes so link changes show up alongside the lamp and door logs.
pub struct LinkMonitor {
    state: watch::Receiver<ConnectionState>,
    last: ConnectionState,
    since: Millis,
}

impl LinkMonitor {
    pub fn new(state: watch::Receiver<ConnectionState>) -> Self {
        Self {
            state,
            last: ConnectionState::Disconnected,
            since: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ConnectionState {
        self.last
    }
}

impl Collaborator for LinkMonitor {
    fn name(&self) -> &'static str {
        "mqtt-link"
    }

    fn service(&mut self, now: Millis) {
        let current = *self.state.borrow_and_update();
        if current == self.last {
            return;
        }

        let previous_for_ms = elapsed(now, self.since);
        match current {
            ConnectionState::Connected => {
                tracing::info!(down_for_ms = previous_for_ms, "mqtt link up");
            }
            ConnectionState::Disconnected => {
                tracing::warn!(up_for_ms = previous_for_ms, "mqtt link down");
            }
        }
        self.last = current;
        self.since = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_disconnected() {
        let (_tx, rx) = watch::channel(ConnectionState::default());
        let monitor = LinkMonitor::new(rx);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
        assert_eq!(monitor.name(), "mqtt-link");
    }

    #[test]
    fn should_follow_link_transitions() {
        let (tx, rx) = watch::channel(ConnectionState::default());
        let mut monitor = LinkMonitor::new(rx);

        tx.send_replace(ConnectionState::Connected);
        monitor.service(100);
        assert_eq!(monitor.state(), ConnectionState::Connected);
        assert_eq!(monitor.since, 100);

        monitor.service(200);
        assert_eq!(monitor.since, 100);

        tx.send_replace(ConnectionState::Disconnected);
        monitor.service(300);
        assert_eq!(monitor.state(), ConnectionState::Disconnected);
        assert_eq!(monitor.since, 300);
    }

    #[test]
    fn should_keep_last_state_when_sender_is_gone() {
        let (tx, rx) = watch::channel(ConnectionState::Connected);
        let mut monitor = LinkMonitor::new(rx);
        drop(tx);

        monitor.service(10);

        assert_eq!(monitor.state(), ConnectionState::Connected);
    }
}
