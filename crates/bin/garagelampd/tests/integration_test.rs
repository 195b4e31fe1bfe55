//! End-to-end scenarios for the full controller stack.
//!
//! Each test wires a real [`Controller`] to the virtual adapters and drives
//! it through simulated time, the way the daemon's tick loop does. No broker
//! and no GPIO hardware are involved.

use garagelamp_adapter_virtual::{VirtualContact, VirtualOutput, VirtualTransport};
use garagelamp_app::ports::Level;
use garagelamp_app::{Controller, ControllerConfig};
use garagelamp_domain::time::Millis;

const LAMP_SET: &str = "set/garage/space/lamp";
const LAMP_GET: &str = "get/garage/space/lamp";
const DOOR_GET: &str = "get/garage/space/door/internal";

struct Rig {
    controller: Controller<VirtualContact, VirtualOutput, VirtualOutput, VirtualTransport>,
    contact: VirtualContact,
    relay: VirtualOutput,
    indicator: VirtualOutput,
    broker: VirtualTransport,
    now: Millis,
}

impl Rig {
    fn new() -> Self {
        Self::with_config(&ControllerConfig::default())
    }

    fn with_config(config: &ControllerConfig) -> Self {
        let contact = VirtualContact::default();
        let relay = VirtualOutput::new("relay");
        let indicator = VirtualOutput::new("indicator");
        let broker = VirtualTransport::default();
        let controller = Controller::new(
            config,
            contact.clone(),
            relay.clone(),
            indicator.clone(),
            broker.clone(),
        );
        Self {
            controller,
            contact,
            relay,
            indicator,
            broker,
            now: 0,
        }
    }

    /// Tick every 10 ms for `duration`.
    fn advance(&mut self, duration: Millis) {
        let end = self.now + duration;
        while self.now < end {
            self.controller.tick(self.now);
            self.now += 10;
        }
    }

    fn payloads_on(&self, topic: &str) -> Vec<String> {
        self.broker
            .published_on(topic)
            .iter()
            .map(|m| m.payload_str())
            .collect()
    }

    fn lamp_on(&self) -> bool {
        self.controller.state().lamp.is_powered_on()
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn should_start_with_lamp_off_and_nothing_published() {
    let mut rig = Rig::new();

    rig.advance(1_000);

    assert!(!rig.lamp_on());
    assert_eq!(rig.relay.level(), Some(Level::Low));
    assert_eq!(rig.indicator.level(), Some(Level::High));
    assert!(rig.broker.published().is_empty());
}

// ---------------------------------------------------------------------------
// Remote commands
// ---------------------------------------------------------------------------

#[test]
fn should_switch_lamp_on_from_remote_command() {
    let mut rig = Rig::new();
    rig.broker
        .inject(LAMP_SET, r#"{"status":{"powerOn":true},"messageId":"m1"}"#);

    rig.advance(10);

    assert!(rig.lamp_on());
    assert_eq!(rig.relay.level(), Some(Level::High));
    assert_eq!(rig.indicator.level(), Some(Level::Low));
    let published = rig.broker.published_on(LAMP_GET);
    assert_eq!(published.len(), 1);
    assert_eq!(
        published[0].payload_str(),
        r#"{"status":{"powerOn":true},"messageId":"m1"}"#
    );
    assert!(published[0].retain);
}

#[test]
fn should_echo_without_touching_relay_when_command_matches_state() {
    let mut rig = Rig::new();
    let writes_before = rig.relay.write_count();
    rig.broker
        .inject(LAMP_SET, r#"{"status":{"powerOn":false},"messageId":"same"}"#);

    rig.advance(10);

    assert_eq!(rig.relay.write_count(), writes_before);
    assert_eq!(
        rig.payloads_on(LAMP_GET),
        vec![r#"{"status":{"powerOn":false},"messageId":"same"}"#]
    );
}

#[test]
fn should_ignore_malformed_and_foreign_messages() {
    let mut rig = Rig::new();
    rig.broker.inject(LAMP_SET, "not json");
    rig.broker.inject(LAMP_SET, r#"[{"powerOn":true},"m1"]"#);
    rig.broker.inject(LAMP_SET, r#"{"status":[true]}"#);
    rig.broker.inject(LAMP_SET, r#"{"status":null}"#);
    rig.broker
        .inject("set/garage/space/fan", r#"{"status":{"powerOn":true}}"#);

    rig.advance(10);

    assert!(!rig.lamp_on());
    assert!(rig.broker.published().is_empty());
}

#[test]
fn should_apply_command_with_non_string_message_id() {
    let mut rig = Rig::new();
    rig.broker
        .inject(LAMP_SET, r#"{"status":{"powerOn":true},"messageId":5}"#);

    rig.advance(10);

    assert!(rig.lamp_on());
    assert_eq!(rig.relay.level(), Some(Level::High));
    assert_eq!(rig.payloads_on(LAMP_GET), vec![r#"{"status":{"powerOn":true}}"#]);
}

#[test]
fn should_apply_command_without_message_id() {
    let mut rig = Rig::new();
    rig.broker.inject(LAMP_SET, r#"{"status":{"powerOn":true}}"#);

    rig.advance(10);

    assert_eq!(rig.payloads_on(LAMP_GET), vec![r#"{"status":{"powerOn":true}}"#]);
}

// ---------------------------------------------------------------------------
// Door
// ---------------------------------------------------------------------------

#[test]
fn should_follow_door_open_and_close() {
    let mut rig = Rig::new();

    rig.contact.close_door();
    rig.advance(1_000);
    assert!(!rig.controller.state().door.opened);
    assert!(!rig.lamp_on());

    rig.contact.open_door();
    rig.advance(100);
    assert!(rig.controller.state().door.opened);
    assert!(rig.lamp_on());
    assert_eq!(rig.relay.level(), Some(Level::High));
    assert_eq!(rig.indicator.level(), Some(Level::Low));

    assert_eq!(
        rig.payloads_on(DOOR_GET),
        vec![
            r#"{"status":{"door":"closed"}}"#,
            r#"{"status":{"door":"opened"}}"#,
        ]
    );
}

#[test]
fn should_republish_lamp_on_after_door_opens() {
    let mut rig = Rig::new();
    rig.contact.close_door();
    rig.advance(1_000);
    rig.contact.open_door();
    rig.advance(100);
    assert!(rig.payloads_on(LAMP_GET).is_empty());

    rig.advance(60_000);

    assert_eq!(rig.payloads_on(LAMP_GET), vec![r#"{"status":{"powerOn":true}}"#]);
}

#[test]
fn should_override_remote_off_on_next_door_opening() {
    let mut rig = Rig::new();
    rig.contact.close_door();
    rig.advance(1_000);
    rig.contact.open_door();
    rig.advance(100);

    rig.broker.inject(LAMP_SET, r#"{"status":{"powerOn":false}}"#);
    rig.advance(10);
    assert!(!rig.lamp_on());

    rig.contact.close_door();
    rig.advance(1_000);
    rig.contact.open_door();
    rig.advance(100);

    assert!(rig.lamp_on());
}

#[test]
fn should_ignore_contact_bounce_shorter_than_debounce() {
    let mut rig = Rig::new();

    for _ in 0..5 {
        rig.contact.close_door();
        rig.advance(20);
        rig.contact.open_door();
        rig.advance(20);
    }
    rig.advance(1_000);

    assert!(rig.payloads_on(DOOR_GET).is_empty());
}

#[test]
fn should_report_door_closed_on_short_press() {
    let mut rig = Rig::new();
    rig.contact.close_door();
    rig.advance(300);
    rig.contact.open_door();
    rig.advance(100);

    assert_eq!(rig.payloads_on(DOOR_GET), vec![r#"{"status":{"door":"closed"}}"#]);
    assert!(!rig.lamp_on());
}

// ---------------------------------------------------------------------------
// Periodic status
// ---------------------------------------------------------------------------

#[test]
fn should_throttle_periodic_lamp_status() {
    let mut rig = Rig::new();

    rig.advance(125_000);

    assert_eq!(rig.payloads_on(LAMP_GET).len(), 2);
    assert_eq!(rig.controller.state().lamp.last_status_published_at(), 120_000);
}

#[test]
fn should_use_configured_status_interval() {
    let config = ControllerConfig {
        status_interval_ms: 1_000,
        ..ControllerConfig::default()
    };
    let mut rig = Rig::with_config(&config);

    rig.advance(3_500);

    assert_eq!(rig.payloads_on(LAMP_GET).len(), 3);
}

#[test]
fn should_retry_lamp_status_once_transport_recovers() {
    let mut rig = Rig::new();
    rig.broker.set_offline(true);
    rig.advance(61_000);
    assert!(rig.broker.published().is_empty());
    assert_eq!(rig.controller.state().lamp.last_status_published_at(), 0);

    rig.broker.set_offline(false);
    rig.advance(10);

    assert_eq!(rig.payloads_on(LAMP_GET).len(), 1);
    assert_eq!(rig.controller.state().lamp.last_status_published_at(), 61_000);
}

#[test]
fn should_keep_lamp_state_when_echo_fails() {
    let mut rig = Rig::new();
    rig.broker.set_offline(true);
    rig.broker.inject(LAMP_SET, r#"{"status":{"powerOn":true},"messageId":"lost"}"#);

    rig.advance(10);

    assert!(rig.lamp_on());
    assert_eq!(rig.relay.level(), Some(Level::High));
}
