//! # garagelampd — garage lamp daemon
//!
//! Composition root that wires the adapters into the controller and runs the
//! control loop.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Acquire the GPIO pins (rppal, or virtual for dry runs)
//! - Start the MQTT event loop and hand its transport to the controller
//! - Tick the controller at a fixed interval
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::{Duration, Instant};

use garagelamp_adapter_virtual::{VirtualContact, VirtualOutput};
use garagelamp_app::Controller;
use garagelamp_app::ports::{DigitalInput, DigitalOutput};
use garagelamp_domain::time::Millis;
use tokio::signal::unix::{SignalKind, signal};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use config::{Config, GpioBackend, GpioConfig};

type Pins = (
    Box<dyn DigitalInput>,
    Box<dyn DigitalOutput>,
    Box<dyn DigitalOutput>,
);

fn open_pins(config: &GpioConfig) -> Result<Pins, Box<dyn std::error::Error>> {
    match config.backend {
        GpioBackend::Rppal => {
            let pins = garagelamp_adapter_gpio_rppal::open(&config.pins)?;
            Ok((
                Box::new(pins.contact),
                Box::new(pins.relay),
                Box::new(pins.indicator),
            ))
        }
        GpioBackend::Virtual => {
            tracing::warn!("using virtual gpio, the door contact stays open");
            Ok((
                Box::new(VirtualContact::default()),
                Box::new(VirtualOutput::new("relay")),
                Box::new(VirtualOutput::new("indicator")),
            ))
        }
    }
}

/// Milliseconds since `start`, saturating.
fn millis_since(start: Instant) -> Millis {
    Millis::try_from(start.elapsed().as_millis()).unwrap_or(Millis::MAX)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        broker = %config.mqtt.broker_host,
        port = config.mqtt.broker_port,
        backend = ?config.gpio.backend,
        "garagelampd starting"
    );

    let (contact, relay, indicator) = open_pins(&config.gpio)?;

    let (transport, connection, link) = garagelamp_adapter_mqtt::connect(
        &config.mqtt,
        config.controller.topics.lamp_set.clone(),
    );
    tokio::spawn(connection.run());

    let mut controller = Controller::new(&config.controller, contact, relay, indicator, transport)
        .with_collaborator(link);

    let started = Instant::now();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.controller.tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut sigterm = signal(SignalKind::terminate())?;

    let reason = loop {
        tokio::select! {
            _ = ticker.tick() => controller.tick(millis_since(started)),
            _ = &mut ctrl_c => break "SIGINT",
            _ = sigterm.recv() => break "SIGTERM",
        }
    };

    tracing::info!(signal = reason, "garagelampd stopped");
    Ok(())
}
