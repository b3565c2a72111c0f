//! # Kettle Example
//!
//! A host with a single default channel. A waiter listens for `full` and
//! `boiling`; the built-in `LogListener` traces every signal.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example kettle --features logging
//! ```

use std::sync::{Arc, LazyLock};

use eavesdrop::{
    Channels, Host, Listener, ListenerError, LogListener, NotifyError, ProtocolRegistry, Signal,
};

static KETTLE: LazyLock<Arc<ProtocolRegistry>> = LazyLock::new(|| {
    let mut registry = ProtocolRegistry::new();
    registry.declare_default(|p| {
        p.send_out("boiling").send_out("full");
    });
    registry.into_shared()
});

struct Kettle {
    capacity: u32,
    content: u32,
    temperature: u32,
    channels: Channels<u32>,
}

impl Kettle {
    fn new(capacity: u32) -> Self {
        Self {
            capacity,
            content: 0,
            temperature: 0,
            channels: Channels::new(Arc::clone(&KETTLE)),
        }
    }

    fn heat(&mut self) -> Result<(), NotifyError> {
        self.temperature = (self.temperature + 10).min(100);
        if self.temperature == 100 {
            self.notify("boiling", &self.temperature)?;
        }
        Ok(())
    }

    fn fill(&mut self, amount: u32) -> Result<(), NotifyError> {
        self.content = (self.content + amount).min(self.capacity);
        if self.content == self.capacity {
            self.notify("full", &self.content)?;
        }
        Ok(())
    }
}

impl Host for Kettle {
    type Payload = u32;

    fn channels(&self) -> &Channels<u32> {
        &self.channels
    }

    fn channels_mut(&mut self) -> &mut Channels<u32> {
        &mut self.channels
    }
}

struct Waiter;

impl Listener<u32> for Waiter {
    fn on_signal(&self, signal: &Signal, value: &u32) -> Result<(), ListenerError> {
        match signal.as_str() {
            "full" => println!(" -> kettle is full ({value} cups)"),
            "boiling" => println!(" -> kettle is boiling ({value}°C)"),
            _ => {}
        }
        Ok(())
    }

    fn responds_to(&self, signal: &Signal) -> bool {
        matches!(signal.as_str(), "full" | "boiling")
    }

    fn name(&self) -> &'static str {
        "waiter"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut kettle = Kettle::new(20);
    kettle.add_listener(Arc::new(Waiter));
    kettle.add_listener(Arc::new(LogListener::new()));
    println!("signals: {:?}", kettle.signals());

    for _ in 0..4 {
        kettle.fill(5)?;
    }
    for _ in 0..10 {
        kettle.heat()?;
    }

    if let Err(err) = kettle.notify("whistling", &0) {
        println!("[{}] {}", err.as_label(), err);
    }
    Ok(())
}
