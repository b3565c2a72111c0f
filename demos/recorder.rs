//! # Recorder Example
//!
//! A host with a named `record` channel, a derived host that extends it, and
//! a listener plugged in through a signal map.
//!
//! ## Run
//! ```bash
//! cargo run --example recorder
//! ```

use std::sync::{Arc, LazyLock};

use eavesdrop::{
    Channels, Config, DeliveryPolicy, Handlers, Host, ListenerError, ProtocolRegistry, SignalMap,
    channel_accessors,
};

static RECORDER: LazyLock<Arc<ProtocolRegistry>> = LazyLock::new(|| {
    ProtocolRegistry::builder()
        .channel("record", |p| {
            p.send_out("added").send_out("removed");
        })
        .build()
        .expect("record channel name is valid")
});

static AUDITED: LazyLock<Arc<ProtocolRegistry>> = LazyLock::new(|| {
    ProtocolRegistry::builder()
        .inherit(&RECORDER)
        .channel("record", |p| {
            p.send_out("rejected");
        })
        .build()
        .expect("record channel name is valid")
});

struct Recorder {
    items: Vec<String>,
    channels: Channels<str>,
}

impl Recorder {
    fn new(registry: &Arc<ProtocolRegistry>, config: Config) -> Self {
        Self {
            items: Vec::new(),
            channels: Channels::with_config(Arc::clone(registry), config),
        }
    }

    fn add(&mut self, item: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.items.push(item.to_owned());
        self.record_listeners().notify("added", item)?;
        Ok(())
    }

    fn remove(&mut self, item: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.items.retain(|i| i != item);
        self.record_listeners().notify("removed", item)?;
        Ok(())
    }
}

impl Host for Recorder {
    type Payload = str;

    fn channels(&self) -> &Channels<str> {
        &self.channels
    }

    fn channels_mut(&mut self) -> &mut Channels<str> {
        &mut self.channels
    }
}

channel_accessors! {
    Recorder {
        record: record_listeners, add_record_listener, record_signals;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        delivery: DeliveryPolicy::Isolate,
    };

    let mut plain = Recorder::new(&RECORDER, config);
    let mut audited = Recorder::new(&AUDITED, config);
    println!("recorder signals: {:?}", plain.record_signals());
    println!("audited signals:  {:?}", audited.record_signals());

    let printer = Arc::new(
        Handlers::<str>::new("printer")
            .on("item_added", |item: &str| {
                println!(" -> added {item}");
                Ok(())
            })
            .on("item_removed", |item: &str| {
                println!(" -> removed {item}");
                Ok(())
            }),
    );
    plain
        .channels_mut()
        .channel_listeners_mut("record")?
        .add_mapped(printer, SignalMap::new().prefix("item"));

    plain.add("apple")?;
    plain.add("pear")?;
    plain.remove("apple")?;
    println!("items: {:?}", plain.items);

    audited.add_record_listener(Arc::new(Handlers::<str>::new("picky").on(
        "added",
        |item: &str| {
            if item.is_empty() {
                return Err(ListenerError::fail("empty item"));
            }
            Ok(())
        },
    )));
    if let Err(err) = audited.add("") {
        println!("audited recorder refused: {err}");
    }
    Ok(())
}
