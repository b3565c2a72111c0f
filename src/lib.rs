//! # eavesdrop
//!
//! **Eavesdrop** gives any type a declared, closed set of signals and a
//! synchronous way to notify listeners about them.
//!
//! A host type declares its signals once (per channel) in a
//! [`ProtocolRegistry`]. Each host instance keeps one [`ListenerList`] per
//! channel, built on first use. Notifying validates the signal against the
//! channel's [`Protocol`] and calls every listener that responds to it, in
//! registration order.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │  ProtocolRegistry (one per host type, shared via Arc)         │
//!   │   default ─► Protocol [boiling, full]                         │
//!   │   record  ─► Protocol [added, removed]                        │
//!   └──────┬──────────────────────────────────────────────┬─────────┘
//!          │ inherit() (protocols copied)                 │ Channels::new
//!          ▼                                              ▼
//!   ┌──────────────────────┐                 ┌──────────────────────────┐
//!   │ derived registry     │                 │ Channels (per instance)  │
//!   │ (own copies, extend) │                 │  default ─► ListenerList │
//!   └──────────────────────┘                 │  record  ─► ListenerList │
//!                                            └────────────┬─────────────┘
//!                                                         │ notify(signal, &payload)
//!                                                         ▼
//!                                            ┌──────────────────────────┐
//!                                            │ protocol check           │
//!                                            │  └─► L1, L2, ... LN      │
//!                                            │      (responds_to ?)     │
//!                                            └──────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! declare ──► ProtocolRegistry ──► Channels ──► first access ──► ListenerList
//!
//! notify(signal, payload) {
//!   ├─► signal not declared            ─► Err(UnknownSignal), nobody called
//!   └─► for listener in insertion order:
//!         ├─ !responds_to(signal)      ─► skip
//!         ├─ on_signal() Ok            ─► next
//!         └─ on_signal() Err
//!               ├─ DeliveryPolicy::FailFast ─► Err(Listener), stop
//!               └─ DeliveryPolicy::Isolate  ─► record, next; Err(Listeners) at the end
//! }
//! ```
//!
//! Dispatch is synchronous and in-process. Nothing is queued, retried or persisted.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Protocols**     | Ordered, de-duplicated signal sets; mergeable and clonable.  | [`Protocol`], [`Signal`]                   |
//! | **Listeners**     | Capability-based receivers, closure listeners, renaming.     | [`Listener`], [`Handlers`], [`SignalMap`]  |
//! | **Dispatch**      | Validated, ordered notification with delivery policies.      | [`ListenerList`], [`DeliveryPolicy`]       |
//! | **Registration**  | Per-type channels with copy-on-inherit.                      | [`ProtocolRegistry`], [`RegistryBuilder`]  |
//! | **Hosts**         | Per-instance lazy lists and generated accessors.             | [`Host`], [`Channels`], [`channel_accessors!`] |
//! | **Errors**        | Typed errors for notification, listeners and registration.   | [`NotifyError`], [`ListenerError`], [`RegistryError`] |
//! | **Configuration** | Dispatch settings shared by a host's lists.                  | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Logging
//! The crate emits `tracing` events (`trace` per notification, `debug` on
//! declarations and list creation, `warn` on listener failures) and never
//! installs a subscriber.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eavesdrop::{Handlers, ListenerList, NotifyError, Protocol};
//!
//! let protocol = Arc::new(Protocol::with(|p| {
//!     p.send_out("boiling").send_out("full");
//! }));
//! let mut listeners: ListenerList<()> = protocol.new_listener_list();
//!
//! let fills = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&fills);
//! listeners.add(Arc::new(Handlers::<()>::new("waiter").on("full", move |_: &()| {
//!     seen.fetch_add(1, Ordering::Relaxed);
//!     Ok(())
//! })));
//!
//! assert_eq!(listeners.notify("full", &()), Ok(1));
//! assert_eq!(listeners.notify("boiling", &()), Ok(0));
//! assert_eq!(
//!     listeners.notify("unknown", &()),
//!     Err(NotifyError::UnknownSignal { signal: "unknown".into() })
//! );
//! assert_eq!(fills.load(Ordering::Relaxed), 1);
//! ```
mod config;
mod error;
mod host;
mod listeners;
mod protocol;
mod registry;

// ---- Public re-exports ----

pub use config::{Config, DeliveryPolicy};
pub use error::{ListenerError, ListenerFailure, NotifyError, RegistryError};
pub use host::{Channels, Host};
pub use listeners::{Handlers, Listener, ListenerList, MappedListener, SignalMap};
pub use protocol::{Protocol, Signal};
pub use registry::{Accessors, ChannelName, ProtocolRegistry, RegistryBuilder};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
