//! # Listeners and the lists that notify them.
//!
//! This module provides the [`Listener`] trait, the [`ListenerList`] that
//! validates and routes notifications, and a few ready-made listeners.
//!
//! ## Architecture
//! ```text
//! Notify flow:
//!   Host ── notify(signal, &payload) ──► ListenerList ──► protocol check
//!                                             │
//!                                             ├──► Listener::on_signal(signal, payload)
//!                                             │         │
//!                                             │    ┌────┴──────┬──────────────┬────────┐
//!                                             │    ▼           ▼              ▼        ▼
//!                                             │  Handlers  MappedListener  LogListener Custom
//!                                             │
//!                                             └──► skipped when !responds_to(signal)
//! ```
//!
//! ## Listener types
//! - **Custom listeners** - implement [`Listener`] and choose signals with `responds_to`
//! - **Closure listeners** - [`Handlers`] opt into signals at construction time
//! - **Adapters** - [`MappedListener`] renames signals through a [`SignalMap`]

#[cfg(feature = "logging")]
mod embedded;
mod handlers;
mod list;
mod listener;
mod mapped;

#[cfg(feature = "logging")]
pub use embedded::LogListener;
pub use handlers::Handlers;
pub use list::ListenerList;
pub use listener::Listener;
pub use mapped::{MappedListener, SignalMap};
