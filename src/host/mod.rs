//! Host integration: per-instance channels and the [`Host`] trait.
//!
//! This module contains:
//! - [`Channels`]: one lazily built [`ListenerList`](crate::ListenerList) per declared channel;
//! - [`Host`]: default-channel and name-keyed accessors over `Channels`;
//! - [`channel_accessors!`](crate::channel_accessors): prefixed accessors for named channels.

mod channels;
mod macros;
mod traits;

pub use channels::Channels;
pub use traits::Host;
