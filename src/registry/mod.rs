//! Type-level protocol registration.
//!
//! ## Contents
//! - [`ChannelName`]      validated name of a non-default channel
//! - [`Accessors`]        accessor names generated per channel
//! - [`ProtocolRegistry`] protocols of one host type, copy-on-inherit
//! - [`RegistryBuilder`]  fluent construction, optionally from a parent registry
//!
//! ## Quick wiring
//! ```text
//! static REGISTRY: LazyLock<Arc<ProtocolRegistry>>   (once per host type)
//!      └─► Channels::new(Arc::clone(&REGISTRY))      (once per host instance)
//!           └─► ListenerList per channel, built on first access
//! ```

mod builder;
mod channel;
mod protocols;

pub use builder::RegistryBuilder;
pub use channel::{Accessors, ChannelName};
pub use protocols::ProtocolRegistry;
