//! # Host trait.
//!
//! A type becomes a signal host by owning a [`Channels`] value and
//! implementing [`Host`]. Every accessor below then comes for free.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, LazyLock};
//! use eavesdrop::{Channels, Handlers, Host, ProtocolRegistry};
//!
//! static KETTLE: LazyLock<Arc<ProtocolRegistry>> = LazyLock::new(|| {
//!     let mut registry = ProtocolRegistry::new();
//!     registry.declare_default(|p| { p.send_out("boiling").send_out("full"); });
//!     registry.into_shared()
//! });
//!
//! struct Kettle {
//!     temperature: u32,
//!     channels: Channels<Kettle>,
//! }
//!
//! impl Host for Kettle {
//!     type Payload = Kettle;
//!     fn channels(&self) -> &Channels<Kettle> { &self.channels }
//!     fn channels_mut(&mut self) -> &mut Channels<Kettle> { &mut self.channels }
//! }
//!
//! impl Kettle {
//!     fn heat(&mut self) -> Result<(), eavesdrop::NotifyError> {
//!         self.temperature = (self.temperature + 10).min(100);
//!         if self.temperature == 100 {
//!             self.notify("boiling", self)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut kettle = Kettle { temperature: 90, channels: Channels::new(Arc::clone(&KETTLE)) };
//! kettle.add_listener(Arc::new(
//!     Handlers::<Kettle>::new("waiter").on("boiling", |k: &Kettle| {
//!         assert_eq!(k.temperature, 100);
//!         Ok(())
//!     }),
//! ));
//! kettle.heat().unwrap();
//! ```

use std::sync::Arc;

use crate::error::{NotifyError, RegistryError};
use crate::listeners::{Listener, ListenerList};
use crate::protocol::Signal;

use super::Channels;

/// Signal host: a type whose instances accept listeners and notify them.
///
/// Default-channel accessors are unprefixed; named channels are reached by
/// name here, or through methods generated by
/// [`channel_accessors!`](crate::channel_accessors).
pub trait Host {
    /// Payload handed to listeners on every channel of this host.
    type Payload: ?Sized + 'static;

    /// The instance's listener lists.
    fn channels(&self) -> &Channels<Self::Payload>;

    /// The instance's listener lists, mutable.
    fn channels_mut(&mut self) -> &mut Channels<Self::Payload>;

    /// Default channel's listeners.
    fn listeners(&self) -> &ListenerList<Self::Payload> {
        self.channels().listeners()
    }

    /// Adds a listener to the default channel.
    fn add_listener(&mut self, listener: Arc<dyn Listener<Self::Payload>>) {
        self.channels_mut().add_listener(listener);
    }

    /// Default channel's declared signals.
    fn signals(&self) -> &[Signal] {
        self.channels().signals()
    }

    /// Notifies the default channel. Meant for the host's own methods.
    ///
    /// Named channels are notified with `channel_listeners(name)?.notify(..)`.
    ///
    /// # Errors
    /// See [`ListenerList::notify`].
    fn notify(
        &self,
        signal: impl AsRef<str>,
        payload: &Self::Payload,
    ) -> Result<usize, NotifyError> {
        self.channels().notify(signal, payload)
    }

    /// Listeners of a named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    fn channel_listeners(&self, name: &str) -> Result<&ListenerList<Self::Payload>, RegistryError> {
        self.channels().channel_listeners(name)
    }

    /// Adds a listener to a named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    fn add_channel_listener(
        &mut self,
        name: &str,
        listener: Arc<dyn Listener<Self::Payload>>,
    ) -> Result<(), RegistryError> {
        self.channels_mut().add_channel_listener(name, listener)
    }

    /// Declared signals of a named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    fn channel_signals(&self, name: &str) -> Result<&[Signal], RegistryError> {
        self.channels().channel_signals(name)
    }
}
