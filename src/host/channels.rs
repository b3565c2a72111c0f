//! # Channels: per-instance listener lists.
//!
//! A host instance owns one [`Channels`] value. It holds a slot for the
//! default channel and for every named channel declared on the type's
//! [`ProtocolRegistry`]. Each slot builds its [`ListenerList`] on first access
//! (read or write) and keeps it for the life of the instance.
//!
//! ```text
//! Channels::new(registry)
//!   default ─► [uninitialized] ──first access──► ListenerList(protocol=default)
//!   record  ─► [uninitialized] ──first access──► ListenerList(protocol=record)
//! ```
//!
//! There is no reset: once built, a list stays.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::config::Config;
use crate::error::{NotifyError, RegistryError};
use crate::listeners::{Listener, ListenerList};
use crate::protocol::{Protocol, Signal};
use crate::registry::{ChannelName, ProtocolRegistry};

/// Lazily built listener list bound to one channel's protocol.
struct Slot<P: ?Sized + 'static> {
    protocol: Arc<Protocol>,
    list: OnceLock<ListenerList<P>>,
}

impl<P: ?Sized + 'static> Slot<P> {
    fn new(protocol: &Arc<Protocol>) -> Self {
        Self {
            protocol: Arc::clone(protocol),
            list: OnceLock::new(),
        }
    }

    fn get(&self, channel: &str, config: Config) -> &ListenerList<P> {
        self.list.get_or_init(|| {
            debug!(channel, signals = %self.protocol, "creating listener list");
            ListenerList::with_config(Arc::clone(&self.protocol), config)
        })
    }

    fn get_mut(&mut self, channel: &str, config: Config) -> &mut ListenerList<P> {
        self.get(channel, config);
        match self.list.get_mut() {
            Some(list) => list,
            None => unreachable!("listener list is initialized by get()"),
        }
    }

    fn is_initialized(&self) -> bool {
        self.list.get().is_some()
    }
}

/// Listener lists of one host instance, one per declared channel.
pub struct Channels<P: ?Sized + 'static> {
    registry: Arc<ProtocolRegistry>,
    config: Config,
    default: Slot<P>,
    named: BTreeMap<ChannelName, Slot<P>>,
}

impl<P: ?Sized + 'static> Channels<P> {
    const DEFAULT: &'static str = "<default>";

    /// Creates the channel slots for `registry` with the default [`Config`].
    #[must_use]
    pub fn new(registry: Arc<ProtocolRegistry>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Creates the channel slots for `registry`; every list uses `config`.
    #[must_use]
    pub fn with_config(registry: Arc<ProtocolRegistry>, config: Config) -> Self {
        let default = Slot::new(registry.default_protocol());
        let named = registry
            .iter()
            .filter_map(|(name, protocol)| name.map(|n| (n.clone(), Slot::new(protocol))))
            .collect();
        Self {
            registry,
            config,
            default,
            named,
        }
    }

    /// The type-level registry these channels were built from.
    #[inline]
    pub fn registry(&self) -> &Arc<ProtocolRegistry> {
        &self.registry
    }

    /// Dispatch settings handed to every list.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Default channel's listeners.
    pub fn listeners(&self) -> &ListenerList<P> {
        self.default.get(Self::DEFAULT, self.config)
    }

    /// Default channel's listeners, mutable.
    pub fn listeners_mut(&mut self) -> &mut ListenerList<P> {
        self.default.get_mut(Self::DEFAULT, self.config)
    }

    /// Adds a listener to the default channel.
    pub fn add_listener(&mut self, listener: Arc<dyn Listener<P>>) {
        self.listeners_mut().add(listener);
    }

    /// Default channel's declared signals.
    pub fn signals(&self) -> &[Signal] {
        self.listeners().signals()
    }

    /// Notifies the default channel's listeners.
    ///
    /// # Errors
    /// See [`ListenerList::notify`].
    pub fn notify(&self, signal: impl AsRef<str>, payload: &P) -> Result<usize, NotifyError> {
        self.listeners().notify(signal, payload)
    }

    /// Listeners of the named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    pub fn channel_listeners(&self, name: &str) -> Result<&ListenerList<P>, RegistryError> {
        let slot = self.named.get(name).ok_or_else(|| unknown(name))?;
        Ok(slot.get(name, self.config))
    }

    /// Listeners of the named channel, mutable.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    pub fn channel_listeners_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut ListenerList<P>, RegistryError> {
        let config = self.config;
        let slot = self.named.get_mut(name).ok_or_else(|| unknown(name))?;
        Ok(slot.get_mut(name, config))
    }

    /// Adds a listener to the named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    pub fn add_channel_listener(
        &mut self,
        name: &str,
        listener: Arc<dyn Listener<P>>,
    ) -> Result<(), RegistryError> {
        self.channel_listeners_mut(name)?.add(listener);
        Ok(())
    }

    /// Declared signals of the named channel.
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the channel was never declared.
    pub fn channel_signals(&self, name: &str) -> Result<&[Signal], RegistryError> {
        Ok(self.channel_listeners(name)?.signals())
    }

    /// True if the channel's list has been built (`None` is the default channel).
    ///
    /// Unknown channels report `false`.
    pub fn is_initialized(&self, channel: Option<&str>) -> bool {
        match channel {
            None => self.default.is_initialized(),
            Some(name) => self.named.get(name).is_some_and(Slot::is_initialized),
        }
    }
}

fn unknown(name: &str) -> RegistryError {
    RegistryError::UnknownChannel {
        name: name.to_owned(),
    }
}

impl<P: ?Sized + 'static> fmt::Debug for Channels<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Channels");
        s.field("default", &self.default.list.get());
        for (name, slot) in &self.named {
            s.field(name.as_str(), &slot.list.get());
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::Handlers;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> Arc<ProtocolRegistry> {
        ProtocolRegistry::builder()
            .signals(|p| {
                p.send_out("tick");
            })
            .channel("record", |p| {
                p.send_out("added").send_out("removed");
            })
            .build()
            .unwrap()
    }

    fn counter(signal: &'static str, hits: &Arc<AtomicUsize>) -> Arc<dyn Listener<u32>> {
        let hits = Arc::clone(hits);
        Arc::new(Handlers::<u32>::new("counter").on(signal, move |_: &u32| {
            hits.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }))
    }

    #[test]
    fn test_lists_are_built_on_first_access_only() {
        let c: Channels<u32> = Channels::new(registry());
        assert!(!c.is_initialized(None));
        assert!(!c.is_initialized(Some("record")));

        let first: *const ListenerList<u32> = c.listeners();
        let second: *const ListenerList<u32> = c.listeners();
        assert!(std::ptr::eq(first, second));
        assert!(c.is_initialized(None));
        assert!(!c.is_initialized(Some("record")));
    }

    #[test]
    fn test_write_access_initializes_too() {
        let mut c: Channels<u32> = Channels::new(registry());
        let hits = Arc::new(AtomicUsize::new(0));
        c.add_channel_listener("record", counter("added", &hits))
            .unwrap();
        assert!(c.is_initialized(Some("record")));
        assert_eq!(c.channel_listeners("record").unwrap().len(), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut c: Channels<u32> = Channels::new(registry());
        let default_hits = Arc::new(AtomicUsize::new(0));
        let record_hits = Arc::new(AtomicUsize::new(0));
        c.add_listener(counter("tick", &default_hits));
        c.add_channel_listener("record", counter("added", &record_hits))
            .unwrap();

        assert_eq!(c.notify("tick", &1), Ok(1));
        assert_eq!(
            c.channel_listeners("record").unwrap().notify("added", &1),
            Ok(1)
        );
        assert_eq!(default_hits.load(Ordering::Relaxed), 1);
        assert_eq!(record_hits.load(Ordering::Relaxed), 1);

        assert_eq!(c.listeners().len(), 1);
        assert_eq!(c.channel_listeners("record").unwrap().len(), 1);
        assert!(c.notify("added", &1).is_err());
    }

    #[test]
    fn test_signals_per_channel() {
        let c: Channels<u32> = Channels::new(registry());
        assert_eq!(c.signals(), ["tick"]);
        assert_eq!(c.channel_signals("record").unwrap(), ["added", "removed"]);
    }

    #[test]
    fn test_unknown_channel() {
        let mut c: Channels<u32> = Channels::new(registry());
        let expected = RegistryError::UnknownChannel {
            name: "missing".into(),
        };
        assert_eq!(c.channel_signals("missing").unwrap_err(), expected);
        assert_eq!(
            c.add_channel_listener("missing", Arc::new(Handlers::<u32>::new("h")))
                .unwrap_err(),
            expected
        );
        assert!(!c.is_initialized(Some("missing")));
    }

    #[test]
    fn test_config_reaches_lazy_lists() {
        let c: Channels<u32> = Channels::with_config(registry(), Config::isolating());
        assert_eq!(c.listeners().config(), Config::isolating());
        assert_eq!(
            c.channel_listeners("record").unwrap().config(),
            Config::isolating()
        );
    }

    #[test]
    fn test_instances_do_not_share_lists() {
        let shared = registry();
        let mut a: Channels<u32> = Channels::new(Arc::clone(&shared));
        let b: Channels<u32> = Channels::new(shared);
        let hits = Arc::new(AtomicUsize::new(0));
        a.add_listener(counter("tick", &hits));

        assert_eq!(a.listeners().len(), 1);
        assert!(b.listeners().is_empty());
        assert!(Arc::ptr_eq(a.listeners().protocol(), b.listeners().protocol()));
    }
}
