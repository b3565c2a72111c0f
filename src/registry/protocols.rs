//! # Per-type protocol registry.
//!
//! A [`ProtocolRegistry`] holds the protocols a host type declares: one for the
//! default channel and one per named channel.
//!
//! ## Inheritance
//! ```text
//! Base registry:     default=[x]        record=[added]
//!        │ inherit()  (every protocol copied)
//!        ▼
//! Derived registry:  default=[x] + [y]  record=[added]
//!
//! Base still sees default=[x].
//! ```
//!
//! Declarations go through `Arc::make_mut`, so a protocol already handed out to
//! a [`ListenerList`](crate::ListenerList) is never changed in place.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::RegistryError;
use crate::protocol::Protocol;

use super::{ChannelName, RegistryBuilder};

/// Protocols of one host type, keyed by channel.
#[derive(Clone, Debug, Default)]
pub struct ProtocolRegistry {
    default: Arc<Protocol>,
    channels: BTreeMap<ChannelName, Arc<Protocol>>,
}

impl ProtocolRegistry {
    /// Registry with an empty default channel and no named channels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for declaring channels with a fluent API.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Copy of this registry for a derived type.
    ///
    /// Every protocol is cloned, so later declarations on either registry
    /// stay local to it.
    #[must_use]
    pub fn inherit(&self) -> Self {
        debug!(
            channels = self.channels.len(),
            default = %self.default,
            "inheriting protocol registry"
        );
        Self {
            default: Arc::new(Protocol::clone(&self.default)),
            channels: self
                .channels
                .iter()
                .map(|(name, protocol)| (name.clone(), Arc::new(Protocol::clone(protocol))))
                .collect(),
        }
    }

    /// Declares signals on a channel (`None` is the default channel).
    ///
    /// The block runs against an empty protocol whose signals are then merged
    /// into the channel's protocol; a named channel is created on first use.
    /// Repeated declarations accumulate.
    ///
    /// # Errors
    /// [`RegistryError::InvalidChannelName`] if the name is not an identifier.
    pub fn declare(
        &mut self,
        channel: Option<&str>,
        block: impl FnOnce(&mut Protocol),
    ) -> Result<&Protocol, RegistryError> {
        let addition = Protocol::with(block);
        let slot = match channel {
            None => &mut self.default,
            Some(name) => {
                let name = ChannelName::new(name.to_owned())?;
                self.channels.entry(name).or_default()
            }
        };
        Arc::make_mut(slot).merge_from(&addition);
        debug!(
            channel = channel.unwrap_or("<default>"),
            declared = %addition,
            signals = %slot,
            "declared signals"
        );
        Ok(&**slot)
    }

    /// Declares signals on the default channel.
    pub fn declare_default(&mut self, block: impl FnOnce(&mut Protocol)) -> &Protocol {
        let addition = Protocol::with(block);
        Arc::make_mut(&mut self.default).merge_from(&addition);
        debug!(declared = %addition, signals = %self.default, "declared default signals");
        &self.default
    }

    /// Protocol of a channel (`None` is the default channel).
    ///
    /// # Errors
    /// [`RegistryError::UnknownChannel`] if the named channel was never declared.
    pub fn protocol(&self, channel: Option<&str>) -> Result<&Arc<Protocol>, RegistryError> {
        match channel {
            None => Ok(&self.default),
            Some(name) => self
                .channels
                .get(name)
                .ok_or_else(|| RegistryError::UnknownChannel {
                    name: name.to_owned(),
                }),
        }
    }

    /// Protocol of the default channel.
    #[inline]
    pub fn default_protocol(&self) -> &Arc<Protocol> {
        &self.default
    }

    /// True if the named channel was declared.
    pub fn contains_channel(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Declared named channels, sorted.
    pub fn channel_names(&self) -> impl Iterator<Item = &ChannelName> {
        self.channels.keys()
    }

    /// All channels, default first, then named channels sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&ChannelName>, &Arc<Protocol>)> {
        std::iter::once((None, &self.default)).chain(
            self.channels
                .iter()
                .map(|(name, protocol)| (Some(name), protocol)),
        )
    }

    /// Freezes the registry for sharing between host instances.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
