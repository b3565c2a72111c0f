//! # Signal maps: per-registration renaming of handler names.
//!
//! A listener written against its own vocabulary can be plugged into a list
//! whose protocol uses different names.
//!
//! ```text
//! protocol signal    SignalMap                 handler looked up on the listener
//!   added      ──►  rename(added, item_added) ──► item_added
//!   removed    ──►  prefix("item")            ──► item_removed
//! ```
//!
//! Explicit renames win over the prefix. The list still validates the
//! protocol's own names.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ListenerError;
use crate::protocol::Signal;

use super::Listener;

/// Renames applied to signals before they reach a listener.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignalMap {
    renames: BTreeMap<Signal, Signal>,
    prefix: Option<Cow<'static, str>>,
}

impl SignalMap {
    /// Identity map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `from` to the listener as `to`.
    #[must_use]
    pub fn rename(mut self, from: impl Into<Signal>, to: impl Into<Signal>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    /// Delivers every signal without an explicit rename as `{prefix}_{signal}`.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Name the listener sees for `signal`.
    pub fn resolve(&self, signal: &Signal) -> Signal {
        if let Some(to) = self.renames.get(signal.as_str()) {
            return to.clone();
        }
        match &self.prefix {
            Some(prefix) => Signal::from(format!("{prefix}_{signal}")),
            None => signal.clone(),
        }
    }

    /// True if the map changes nothing.
    pub fn is_identity(&self) -> bool {
        self.renames.is_empty() && self.prefix.is_none()
    }
}

/// Listener adapter applying a [`SignalMap`] before delegating.
pub struct MappedListener<P: ?Sized + 'static> {
    inner: Arc<dyn Listener<P>>,
    map: SignalMap,
}

impl<P: ?Sized + 'static> MappedListener<P> {
    /// Wraps `inner` so it sees signals renamed by `map`.
    #[must_use]
    pub fn new(inner: Arc<dyn Listener<P>>, map: SignalMap) -> Self {
        Self { inner, map }
    }

    /// The map applied to incoming signals.
    pub fn map(&self) -> &SignalMap {
        &self.map
    }
}

impl<P: ?Sized + 'static> Listener<P> for MappedListener<P> {
    fn on_signal(&self, signal: &Signal, payload: &P) -> Result<(), ListenerError> {
        self.inner.on_signal(&self.map.resolve(signal), payload)
    }

    fn responds_to(&self, signal: &Signal) -> bool {
        self.inner.responds_to(&self.map.resolve(signal))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::{Handlers, ListenerList};
    use crate::protocol::Protocol;
    use std::sync::Mutex;

    #[test]
    fn test_resolve() {
        let map = SignalMap::new().rename("added", "item_added").prefix("item");
        assert_eq!(map.resolve(&Signal::from("added")), "item_added");
        assert_eq!(map.resolve(&Signal::from("removed")), "item_removed");
        assert_eq!(SignalMap::new().resolve(&Signal::from("x")), "x");
        assert!(SignalMap::new().is_identity());
        assert!(!map.is_identity());
    }

    #[test]
    fn test_mapped_listener_receives_renamed_signals() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (a, r) = (Arc::clone(&seen), Arc::clone(&seen));
        let listener: Handlers<str> = Handlers::new("collection")
            .on("item_added", move |item: &str| {
                a.lock().unwrap().push(format!("+{item}"));
                Ok(())
            })
            .on("item_removed", move |item: &str| {
                r.lock().unwrap().push(format!("-{item}"));
                Ok(())
            });

        let mut list: ListenerList<str> =
            ListenerList::new(Arc::new(Protocol::from_signals(["added", "removed", "cleared"])));
        list.add_mapped(Arc::new(listener), SignalMap::new().prefix("item"));

        assert_eq!(list.notify("added", "pear"), Ok(1));
        assert_eq!(list.notify("removed", "pear"), Ok(1));
        assert_eq!(list.notify("cleared", ""), Ok(0));
        assert_eq!(*seen.lock().unwrap(), ["+pear", "-pear"]);

        // The mapped name is not part of the protocol.
        assert!(list.notify("item_added", "pear").is_err());
    }

    #[test]
    fn test_name_is_delegated() {
        let inner: Arc<dyn Listener<()>> = Arc::new(Handlers::<()>::new("inner"));
        let mapped = MappedListener::new(inner, SignalMap::new());
        assert_eq!(mapped.name(), "inner");
    }
}
