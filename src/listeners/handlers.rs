//! # Handlers: listeners built from closures.
//!
//! [`Handlers`] records, at construction time, which signals it opts into.
//! It responds exactly to those signals and routes each one to its closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eavesdrop::{Handlers, ListenerList, Protocol};
//!
//! let protocol = Arc::new(Protocol::from_signals(["added", "removed"]));
//! let mut list: ListenerList<str> = ListenerList::new(protocol);
//!
//! list.add(Arc::new(
//!     Handlers::<str>::new("printer").on("added", |item: &str| {
//!         println!("added {item}");
//!         Ok(())
//!     }),
//! ));
//!
//! assert_eq!(list.notify("added", "apple"), Ok(1));
//! assert_eq!(list.notify("removed", "apple"), Ok(0));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ListenerError;
use crate::protocol::Signal;

use super::Listener;

type Handler<P> = Box<dyn Fn(&P) -> Result<(), ListenerError> + Send + Sync>;

/// Named listener dispatching each signal to a registered closure.
pub struct Handlers<P: ?Sized> {
    name: &'static str,
    handlers: BTreeMap<Signal, Handler<P>>,
}

impl<P: ?Sized + 'static> Handlers<P> {
    /// Creates a listener with no handlers.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: BTreeMap::new(),
        }
    }

    /// Registers `f` for `signal`, replacing any earlier handler for it.
    #[must_use]
    pub fn on<F>(mut self, signal: impl Into<Signal>, f: F) -> Self
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.handlers.insert(signal.into(), Box::new(f));
        self
    }

    /// Signals this listener opted into, sorted by name.
    pub fn signals(&self) -> impl Iterator<Item = &Signal> {
        self.handlers.keys()
    }
}

impl<P: ?Sized + 'static> Listener<P> for Handlers<P> {
    fn on_signal(&self, signal: &Signal, payload: &P) -> Result<(), ListenerError> {
        match self.handlers.get(signal.as_str()) {
            Some(handler) => handler(payload),
            None => Ok(()),
        }
    }

    fn responds_to(&self, signal: &Signal) -> bool {
        self.handlers.contains_key(signal.as_str())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: ?Sized> fmt::Debug for Handlers<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("name", &self.name)
            .field("signals", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_responds_only_to_registered_signals() {
        let h: Handlers<()> = Handlers::new("h").on("a", |_| Ok(()));
        assert!(h.responds_to(&Signal::from("a")));
        assert!(!h.responds_to(&Signal::from("b")));
        assert_eq!(h.name(), "h");
    }

    #[test]
    fn test_routes_payload_to_closure() {
        let total = Arc::new(AtomicU32::new(0));
        let t = Arc::clone(&total);
        let h: Handlers<u32> = Handlers::new("adder").on("add", move |n: &u32| {
            t.fetch_add(*n, Ordering::Relaxed);
            Ok(())
        });

        h.on_signal(&Signal::from("add"), &4).unwrap();
        h.on_signal(&Signal::from("add"), &6).unwrap();
        assert_eq!(total.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        let h: Handlers<()> = Handlers::new("h")
            .on("a", |_| Err(ListenerError::fail("old")))
            .on("a", |_| Ok(()));
        assert_eq!(h.signals().count(), 1);
        assert!(h.on_signal(&Signal::from("a"), &()).is_ok());
    }

    #[test]
    fn test_errors_are_returned() {
        let h: Handlers<()> = Handlers::new("h").on("a", |_| Err(ListenerError::fail("nope")));
        assert_eq!(
            h.on_signal(&Signal::from("a"), &()),
            Err(ListenerError::fail("nope"))
        );
    }
}
