//! # ListenerList: validated, ordered fan-out over listeners
//!
//! [`ListenerList`] delivers each signal to its listeners **in insertion order**,
//! after checking the signal against the bound [`Protocol`].
//!
//! ## What it guarantees
//! - Undeclared signals fail with [`NotifyError::UnknownSignal`] before any
//!   listener runs.
//! - Listeners run in the order they were added; a listener added twice runs twice.
//! - Listeners that do not respond to the signal are skipped silently.
//!
//! ## What it does **not** guarantee
//! - No catching of panics inside handlers.
//! - No internal locking: `add` needs `&mut self`, share behind a lock if needed.
//!
//! ## Diagram
//! ```text
//!    notify(signal, &payload)
//!        │
//!        ├─ protocol.contains(signal)? ── no ──► Err(UnknownSignal)
//!        │
//!        ├──► L1.responds_to? ─► L1.on_signal(signal, payload)
//!        ├──► L2.responds_to? ─► (skipped)
//!        └──► LN.responds_to? ─► LN.on_signal(signal, payload)
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::config::{Config, DeliveryPolicy};
use crate::error::{ListenerFailure, NotifyError};
use crate::protocol::{Protocol, Signal};

use super::{Listener, MappedListener, SignalMap};

/// Ordered listeners bound to one protocol.
pub struct ListenerList<P: ?Sized + 'static> {
    protocol: Arc<Protocol>,
    listeners: Vec<Arc<dyn Listener<P>>>,
    config: Config,
}

impl<P: ?Sized + 'static> ListenerList<P> {
    /// Creates an empty list bound to `protocol` with the default [`Config`].
    #[must_use]
    pub fn new(protocol: Arc<Protocol>) -> Self {
        Self::with_config(protocol, Config::default())
    }

    /// Creates an empty list bound to `protocol`.
    #[must_use]
    pub fn with_config(protocol: Arc<Protocol>, config: Config) -> Self {
        Self {
            protocol,
            listeners: Vec::new(),
            config,
        }
    }

    /// Appends a listener. The same listener may be added more than once.
    pub fn add(&mut self, listener: Arc<dyn Listener<P>>) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    /// Appends a listener whose handlers are looked up through `map`.
    ///
    /// The signal is still validated under its declared name.
    pub fn add_mapped(&mut self, listener: Arc<dyn Listener<P>>, map: SignalMap) -> &mut Self {
        self.add(Arc::new(MappedListener::new(listener, map)))
    }

    /// Delivers `signal` with `payload` to every responding listener.
    ///
    /// Returns how many listeners handled the signal.
    ///
    /// # Errors
    /// - [`NotifyError::UnknownSignal`] if the protocol does not declare `signal`.
    /// - [`NotifyError::Listener`] if a handler failed under [`DeliveryPolicy::FailFast`];
    ///   later listeners were not notified.
    /// - [`NotifyError::Listeners`] if handlers failed under [`DeliveryPolicy::Isolate`].
    pub fn notify(&self, signal: impl AsRef<str>, payload: &P) -> Result<usize, NotifyError> {
        let name = signal.as_ref();
        let Some(signal) = self.protocol.iter().find(|s| s.as_str() == name) else {
            return Err(NotifyError::UnknownSignal {
                signal: name.to_owned(),
            });
        };
        trace!(%signal, listeners = self.listeners.len(), "notify");

        let mut handled = 0;
        let mut failures = Vec::new();
        for (index, listener) in self.listeners.iter().enumerate() {
            if !listener.responds_to(signal) {
                trace!(%signal, listener = listener.name(), "skipped");
                continue;
            }
            match listener.on_signal(signal, payload) {
                Ok(()) => handled += 1,
                Err(error) => {
                    warn!(
                        %signal,
                        listener = listener.name(),
                        label = error.as_label(),
                        %error,
                        "listener failed"
                    );
                    match self.config.delivery {
                        DeliveryPolicy::FailFast => {
                            return Err(NotifyError::Listener {
                                listener: listener.name(),
                                signal: signal.clone(),
                                source: error,
                            });
                        }
                        DeliveryPolicy::Isolate => failures.push(ListenerFailure {
                            listener: listener.name(),
                            index,
                            error,
                        }),
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(handled)
        } else {
            Err(NotifyError::Listeners {
                signal: signal.clone(),
                failures,
            })
        }
    }

    /// True if the bound protocol declares `signal`.
    #[inline]
    pub fn valid_signal(&self, signal: &str) -> bool {
        self.protocol.contains(signal)
    }

    /// Declared signals of the bound protocol.
    #[inline]
    pub fn signals(&self) -> &[Signal] {
        self.protocol.signals()
    }

    /// The bound protocol.
    #[inline]
    pub fn protocol(&self) -> &Arc<Protocol> {
        &self.protocol
    }

    /// Dispatch settings.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Listeners in notification order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Listener<P>>> {
        self.listeners.iter()
    }

    /// Number of listeners (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if no listener has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<P: ?Sized + 'static> Clone for ListenerList<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
            listeners: self.listeners.clone(),
            config: self.config,
        }
    }
}

impl<P: ?Sized + 'static> fmt::Debug for ListenerList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("protocol", &self.protocol.signals())
            .field(
                "listeners",
                &self.listeners.iter().map(|l| l.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}
