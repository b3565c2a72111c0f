//! # Protocol: the closed set of signals a channel may emit.
//!
//! A [`Protocol`] keeps signals in declaration order and never stores the same
//! name twice. Declaring an existing signal again is a no-op.
//!
//! ## Declaration blocks
//! ```text
//! Protocol::with(|p| { p.send_out("boiling").send_out("full"); })
//!        │
//!        └─► block runs against an empty protocol ─► [boiling, full]
//! ```
//!
//! Cloning is structural: the clone owns its own signal vector, so extending
//! one side never shows up on the other.

use std::fmt;
use std::sync::Arc;

use crate::listeners::ListenerList;

use super::Signal;

/// Ordered, de-duplicated set of declared signals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Protocol {
    signals: Vec<Signal>,
}

impl Protocol {
    /// Creates an empty protocol.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a protocol by running a declaration block against an empty one.
    ///
    /// # Example
    /// ```
    /// use eavesdrop::Protocol;
    ///
    /// let p = Protocol::with(|p| {
    ///     p.send_out("hungry").send_out("tired");
    /// });
    /// assert_eq!(p.signals(), ["hungry", "tired"]);
    /// ```
    pub fn with(block: impl FnOnce(&mut Protocol)) -> Self {
        let mut protocol = Self::new();
        protocol.append(block);
        protocol
    }

    /// Creates a protocol from an ordered list of signals, dropping repeats.
    pub fn from_signals<I, S>(signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Signal>,
    {
        let mut protocol = Self::new();
        for signal in signals {
            protocol.declare(signal);
        }
        protocol
    }

    /// Adds `signal` unless it is already declared.
    ///
    /// Returns `true` if the signal was new.
    pub fn declare(&mut self, signal: impl Into<Signal>) -> bool {
        let signal = signal.into();
        if self.contains(signal.as_str()) {
            return false;
        }
        self.signals.push(signal);
        true
    }

    /// Chainable form of [`declare`](Self::declare) used inside declaration blocks.
    pub fn send_out(&mut self, signal: impl Into<Signal>) -> &mut Self {
        self.declare(signal);
        self
    }

    /// Alias of [`send_out`](Self::send_out), reads better from the listener side.
    pub fn listen_for(&mut self, signal: impl Into<Signal>) -> &mut Self {
        self.send_out(signal)
    }

    /// Runs a declaration block against this protocol.
    pub fn append(&mut self, block: impl FnOnce(&mut Protocol)) -> &mut Self {
        block(self);
        self
    }

    /// Appends every signal of `other` that is not declared here yet, keeping
    /// `other`'s order.
    pub fn merge_from(&mut self, other: &Protocol) -> &mut Self {
        for signal in &other.signals {
            self.declare(signal);
        }
        self
    }

    /// Declared signals in declaration order.
    #[inline]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Membership test by name.
    #[inline]
    pub fn contains(&self, signal: &str) -> bool {
        self.signals.iter().any(|s| s.as_str() == signal)
    }

    /// Iterates declared signals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Signal> {
        self.signals.iter()
    }

    /// Number of declared signals.
    #[inline]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// True if nothing has been declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Builds an empty [`ListenerList`] bound to this protocol.
    #[must_use]
    pub fn new_listener_list<P: ?Sized + 'static>(self: &Arc<Self>) -> ListenerList<P> {
        ListenerList::new(Arc::clone(self))
    }
}

impl<'a> IntoIterator for &'a Protocol {
    type Item = &'a Signal;
    type IntoIter = std::slice::Iter<'a, Signal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<Signal>> FromIterator<S> for Protocol {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_signals(iter)
    }
}

impl<S: Into<Signal>> Extend<S> for Protocol {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for signal in iter {
            self.declare(signal);
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, signal) in self.signals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(signal.as_str())?;
        }
        f.write_str("]")
    }
}
