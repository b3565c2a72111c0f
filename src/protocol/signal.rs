//! # Signal identifiers.
//!
//! A [`Signal`] names one kind of event a host can emit. It wraps a
//! `Cow<'static, str>` so literal names cost nothing and runtime names
//! (e.g. built by a [`SignalMap`](crate::SignalMap) prefix) are still cheap to hold.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Immutable signal name.
///
/// Signals compare, hash and order by their string value and can be looked up
/// by `&str` in maps and protocols.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signal(Cow<'static, str>);

impl Signal {
    /// Creates a signal from a static or owned name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the signal name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Signal {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Signal {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&Signal> for Signal {
    fn from(signal: &Signal) -> Self {
        signal.clone()
    }
}

impl AsRef<str> for Signal {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Signal {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Signal {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Signal {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
