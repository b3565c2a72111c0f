//! # Dispatch configuration.
//!
//! Provides [`Config`], the settings a [`ListenerList`](crate::ListenerList)
//! applies on every `notify`.
//!
//! Config is used in two ways:
//! 1. **Standalone lists**: `ListenerList::with_config(protocol, config)`
//! 2. **Host channels**: `Channels::with_config(registry, config)` passes it to
//!    every lazily built list.

/// How a list reacts when a listener's handler returns an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Stop at the first failing handler and return its error.
    /// Listeners after it are not notified.
    #[default]
    FailFast,
    /// Keep notifying the remaining listeners, then report every failure at once.
    Isolate,
}

/// Dispatch settings for listener lists.
///
/// ## Field semantics
/// - `delivery`: reaction to handler errors (`FailFast` unless overridden)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Reaction to handler errors.
    pub delivery: DeliveryPolicy,
}

impl Config {
    /// Config with [`DeliveryPolicy::Isolate`].
    #[must_use]
    pub fn isolating() -> Self {
        Self {
            delivery: DeliveryPolicy::Isolate,
        }
    }

    /// True if the first handler error aborts delivery.
    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        self.delivery == DeliveryPolicy::FailFast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fail_fast() {
        assert!(Config::default().is_fail_fast());
        assert!(!Config::isolating().is_fail_fast());
    }
}
