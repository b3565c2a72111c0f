//! Error types used by protocols, listener lists and hosts.
//!
//! This module defines three error enums:
//!
//! - [`ListenerError`] — raised by an individual listener's handler.
//! - [`NotifyError`] — raised by [`ListenerList::notify`](crate::ListenerList::notify).
//! - [`RegistryError`] — raised when declaring or looking up channels.
//!
//! All of them provide `as_label` (stable snake_case label for logs).

use thiserror::Error;

use crate::protocol::Signal;

/// # Errors produced by listener handlers.
///
/// Handlers return these to report that they could not process a signal.
/// What happens next depends on the list's [`DeliveryPolicy`](crate::DeliveryPolicy).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// Handler failed while processing the signal.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
        }
    }
}

/// One failed handler invocation collected under [`DeliveryPolicy::Isolate`](crate::DeliveryPolicy::Isolate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Name reported by the failing listener.
    pub listener: &'static str,
    /// Position of the listener in its list.
    pub index: usize,
    /// The error it returned.
    pub error: ListenerError,
}

/// # Errors produced by notification.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The signal is not declared by the list's protocol. No listener was invoked.
    #[error("unknown signal `{signal}`")]
    UnknownSignal {
        /// The offending signal name.
        signal: String,
    },

    /// A handler failed and delivery stopped there.
    #[error("listener `{listener}` failed on `{signal}`: {source}")]
    Listener {
        /// Name reported by the failing listener.
        listener: &'static str,
        /// The signal being delivered.
        signal: Signal,
        /// The handler's error.
        #[source]
        source: ListenerError,
    },

    /// One or more handlers failed; every responding listener was still invoked.
    #[error("{count} listener(s) failed on `{signal}`", count = .failures.len())]
    Listeners {
        /// The signal being delivered.
        signal: Signal,
        /// Failures in invocation order.
        failures: Vec<ListenerFailure>,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use eavesdrop::NotifyError;
    ///
    /// let err = NotifyError::UnknownSignal { signal: "unknown".into() };
    /// assert_eq!(err.as_label(), "unknown_signal");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::UnknownSignal { .. } => "unknown_signal",
            NotifyError::Listener { .. } => "listener_failed",
            NotifyError::Listeners { .. } => "listeners_failed",
        }
    }

    /// True if the error comes from handler code rather than from the caller.
    pub fn is_listener_failure(&self) -> bool {
        matches!(
            self,
            NotifyError::Listener { .. } | NotifyError::Listeners { .. }
        )
    }
}

/// # Errors produced by channel declaration and lookup.
///
/// Both variants point at a programming error in the host type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Channel names must be identifiers: non-empty, ASCII alphanumeric or `_`,
    /// not starting with a digit.
    #[error("invalid channel name {name:?}")]
    InvalidChannelName {
        /// The rejected name.
        name: String,
    },

    /// The channel was never declared on this registry.
    #[error("unknown channel `{name}`")]
    UnknownChannel {
        /// The requested name.
        name: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::InvalidChannelName { .. } => "invalid_channel_name",
            RegistryError::UnknownChannel { .. } => "unknown_channel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = NotifyError::UnknownSignal {
            signal: "unknown".into(),
        };
        assert_eq!(err.to_string(), "unknown signal `unknown`");

        let err = NotifyError::Listener {
            listener: "waiter",
            signal: Signal::from("full"),
            source: ListenerError::fail("spilled"),
        };
        assert_eq!(
            err.to_string(),
            "listener `waiter` failed on `full`: handler failed: spilled"
        );

        let err = NotifyError::Listeners {
            signal: Signal::from("full"),
            failures: vec![
                ListenerFailure {
                    listener: "a",
                    index: 0,
                    error: ListenerError::fail("x"),
                },
                ListenerFailure {
                    listener: "b",
                    index: 2,
                    error: ListenerError::fail("y"),
                },
            ],
        };
        assert_eq!(err.to_string(), "2 listener(s) failed on `full`");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ListenerError::fail("x").as_label(), "listener_failed");
        assert_eq!(
            RegistryError::UnknownChannel { name: "r".into() }.as_label(),
            "unknown_channel"
        );
        assert_eq!(
            RegistryError::InvalidChannelName { name: "".into() }.as_label(),
            "invalid_channel_name"
        );
    }

    #[test]
    fn test_listener_failure_classification() {
        assert!(
            !NotifyError::UnknownSignal {
                signal: "x".into()
            }
            .is_listener_failure()
        );
        assert!(
            NotifyError::Listener {
                listener: "l",
                signal: Signal::from("x"),
                source: ListenerError::fail("boom"),
            }
            .is_listener_failure()
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = NotifyError::Listener {
            listener: "l",
            signal: Signal::from("x"),
            source: ListenerError::fail("boom"),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("handler failed: boom"));
    }
}
