//! # LogListener — simple signal logger
//!
//! A minimal listener that logs every signal it receives through `tracing`.
//! Use it for tests or demos.
//!
//! ## Example output (with a `fmt` subscriber)
//! ```text
//! INFO eavesdrop: signal signal=boiling payload=()
//! INFO eavesdrop: signal signal=added payload="apple"
//! ```

use std::fmt;

use crate::error::ListenerError;
use crate::listeners::Listener;
use crate::protocol::Signal;

/// Signal logging listener.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogListener;

impl LogListener {
    /// Construct a new [`LogListener`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<P: ?Sized + fmt::Debug> Listener<P> for LogListener {
    fn on_signal(&self, signal: &Signal, payload: &P) -> Result<(), ListenerError> {
        tracing::info!(target: "eavesdrop", %signal, ?payload, "signal");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogListener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responds_to_everything() {
        let l = LogListener::new();
        assert!(Listener::<str>::responds_to(&l, &Signal::from("anything")));
        assert_eq!(Listener::<u8>::on_signal(&l, &Signal::from("x"), &1), Ok(()));
        assert_eq!(Listener::<u8>::name(&l), "LogListener");
    }
}
