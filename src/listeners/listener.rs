//! # Listener trait.
//!
//! Provides [`Listener`], the extension point for receiving signals from a
//! [`ListenerList`](crate::ListenerList).
//!
//! A listener is matched to signals by capability:
//! - [`Listener::responds_to`] says whether it handles a given signal;
//! - [`Listener::on_signal`] handles it.
//!
//! ## Rules
//! - Listeners that do not respond to a signal are skipped silently.
//! - Handlers run synchronously on the notifying thread, in registration order.
//! - A handler error is reported back to the caller of `notify`
//!   (see [`DeliveryPolicy`](crate::DeliveryPolicy) for what happens to the rest).
//!
//! ## Example
//! ```rust
//! use eavesdrop::{Listener, ListenerError, Signal};
//!
//! struct Waiter;
//!
//! impl Listener<()> for Waiter {
//!     fn on_signal(&self, signal: &Signal, _: &()) -> Result<(), ListenerError> {
//!         match signal.as_str() {
//!             "boiling" => println!("kettle is boiling"),
//!             "full" => println!("kettle is full"),
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//!
//!     fn responds_to(&self, signal: &Signal) -> bool {
//!         matches!(signal.as_str(), "boiling" | "full")
//!     }
//!
//!     fn name(&self) -> &'static str { "waiter" }
//! }
//! ```

use crate::error::ListenerError;
use crate::protocol::Signal;

/// Receiver of signals carrying a payload of type `P`.
///
/// ### Implementation requirements
/// - Keep handlers short; they block the notifier.
/// - Use interior mutability (atomics, `Mutex`) for state; handlers take `&self`.
pub trait Listener<P: ?Sized>: Send + Sync + 'static {
    /// Handles one signal.
    ///
    /// Only called when [`responds_to`](Self::responds_to) returned `true` for `signal`.
    fn on_signal(&self, signal: &Signal, payload: &P) -> Result<(), ListenerError>;

    /// Returns whether this listener handles `signal`.
    ///
    /// Default: every signal.
    fn responds_to(&self, signal: &Signal) -> bool {
        let _ = signal;
        true
    }

    /// Returns the listener name used in logs and errors.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
