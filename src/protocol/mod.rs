//! Signals and the protocols that group them.
//!
//! ## Contents
//! - [`Signal`]   a single event name
//! - [`Protocol`] the ordered, de-duplicated set of signals one channel may emit

mod set;
mod signal;

pub use set::Protocol;
pub use signal::Signal;
