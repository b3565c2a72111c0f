//! # Built-in listeners
//!
//! Small, self-contained implementations useful for demos and debugging.
//!
//! - [`LogListener`]: logs every signal through `tracing` (demo/debug).

mod log;

pub use log::LogListener;
