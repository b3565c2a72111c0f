use std::sync::Arc;

use crate::error::RegistryError;
use crate::protocol::Protocol;

use super::ProtocolRegistry;

/// Builder for a [`ProtocolRegistry`] with fluent API.
///
/// The first declaration error is kept and reported by [`build`](Self::build);
/// later declarations are still applied.
///
/// # Example
/// ```
/// use eavesdrop::ProtocolRegistry;
///
/// let base = ProtocolRegistry::builder()
///     .channel("record", |p| { p.send_out("added").send_out("removed"); })
///     .build()
///     .unwrap();
///
/// let derived = ProtocolRegistry::builder()
///     .inherit(&base)
///     .channel("record", |p| { p.send_out("cleared"); })
///     .build()
///     .unwrap();
///
/// assert_eq!(base.protocol(Some("record")).unwrap().len(), 2);
/// assert_eq!(derived.protocol(Some("record")).unwrap().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: ProtocolRegistry,
    error: Option<RegistryError>,
}

impl RegistryBuilder {
    /// Creates a builder over an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a copy of `parent` (see [`ProtocolRegistry::inherit`]).
    ///
    /// Replaces anything declared on this builder so far, including a
    /// pending declaration error.
    pub fn inherit(mut self, parent: &ProtocolRegistry) -> Self {
        self.registry = parent.inherit();
        self.error = None;
        self
    }

    /// Declares signals on the default channel.
    pub fn signals(mut self, block: impl FnOnce(&mut Protocol)) -> Self {
        self.registry.declare_default(block);
        self
    }

    /// Declares signals on a named channel.
    pub fn channel(mut self, name: &str, block: impl FnOnce(&mut Protocol)) -> Self {
        if let Err(err) = self.registry.declare(Some(name), block) {
            self.error.get_or_insert(err);
        }
        self
    }

    /// Finishes the registry.
    ///
    /// # Errors
    /// The first error met while declaring channels.
    pub fn build(self) -> Result<Arc<ProtocolRegistry>, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.registry.into_shared()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let err = RegistryBuilder::new()
            .channel("bad name", |_| {})
            .channel("", |_| {})
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidChannelName {
                name: "bad name".into()
            }
        );
    }

    #[test]
    fn test_inherit_then_extend() {
        let base = ProtocolRegistry::builder()
            .signals(|p| {
                p.send_out("x");
            })
            .build()
            .unwrap();
        let derived = ProtocolRegistry::builder()
            .inherit(&base)
            .signals(|p| {
                p.send_out("y");
            })
            .build()
            .unwrap();

        assert_eq!(base.default_protocol().signals(), ["x"]);
        assert_eq!(derived.default_protocol().signals(), ["x", "y"]);
    }

    #[test]
    fn test_inherit_discards_earlier_declarations_and_errors() {
        let base = ProtocolRegistry::builder()
            .channel("record", |p| {
                p.send_out("added");
            })
            .build()
            .unwrap();
        let derived = ProtocolRegistry::builder()
            .channel("bad name", |_| {})
            .channel("scratch", |p| {
                p.send_out("tmp");
            })
            .inherit(&base)
            .build()
            .unwrap();

        assert!(!derived.contains_channel("scratch"));
        assert_eq!(derived.protocol(Some("record")).unwrap().signals(), ["added"]);
    }

    #[test]
    fn test_errors_after_inherit_are_reported() {
        let base = ProtocolRegistry::new();
        let err = ProtocolRegistry::builder()
            .inherit(&base)
            .channel("bad name", |_| {})
            .build()
            .unwrap_err();
        assert_eq!(err.as_label(), "invalid_channel_name");
    }
}
