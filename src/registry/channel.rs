//! # Channel names and the accessor names they generate.
//!
//! Every host has a default channel with no name. Named channels partition
//! the notification surface further; their accessors carry the name as a prefix:
//!
//! | Channel  | listeners          | add listener          | signals          |
//! |----------|--------------------|-----------------------|------------------|
//! | default  | `listeners`        | `add_listener`        | `signals`        |
//! | `record` | `record_listeners` | `add_record_listener` | `record_signals` |

use std::borrow::{Borrow, Cow};
use std::fmt;

use crate::error::RegistryError;

/// Validated name of a non-default channel.
///
/// Names are identifiers (non-empty, ASCII alphanumeric or `_`, not starting
/// with a digit) so prefixed accessor names stay valid and never clash with
/// the default channel's.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelName(Cow<'static, str>);

impl ChannelName {
    /// Validates `name`.
    ///
    /// # Errors
    /// [`RegistryError::InvalidChannelName`] if `name` is not an identifier.
    ///
    /// # Example
    /// ```
    /// use eavesdrop::ChannelName;
    ///
    /// assert!(ChannelName::new("record").is_ok());
    /// assert!(ChannelName::new("").is_err());
    /// assert!(ChannelName::new("2fast").is_err());
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, RegistryError> {
        let name = name.into();
        if is_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(RegistryError::InvalidChannelName {
                name: name.into_owned(),
            })
        }
    }

    /// Returns the name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accessor names generated for this channel.
    pub fn accessors(&self) -> Accessors {
        Accessors::for_channel(Some(self.as_str()))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Borrow<str> for ChannelName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&'static str> for ChannelName {
    type Error = RegistryError;

    fn try_from(name: &'static str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for ChannelName {
    type Error = RegistryError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the per-channel accessors a host exposes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessors {
    /// `{N_}listeners`
    pub listeners: String,
    /// `add_{N_}listener`
    pub add_listener: String,
    /// `{N_}signals`
    pub signals: String,
}

impl Accessors {
    /// Accessor names of the default channel.
    pub fn default_channel() -> Self {
        Self::for_channel(None)
    }

    fn for_channel(name: Option<&str>) -> Self {
        let prefix = name.map(|n| format!("{n}_")).unwrap_or_default();
        Self {
            listeners: format!("{prefix}listeners"),
            add_listener: format!("add_{prefix}listener"),
            signals: format!("{prefix}signals"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("record")]
    #[case("_private")]
    #[case("item2")]
    #[case("Mixed_Case")]
    fn test_valid_names(#[case] name: &'static str) {
        assert_eq!(ChannelName::new(name).unwrap().as_str(), name);
    }

    #[rstest]
    #[case("")]
    #[case("2fast")]
    #[case("with space")]
    #[case("dash-ed")]
    #[case("ünïcode")]
    fn test_invalid_names(#[case] name: &'static str) {
        assert_eq!(
            ChannelName::new(name),
            Err(RegistryError::InvalidChannelName { name: name.into() })
        );
    }

    #[test]
    fn test_accessor_names() {
        assert_eq!(
            Accessors::default_channel(),
            Accessors {
                listeners: "listeners".into(),
                add_listener: "add_listener".into(),
                signals: "signals".into(),
            }
        );
        assert_eq!(
            ChannelName::new("record").unwrap().accessors(),
            Accessors {
                listeners: "record_listeners".into(),
                add_listener: "add_record_listener".into(),
                signals: "record_signals".into(),
            }
        );
    }

    #[test]
    fn test_try_from() {
        let name: ChannelName = "record".try_into().unwrap();
        assert_eq!(name.to_string(), "record");
        assert!(ChannelName::try_from(String::from("")).is_err());
    }
}
