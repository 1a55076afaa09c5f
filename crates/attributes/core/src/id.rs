//! Namespaced attribute identifiers.
//!
//! Identifiers follow the host registry convention `namespace:path`. A bare
//! path resolves against the default namespace, so `water_speed` and
//! `additionalentityattributes:water_speed` name the same attribute.

use core::fmt;
use core::str::FromStr;

use crate::error::AttributeError;

/// Namespace of every built-in attribute.
pub const DEFAULT_NAMESPACE: &str = "additionalentityattributes";

/// Stable identifier of an attribute kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct AttributeId {
    namespace: String,
    path: String,
}

impl AttributeId {
    /// Creates an identifier after validating both halves.
    pub fn new(namespace: &str, path: &str) -> Result<Self, AttributeError> {
        let raw = || format!("{namespace}:{path}");
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(AttributeError::InvalidIdentifier {
                raw: raw(),
                reason: "namespace must be non-empty and use [a-z0-9_.-]",
            });
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(AttributeError::InvalidIdentifier {
                raw: raw(),
                reason: "path must be non-empty and use [a-z0-9_.-/]",
            });
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Identifier in [`DEFAULT_NAMESPACE`] for a known-good path.
    pub fn builtin(path: &str) -> Self {
        debug_assert!(!path.is_empty() && path.chars().all(is_path_char));
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            path: path.to_owned(),
        }
    }

    /// Parses `namespace:path`, falling back to `default_namespace` for bare paths.
    pub fn parse_with_default(raw: &str, default_namespace: &str) -> Result<Self, AttributeError> {
        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(default_namespace, raw),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Host translation key, e.g. `attribute.name.generic.additionalentityattributes.max_air`.
    pub fn translation_key(&self) -> String {
        format!("attribute.name.generic.{}.{}", self.namespace, self.path)
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Bare paths land in [`DEFAULT_NAMESPACE`]. Use
/// [`AttributeCatalog::lookup_str`](crate::AttributeCatalog::lookup_str) or
/// [`AttributeId::parse_with_default`] to resolve them against a catalog's own
/// namespace.
impl FromStr for AttributeId {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_default(s, DEFAULT_NAMESPACE)
    }
}

impl TryFrom<String> for AttributeId {
    type Error = AttributeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttributeId> for String {
    fn from(id: AttributeId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_path_uses_default_namespace() {
        let id: AttributeId = "water_speed".parse().unwrap();
        assert_eq!(id, AttributeId::builtin("water_speed"));
        assert_eq!(id.to_string(), "additionalentityattributes:water_speed");
    }

    #[test]
    fn explicit_namespace_is_kept() {
        let id: AttributeId = "othermod:generic.dig_speed".parse().unwrap();
        assert_eq!(id.namespace(), "othermod");
        assert_eq!(id.path(), "generic.dig_speed");
    }

    #[test]
    fn rejects_uppercase_and_empty_halves() {
        assert!("Mod:speed".parse::<AttributeId>().is_err());
        assert!(":speed".parse::<AttributeId>().is_err());
        assert!("mod:".parse::<AttributeId>().is_err());
        assert!("mod:a:b".parse::<AttributeId>().is_err());
    }

    #[test]
    fn translation_key_matches_host_format() {
        assert_eq!(
            AttributeId::builtin("magic_protection").translation_key(),
            "attribute.name.generic.additionalentityattributes.magic_protection"
        );
    }
}
