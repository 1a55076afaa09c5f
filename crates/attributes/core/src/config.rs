use crate::id::DEFAULT_NAMESPACE;

/// Start-up configuration for the attribute catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeConfig {
    /// Namespace for built-in kinds and for bare identifiers.
    pub namespace: String,
    /// Register the eleven built-in kinds.
    pub register_builtins: bool,
}

impl AttributeConfig {
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            register_builtins: true,
        }
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::new()
        }
    }
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self::new()
    }
}
