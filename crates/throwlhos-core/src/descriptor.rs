use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status identifier carried by descriptors built with a caller-chosen code
pub const CUSTOM_ERROR: &str = "CUSTOM_ERROR";

/// Uniform error record produced by every thrower
///
/// `errors` and `i18n` are left out of the serialized form when absent, so a
/// descriptor built without them never emits `null` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{status} ({code}): {message}")]
pub struct ErrorDescriptor {
    /// Numeric code, an HTTP status for catalog throwers
    pub code: i64,
    /// Canonical status name (`NOT_FOUND`) or [`CUSTOM_ERROR`]
    pub status: String,
    /// Human readable message
    pub message: String,
    /// Structured payload passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    /// Localization directive for an external translator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nMessage>,
}

impl ErrorDescriptor {
    /// Build a descriptor with a caller-chosen code
    ///
    /// The code is not checked against any HTTP range.
    pub fn custom(message: impl Into<String>, code: i64, errors: Option<Value>, i18n: Option<I18nMessage>) -> Self {
        Self {
            code,
            status: CUSTOM_ERROR.to_owned(),
            message: message.into(),
            errors,
            i18n,
        }
    }

    /// Whether this descriptor was built by the generic constructor
    pub fn is_custom(&self) -> bool {
        self.status == CUSTOM_ERROR
    }
}

/// Opaque localization directive
///
/// Threaded through untouched. Resolving `key` against a message catalog is
/// left to whoever emits the final response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nMessage {
    /// Message catalog key
    pub key: String,
    /// Interpolation values for the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
}

impl I18nMessage {
    /// Directive with a key and no options
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            options: None,
        }
    }

    /// Attach interpolation options
    #[must_use]
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = Some(options);
        self
    }
}
