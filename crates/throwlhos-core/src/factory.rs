use std::sync::Arc;

use serde_json::Value;

use crate::{CatalogError, ErrorDescriptor, I18nMessage, Thrower, ThrowerTable};

/// Capability handing out error descriptors
///
/// Works standalone or attached to a request. Every 3xx/4xx/5xx catalog
/// status has a method of its own (`not_found`, `internal_server_error`,
/// ...); [`ErrorFactory::thrower`] resolves the same throwers by derived name.
/// Cloning shares the underlying table.
#[derive(Debug, Clone)]
pub struct ErrorFactory {
    table: Arc<ThrowerTable>,
}

impl ErrorFactory {
    /// Factory over the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateThrower`] if the catalog derives the
    /// same thrower name twice
    pub fn new() -> Result<Self, CatalogError> {
        let table = ThrowerTable::from_catalog()?;
        Ok(Self::from_table(Arc::new(table)))
    }

    /// Factory sharing an already built table
    pub const fn from_table(table: Arc<ThrowerTable>) -> Self {
        Self { table }
    }

    /// Table backing name-based lookups
    pub fn table(&self) -> &ThrowerTable {
        &self.table
    }

    /// Thrower by derived name (`err_notFound`)
    pub fn thrower(&self, name: &str) -> Option<Thrower> {
        self.table.get(name)
    }

    /// Descriptor with a caller-chosen code and status `CUSTOM_ERROR`
    ///
    /// The code is taken as is, including values outside HTTP ranges.
    #[allow(clippy::unused_self)]
    pub fn custom(
        &self,
        message: impl Into<String>,
        code: i64,
        errors: Option<Value>,
        i18n: Option<I18nMessage>,
    ) -> ErrorDescriptor {
        ErrorDescriptor::custom(message, code, errors, i18n)
    }
}
