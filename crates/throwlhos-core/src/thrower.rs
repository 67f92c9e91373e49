use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::Value;

use crate::{CatalogError, ErrorDescriptor, HttpStatus, I18nMessage, StatusEntry};

/// Prefix shared by every thrower name
const THROWER_PREFIX: &str = "err_";

/// Constructor bound to one catalog entry
///
/// Stateless and `Copy`; calling it never fails and has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thrower {
    entry: StatusEntry,
}

impl Thrower {
    pub(crate) const fn new(entry: StatusEntry) -> Self {
        Self { entry }
    }

    /// Catalog row this thrower is bound to
    pub const fn entry(&self) -> StatusEntry {
        self.entry
    }

    /// Derived thrower name (`err_notFound`)
    pub fn name(&self) -> String {
        thrower_name(self.entry.name)
    }

    /// Build the descriptor for this status
    ///
    /// A missing `message` falls back to the entry's default text. `errors`
    /// and `i18n` are stored as given.
    pub fn call(&self, message: Option<&str>, errors: Option<Value>, i18n: Option<I18nMessage>) -> ErrorDescriptor {
        ErrorDescriptor {
            code: i64::from(self.entry.code),
            status: self.entry.name.to_owned(),
            message: message.unwrap_or(self.entry.default_text).to_owned(),
            errors,
            i18n,
        }
    }
}

/// Convert a SCREAMING_SNAKE status name to camel case
///
/// Lower-cases the name, then every `_x` pair (where `x` is a word
/// character) becomes `X`. A trailing underscore is kept.
pub fn camel_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(&next)) if next.is_ascii_alphanumeric() || next == '_' => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

/// Thrower name for a status name (`NOT_FOUND` -> `err_notFound`)
pub fn thrower_name(status_name: &str) -> String {
    format!("{THROWER_PREFIX}{}", camel_case(status_name))
}

/// Name-indexed throwers, in catalog order
///
/// Built once at startup. Lookups are read-only and can be shared freely
/// across requests.
#[derive(Debug, Clone, Default)]
pub struct ThrowerTable {
    throwers: IndexMap<String, Thrower>,
}

impl ThrowerTable {
    /// Build the table from the built-in status catalog
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateThrower`] if two entries derive the
    /// same thrower name
    pub fn from_catalog() -> Result<Self, CatalogError> {
        Self::from_entries(HttpStatus::entries())
    }

    /// Build the table from an arbitrary list of catalog rows
    ///
    /// Rows whose code starts with `1` or `2` are skipped, as are helper rows
    /// whose name starts with `get`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateThrower`] if two retained rows derive
    /// the same thrower name
    pub fn from_entries(entries: impl IntoIterator<Item = StatusEntry>) -> Result<Self, CatalogError> {
        let mut throwers: IndexMap<String, Thrower> = IndexMap::new();

        for entry in entries {
            if entry.name.starts_with("get") || !entry.is_error() {
                continue;
            }

            match throwers.entry(thrower_name(entry.name)) {
                Entry::Occupied(existing) => {
                    return Err(CatalogError::DuplicateThrower {
                        thrower: existing.key().clone(),
                        first: existing.get().entry.name,
                        second: entry.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Thrower::new(entry));
                }
            }
        }

        tracing::debug!(throwers = throwers.len(), "thrower table built");

        Ok(Self { throwers })
    }

    /// Thrower registered under `name`
    pub fn get(&self, name: &str) -> Option<Thrower> {
        self.throwers.get(name).copied()
    }

    /// Thrower registered under `name`, as an error when missing
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownThrower`] if no thrower has that name
    pub fn require(&self, name: &str) -> Result<Thrower, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownThrower(name.to_owned()))
    }

    /// Thrower names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.throwers.keys().map(String::as_str)
    }

    /// `(name, thrower)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Thrower)> {
        self.throwers.iter().map(|(name, thrower)| (name.as_str(), *thrower))
    }

    /// Number of throwers
    pub fn len(&self) -> usize {
        self.throwers.len()
    }

    /// Whether the table has no throwers
    pub fn is_empty(&self) -> bool {
        self.throwers.is_empty()
    }
}
