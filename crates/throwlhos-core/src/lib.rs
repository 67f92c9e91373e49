//! Error descriptors for HTTP statuses
//!
//! Builds uniform `{code, status, message, errors?, i18n?}` records from a
//! compile-time status catalog. Every 3xx/4xx/5xx status gets a thrower,
//! reachable statically through [`ErrorFactory`] methods or by derived name
//! (`err_notFound`) through the [`ThrowerTable`].

#![allow(clippy::must_use_candidate)]

mod catalog;
mod descriptor;
mod error;
mod factory;
mod thrower;

pub use catalog::{HttpStatus, StatusEntry};
pub use descriptor::{CUSTOM_ERROR, ErrorDescriptor, I18nMessage};
pub use error::{CatalogError, HttpError};
pub use factory::ErrorFactory;
pub use thrower::{Thrower, ThrowerTable, camel_case, thrower_name};
