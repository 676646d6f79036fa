//! Query-tag parser for metasearch front ends.
//!
//! Extracts an engine/category directive (`!name` or `?name`) and a language tag (`:code`)
//! from a raw search string, resolving them against read-only catalogs.

pub mod catalog;
pub mod format;
pub mod query;

pub use catalog::{Catalog, CatalogError, Engine, EngineRegistry, LanguageCatalog, LanguageCode};
pub use query::{DisabledEngine, EngineSelector, NO_CATEGORY, ParsedQuery, Query, QueryError};
