//! Query-tag parsing: extracts `!engine` / `?category` directives and `:language` tags
//! from a raw search string and reassembles the remaining search terms.

pub mod tag;

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, EngineRegistry, LanguageCatalog};
use tag::Tag;

/// Category of an engine selected directly by name or shortcut.
pub const NO_CATEGORY: &str = "none";

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid disabled engine: expected 'engine:category', got '{0}'")]
    InvalidDisabledEngine(String),
}

/// One engine to query, under the category it was selected through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EngineSelector {
    pub category: String,
    pub name: String,
}

impl EngineSelector {
    pub fn new(category: &str, name: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    fn direct(name: &str) -> Self {
        Self::new(NO_CATEGORY, name)
    }
}

/// An engine excluded from category-wide selection for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisabledEngine {
    pub name: String,
    pub category: String,
}

impl DisabledEngine {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// Parses `"engine:category"`. Engine names may contain spaces; the category may not contain `:`.
impl FromStr for DisabledEngine {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((name, category)) if !name.trim().is_empty() && !category.trim().is_empty() => {
                Ok(Self::new(name.trim(), category.trim()))
            }
            _ => Err(QueryError::InvalidDisabledEngine(s.to_string())),
        }
    }
}

/// Serializable snapshot of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub raw: String,
    pub search_query: String,
    pub languages: Vec<String>,
    pub engines: Vec<EngineSelector>,
    pub specific: bool,
}

/// A single search request's query: raw input plus the state derived by [`Query::parse`].
///
/// Created per request and never shared. Catalogs are passed in explicitly and only read.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    disabled: HashSet<DisabledEngine>,
    search_terms: Vec<String>,
    engines: Vec<EngineSelector>,
    languages: Vec<String>,
    specific: bool,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_disabled(raw, Vec::new())
    }

    pub fn with_disabled(
        raw: impl Into<String>,
        disabled: impl IntoIterator<Item = DisabledEngine>,
    ) -> Self {
        Self {
            raw: raw.into(),
            disabled: disabled.into_iter().collect(),
            search_terms: Vec::new(),
            engines: Vec::new(),
            languages: Vec::new(),
            specific: false,
        }
    }

    /// Resolve the first `:language` tag and the first `!`/`?` directive, and rebuild
    /// the search term from the remaining plain tokens.
    ///
    /// Unresolvable tags select nothing. Every call re-derives the search term, so
    /// a replacement made through [`Query::change_search_query`] is discarded.
    pub fn parse(&mut self, catalog: &Catalog) {
        let tags: Vec<Tag<'_>> = tag::tokenize(&self.raw).collect();

        let language = tags.iter().find_map(|t| match t {
            Tag::Language(code) => Some(*code),
            _ => None,
        });
        self.languages = language
            .and_then(|code| resolve_language(&catalog.languages, code))
            .into_iter()
            .collect();

        let directive = tags.iter().find_map(|t| match t {
            Tag::Directive(key) => Some(*key),
            _ => None,
        });
        self.engines = directive
            .map(|key| resolve_directive(&catalog.engines, key, &self.disabled))
            .unwrap_or_default();

        let terms: Vec<&str> = tags
            .iter()
            .filter_map(|t| match t {
                Tag::Plain(term) => Some(*term),
                _ => None,
            })
            .collect();
        self.search_terms = vec![terms.join(" ")];
    }

    /// Replace the current search term, e.g. with a rewritten query, without re-parsing tags.
    pub fn change_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        match self.search_terms.last_mut() {
            Some(last) => *last = query,
            None => self.search_terms.push(query),
        }
    }

    pub fn search_query(&self) -> &str {
        self.search_terms.last().map(String::as_str).unwrap_or("")
    }

    /// All search terms joined with single spaces, the same rule `parse` assembles terms with.
    pub fn full_query(&self) -> String {
        self.search_terms.join(" ")
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn disabled_engines(&self) -> &HashSet<DisabledEngine> {
        &self.disabled
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn engines(&self) -> &[EngineSelector] {
        &self.engines
    }

    /// Whether a caller marked this query as an explicit engine/category override.
    pub fn is_specific(&self) -> bool {
        self.specific
    }

    pub fn set_specific(&mut self, specific: bool) {
        self.specific = specific;
    }

    pub fn to_parsed(&self) -> ParsedQuery {
        ParsedQuery {
            raw: self.raw.clone(),
            search_query: self.search_query().to_string(),
            languages: self.languages.clone(),
            engines: self.engines.clone(),
            specific: self.specific,
        }
    }
}

fn resolve_language(languages: &LanguageCatalog, code: &str) -> Option<String> {
    let resolved = languages.resolve(code).map(|lc| lc.id.clone());
    debug!(tag = code, language = ?resolved, "language tag");
    resolved
}

/// Precedence: shortcut, then engine name, then category. `_` in the key reads as a space.
fn resolve_directive(
    registry: &EngineRegistry,
    key: &str,
    disabled: &HashSet<DisabledEngine>,
) -> Vec<EngineSelector> {
    let key = key.replace('_', " ");

    if let Some(name) = registry.shortcut(&key) {
        debug!(shortcut = %key, engine = name, "directive matched shortcut");
        return vec![EngineSelector::direct(name)];
    }

    if registry.engine(&key).is_some() {
        debug!(engine = %key, "directive matched engine");
        return vec![EngineSelector::direct(&key)];
    }

    let Some(members) = registry.category(&key) else {
        debug!(directive = %key, "directive matched nothing");
        return Vec::new();
    };

    let selected: Vec<EngineSelector> = members
        .into_iter()
        .filter(|engine| !disabled.contains(&DisabledEngine::new(&engine.name, &key)))
        .map(|engine| EngineSelector::new(&key, &engine.name))
        .collect();
    debug!(category = %key, engines = selected.len(), "directive matched category");
    selected
}
