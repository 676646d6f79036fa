use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

/// A searchable engine as registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Engine {
    pub name: String,
    #[serde(default)]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Engine {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            shortcut: None,
            categories: Vec::new(),
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.categories.push(category.to_string());
        self
    }
}

/// Read-only lookup tables derived from the registered engines:
/// shortcut → engine name, engine name → engine, category → engines.
///
/// Category membership keeps registration order. Duplicate engine names and
/// shortcuts keep the first registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<Engine>")]
pub struct EngineRegistry {
    engines: Vec<Engine>,
    by_name: HashMap<String, usize>,
    shortcuts: HashMap<String, usize>,
    categories: HashMap<String, Vec<usize>>,
}

impl EngineRegistry {
    pub fn from_engines(engines: Vec<Engine>) -> Self {
        let mut registry = Self::default();
        for engine in engines {
            registry.register(engine);
        }
        registry
    }

    fn register(&mut self, engine: Engine) {
        if self.by_name.contains_key(&engine.name) {
            warn!(engine = %engine.name, "duplicate engine name ignored");
            return;
        }
        let idx = self.engines.len();

        if let Some(shortcut) = &engine.shortcut {
            if let Some(&existing) = self.shortcuts.get(shortcut) {
                warn!(
                    shortcut = %shortcut,
                    kept = %self.engines[existing].name,
                    ignored = %engine.name,
                    "duplicate engine shortcut"
                );
            } else {
                self.shortcuts.insert(shortcut.clone(), idx);
            }
        }

        for category in &engine.categories {
            let members = self.categories.entry(category.clone()).or_default();
            if !members.contains(&idx) {
                members.push(idx);
            }
        }

        self.by_name.insert(engine.name.clone(), idx);
        self.engines.push(engine);
    }

    /// Engine name a shortcut points at.
    pub fn shortcut(&self, shortcut: &str) -> Option<&str> {
        self.shortcuts
            .get(shortcut)
            .map(|&idx| self.engines[idx].name.as_str())
    }

    pub fn engine(&self, name: &str) -> Option<&Engine> {
        self.by_name.get(name).map(|&idx| &self.engines[idx])
    }

    /// Engines registered under `category`, in registration order.
    pub fn category(&self, category: &str) -> Option<Vec<&Engine>> {
        self.categories
            .get(category)
            .map(|ids| ids.iter().map(|&idx| &self.engines[idx]).collect())
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl From<Vec<Engine>> for EngineRegistry {
    fn from(engines: Vec<Engine>) -> Self {
        Self::from_engines(engines)
    }
}
