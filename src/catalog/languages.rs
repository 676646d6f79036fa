use serde::Deserialize;

/// One entry of the language catalog: `(id, name, country)`, e.g. `("fr_FR", "Français", "France")`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, String)")]
pub struct LanguageCode {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl LanguageCode {
    pub fn new(id: &str, name: &str, country: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    /// Case-insensitive match against an already lower-cased candidate.
    ///
    /// Matches when the id starts with the candidate (which includes the exact id),
    /// the name equals it, or the country equals it with `_` read as a space.
    pub fn matches(&self, candidate: &str) -> bool {
        self.id.to_lowercase().starts_with(candidate)
            || self.name.to_lowercase() == candidate
            || self.country.to_lowercase() == candidate.replace('_', " ")
    }
}

impl From<(String, String, String)> for LanguageCode {
    fn from((id, name, country): (String, String, String)) -> Self {
        Self { id, name, country }
    }
}

/// Ordered language catalog. Order is significant: the first matching entry wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    entries: Vec<LanguageCode>,
}

impl LanguageCatalog {
    pub fn entries(&self) -> &[LanguageCode] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry matching `candidate` (compared case-insensitively).
    ///
    /// An empty candidate is a prefix of every id, so it resolves to the first entry.
    pub fn resolve(&self, candidate: &str) -> Option<&LanguageCode> {
        let candidate = candidate.to_lowercase();
        self.entries.iter().find(|lc| lc.matches(&candidate))
    }
}

impl From<Vec<LanguageCode>> for LanguageCatalog {
    fn from(entries: Vec<LanguageCode>) -> Self {
        Self { entries }
    }
}

impl FromIterator<LanguageCode> for LanguageCatalog {
    fn from_iter<I: IntoIterator<Item = LanguageCode>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LanguageCatalog {
        LanguageCatalog::from(vec![
            LanguageCode::new("de_DE", "Deutsch", "Germany"),
            LanguageCode::new("en_GB", "English", "United Kingdom"),
            LanguageCode::new("en_US", "English", "United States"),
            LanguageCode::new("fr_FR", "Français", "France"),
        ])
    }

    #[test]
    fn resolves_exact_id_case_insensitively() {
        let lc = catalog().resolve("EN_US").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("en_US"));
    }

    #[test]
    fn resolves_id_prefix_to_first_entry() {
        let lc = catalog().resolve("en").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("en_GB"));
    }

    #[test]
    fn resolves_by_name() {
        let lc = catalog().resolve("deutsch").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("de_DE"));
    }

    #[test]
    fn resolves_by_name_with_non_ascii() {
        let lc = catalog().resolve("FRANÇAIS").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("fr_FR"));
    }

    #[test]
    fn resolves_country_with_underscore_as_space() {
        let lc = catalog().resolve("united_states").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("en_US"));
    }

    #[test]
    fn catalog_order_breaks_ties() {
        let catalog = LanguageCatalog::from(vec![
            LanguageCode::new("english_variant", "Other", "Nowhere"),
            LanguageCode::new("en_US", "English", "United States"),
        ]);
        // "english" prefix-matches the first id before the second entry's name is considered.
        let lc = catalog.resolve("english").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("english_variant"));
    }

    #[test]
    fn unknown_candidate_resolves_nothing() {
        assert!(catalog().resolve("zz").is_none());
    }

    #[test]
    fn empty_candidate_resolves_first_entry() {
        let lc = catalog().resolve("").map(|lc| lc.id.clone());
        assert_eq!(lc.as_deref(), Some("de_DE"));
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        assert!(LanguageCatalog::default().resolve("").is_none());
    }

    #[test]
    fn deserializes_from_triples() {
        let catalog: LanguageCatalog =
            serde_json::from_str(r#"[["fr", "French", "France"], ["it", "Italiano", "Italy"]]"#)
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1], LanguageCode::new("it", "Italiano", "Italy"));
    }
}
