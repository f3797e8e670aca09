use serde::Serialize;

use crate::catalog::{SkillCatalog, SkillDescriptor};

/// A catalog hit for a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub descriptor: &'a SkillDescriptor,
    /// Set when the hit came from the alias table rather than the entry
    /// itself.
    pub matched_alias: Option<&'a str>,
}

/// Case-insensitive substring search over the catalog.
///
/// First pass matches canonical name, description, and category in catalog
/// order; a second pass over the alias table appends skills only reachable
/// through an alias, with the alias recorded. The empty query matches
/// everything (every string contains the empty substring), so `search("")`
/// returns the full catalog.
pub fn search<'a>(catalog: &'a SkillCatalog, query: &str) -> Vec<SearchResult<'a>> {
    let needle = query.to_lowercase();
    let mut results: Vec<SearchResult<'a>> = Vec::new();

    for descriptor in catalog.entries() {
        let hit = descriptor.name.contains(&needle)
            || descriptor.description.to_lowercase().contains(&needle)
            || descriptor.category.to_string().contains(&needle);
        if hit {
            results.push(SearchResult {
                descriptor,
                matched_alias: None,
            });
        }
    }

    for (alias, canonical) in catalog.aliases() {
        if !alias.contains(&needle) {
            continue;
        }
        if results.iter().any(|r| r.descriptor.name == *canonical) {
            continue;
        }
        if let Some(descriptor) = catalog.lookup(canonical) {
            results.push(SearchResult {
                descriptor,
                matched_alias: Some(alias.as_str()),
            });
        }
    }

    results
}
