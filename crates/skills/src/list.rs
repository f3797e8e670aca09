use std::path::Path;

use serde::Serialize;

use crate::{
    catalog::{Category, SkillCatalog, SkillDescriptor},
    error::Result,
};

/// Marker file whose presence identifies a directory as an installed skill.
pub const SKILL_MARKER: &str = "SKILL.md";

/// A skill found under an install root.
///
/// Identity is derived purely from the filesystem; there is no manifest.
/// `description` is attached from the catalog when the directory name
/// matches a canonical entry, and `None` means present but unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledSkill {
    pub name: String,
    pub description: Option<String>,
}

/// Enumerate installed skills under `target_root`, sorted by name.
///
/// A missing root means nothing is installed. Immediate subdirectories
/// without the `SKILL.md` marker are ignored.
pub fn list_installed(catalog: &SkillCatalog, target_root: &Path) -> Result<Vec<InstalledSkill>> {
    if !target_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut installed = Vec::new();
    for entry in std::fs::read_dir(target_root)? {
        let entry = entry?;
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        if !dir.join(SKILL_MARKER).is_file() {
            tracing::debug!(path = %dir.display(), "skipping directory without skill marker");
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let description = catalog.lookup(&name).map(|d| d.description.clone());
        installed.push(InstalledSkill { name, description });
    }

    installed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(installed)
}

/// The full catalog grouped by category, in declaration order.
///
/// `filter` keeps a single category; filtering everything away is a valid
/// empty result, not an error.
pub fn list_catalog(
    catalog: &SkillCatalog,
    filter: Option<Category>,
) -> Vec<(Category, Vec<&SkillDescriptor>)> {
    let mut groups: Vec<(Category, Vec<&SkillDescriptor>)> = Vec::new();

    for descriptor in catalog.entries() {
        if filter.is_some_and(|c| c != descriptor.category) {
            continue;
        }
        match groups.iter_mut().find(|(c, _)| *c == descriptor.category) {
            Some((_, group)) => group.push(descriptor),
            None => groups.push((descriptor.category, vec![descriptor])),
        }
    }

    groups
}
