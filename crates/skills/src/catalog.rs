use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Catalog category a skill is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    General,
    Auth,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Frontend => "frontend",
            Self::General => "general",
            Self::Auth => "auth",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "general" => Ok(Self::General),
            "auth" => Ok(Self::Auth),
            other => Err(format!(
                "unknown category '{other}' (expected frontend, general, or auth)"
            )),
        }
    }
}

/// One catalog entry: canonical name plus where its source lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Canonical skill name — lowercase, hyphens allowed.
    pub name: String,
    /// Source directory relative to the catalog root (`<category>/<name>`).
    pub path: String,
    pub category: Category,
    /// Short human-readable description.
    pub description: String,
}

/// The fixed skill catalog: ordered descriptors plus the alias table.
///
/// Built once at startup and passed explicitly to every operation, so tests
/// can substitute their own catalog via [`SkillCatalog::new`]. Declaration
/// order is display order.
pub struct SkillCatalog {
    root: PathBuf,
    entries: Vec<SkillDescriptor>,
    aliases: Vec<(String, String)>,
}

impl SkillCatalog {
    pub fn new(
        root: PathBuf,
        entries: Vec<SkillDescriptor>,
        aliases: Vec<(String, String)>,
    ) -> Self {
        Self {
            root,
            entries,
            aliases,
        }
    }

    /// The compiled-in catalog, rooted at the bundled skills tree.
    pub fn builtin(root: PathBuf) -> Self {
        let entries = vec![
            entry(
                "pptx",
                Category::General,
                "Create and edit PowerPoint presentations with layouts, charts, and speaker notes",
            ),
            entry(
                "docx",
                Category::General,
                "Create and edit Word documents with styles, tables, and tracked changes",
            ),
            entry(
                "xlsx",
                Category::General,
                "Create and edit Excel spreadsheets with formulas, pivot tables, and charts",
            ),
            entry(
                "pdf",
                Category::General,
                "Read, generate, merge, and fill PDF documents and forms",
            ),
            entry(
                "frontend-design",
                Category::Frontend,
                "Design polished web interfaces with sound layout, typography, and color systems",
            ),
            entry(
                "webapp-testing",
                Category::Frontend,
                "Drive a browser to test web applications end to end",
            ),
            entry(
                "better-auth",
                Category::Auth,
                "Integrate Better Auth for sign-in, sessions, and account management",
            ),
            entry(
                "create-auth",
                Category::Auth,
                "Scaffold authentication flows from scratch: registration, login, and password reset",
            ),
        ];
        let aliases = [
            ("powerpoint", "pptx"),
            ("slides", "pptx"),
            ("word", "docx"),
            ("excel", "xlsx"),
            ("spreadsheet", "xlsx"),
            ("design", "frontend-design"),
            ("auth", "better-auth"),
        ]
        .into_iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect();

        Self::new(root, entries, aliases)
    }

    /// Resolve a user-supplied name to a canonical one.
    ///
    /// Lowercases the input and consults the alias table. Names without an
    /// alias come back unchanged: canonical names still resolve, and unknown
    /// names surface downstream as [`crate::SkillError::NotFound`] instead
    /// of being silently aliased.
    pub fn resolve(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, canonical)| canonical.clone())
            .unwrap_or(lowered)
    }

    pub fn lookup(&self, canonical: &str) -> Option<&SkillDescriptor> {
        self.entries.iter().find(|d| d.name == canonical)
    }

    /// Aliases pointing at a canonical name, in table order.
    pub fn aliases_for(&self, canonical: &str) -> Vec<&str> {
        self.aliases
            .iter()
            .filter(|(_, c)| c == canonical)
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    /// Absolute source directory for a descriptor.
    pub fn source_path(&self, descriptor: &SkillDescriptor) -> PathBuf {
        self.root.join(&descriptor.path)
    }

    pub fn entries(&self) -> &[SkillDescriptor] {
        &self.entries
    }

    pub fn aliases(&self) -> &[(String, String)] {
        &self.aliases
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn entry(name: &str, category: Category, description: &str) -> SkillDescriptor {
    SkillDescriptor {
        name: name.to_string(),
        path: format!("{category}/{name}"),
        category,
        description: description.to_string(),
    }
}
