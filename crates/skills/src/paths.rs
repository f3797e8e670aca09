use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError};

/// Whether an install targets the current project or the user's home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallScope {
    /// `<cwd>/.claude/skills`
    Local,
    /// `<home>/.claude/skills`
    Global,
}

/// Install root for a scope.
pub fn install_root(scope: InstallScope) -> Result<PathBuf> {
    let base = match scope {
        InstallScope::Local => std::env::current_dir()?,
        InstallScope::Global => directories::BaseDirs::new()
            .ok_or(SkillError::NoHomeDir)?
            .home_dir()
            .to_path_buf(),
    };
    Ok(base.join(".claude").join("skills"))
}

/// Target directory for a canonical skill name under an install root.
pub fn target_path(root: &Path, canonical: &str) -> PathBuf {
    root.join(canonical)
}

/// Locate the bundled catalog tree.
///
/// Resolution order: `SKILLBOX_SKILLS_DIR`, then a `skills/` directory next
/// to (or a few levels above) the running executable, which covers both an
/// installed layout and `target/debug` during development, then `./skills`.
pub fn default_catalog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SKILLBOX_SKILLS_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(exe) = std::env::current_exe() {
        for dir in exe.ancestors().skip(1).take(4) {
            let candidate = dir.join("skills");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("skills")
}
