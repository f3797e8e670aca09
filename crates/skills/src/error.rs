use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the skill engine.
///
/// Declined confirmations and remove-of-absent are outcomes, not errors;
/// see [`crate::install::InstallOutcome`] and [`crate::install::RemoveOutcome`].
/// The command surface alone decides exit codes; nothing here terminates the
/// process.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The name resolved to nothing in the catalog.
    #[error("unknown skill '{name}'")]
    NotFound { name: String },

    /// The catalog lists the skill but its source directory is gone.
    /// A packaging defect, not user error.
    #[error("source directory for skill '{name}' is missing: {}", path.display())]
    SourceMissing { name: String, path: PathBuf },

    /// The user's home directory could not be determined (global scope).
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkillError>;
