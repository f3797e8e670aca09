//! Skill management engine: catalog, alias resolution, install paths, and
//! the install/remove/update/list/search operations.
//!
//! Skills are directories containing a `SKILL.md` file with instructions for
//! a host agent, following the Agent Skills open standard. The engine copies
//! them from the bundled catalog tree into `.claude/skills` (project-local
//! or user-global) where agents discover them.

pub mod catalog;
pub mod confirm;
pub mod error;
pub mod install;
pub mod list;
pub mod paths;
pub mod search;

pub use {
    catalog::{Category, SkillCatalog, SkillDescriptor},
    confirm::{AutoApprove, Confirm},
    error::{Result, SkillError},
    install::{InstallOutcome, RemoveOutcome, install_skill, remove_skill, update_skill},
    list::{InstalledSkill, list_catalog, list_installed},
    paths::{InstallScope, default_catalog_dir, install_root, target_path},
    search::{SearchResult, search},
};
