use std::path::Path;

use crate::{
    catalog::SkillCatalog,
    confirm::{AutoApprove, Confirm},
    error::{Result, SkillError},
    paths,
};

/// Terminal state of an install. A declined confirmation is a deliberate
/// outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Cancelled,
}

/// Terminal state of a remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotInstalled,
    Cancelled,
}

/// Install a skill from the catalog tree into `target_root`.
///
/// Resolves aliases, verifies the bundled source exists, and copies the
/// whole source directory. A pre-existing install is replaced wholesale,
/// never merged, after `confirm` approves the overwrite (skipped entirely
/// when `skip_confirm` is set).
pub async fn install_skill(
    catalog: &SkillCatalog,
    name: &str,
    target_root: &Path,
    skip_confirm: bool,
    confirm: &dyn Confirm,
) -> Result<InstallOutcome> {
    let canonical = catalog.resolve(name);
    let descriptor = catalog
        .lookup(&canonical)
        .ok_or_else(|| SkillError::NotFound {
            name: canonical.clone(),
        })?;

    let source = catalog.source_path(descriptor);
    if !source.is_dir() {
        return Err(SkillError::SourceMissing {
            name: canonical,
            path: source,
        });
    }

    let target = paths::target_path(target_root, &canonical);
    let replacing = target.exists();
    if replacing && !skip_confirm {
        let approved = confirm
            .confirm(
                &format!("Skill '{canonical}' is already installed. Overwrite?"),
                false,
            )
            .await?;
        if !approved {
            tracing::info!(skill = %canonical, "install cancelled, existing skill kept");
            return Ok(InstallOutcome::Cancelled);
        }
    }

    // Whole-directory replace: stale files from a previous install must not
    // survive under the new tree.
    if replacing {
        tokio::fs::remove_dir_all(&target).await?;
    }
    tokio::fs::create_dir_all(target_root).await?;
    copy_dir_all(&source, &target).await?;

    tracing::info!(skill = %canonical, target = %target.display(), "installed skill");
    Ok(InstallOutcome::Installed)
}

/// Remove an installed skill's directory from `target_root`.
pub async fn remove_skill(
    catalog: &SkillCatalog,
    name: &str,
    target_root: &Path,
    skip_confirm: bool,
    confirm: &dyn Confirm,
) -> Result<RemoveOutcome> {
    let canonical = catalog.resolve(name);
    let target = paths::target_path(target_root, &canonical);

    if !target.is_dir() {
        tracing::warn!(skill = %canonical, "skill is not installed");
        return Ok(RemoveOutcome::NotInstalled);
    }

    if !skip_confirm {
        let approved = confirm
            .confirm(&format!("Remove skill '{canonical}'?"), false)
            .await?;
        if !approved {
            return Ok(RemoveOutcome::Cancelled);
        }
    }

    tokio::fs::remove_dir_all(&target).await?;
    tracing::info!(skill = %canonical, "removed skill");
    Ok(RemoveOutcome::Removed)
}

/// Reinstall a skill: remove then install, confirmation bypassed for both
/// phases.
///
/// Not atomic: interruption between the phases leaves the skill
/// uninstalled. Accepted limitation for a single-user local tool.
pub async fn update_skill(catalog: &SkillCatalog, name: &str, target_root: &Path) -> Result<()> {
    remove_skill(catalog, name, target_root, true, &AutoApprove).await?;
    install_skill(catalog, name, target_root, true, &AutoApprove).await?;
    let canonical = catalog.resolve(name);
    tracing::info!(skill = %canonical, "updated skill");
    Ok(())
}

/// Copy a directory tree. Symlinked entries are skipped, matching the
/// policy for unpacked skill archives elsewhere in the ecosystem.
async fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    let mut stack = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((from, to)) = stack.pop() {
        tokio::fs::create_dir_all(&to).await?;
        let mut entries = tokio::fs::read_dir(&from).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            let dest = to.join(entry.file_name());
            if file_type.is_symlink() {
                tracing::warn!(path = %entry.path().display(), "skipping symlinked entry");
            } else if file_type.is_dir() {
                stack.push((entry.path(), dest));
            } else {
                tokio::fs::copy(entry.path(), dest).await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use async_trait::async_trait;

    use {
        super::*,
        crate::catalog::{Category, SkillDescriptor},
    };

    struct StubConfirm {
        answer: bool,
    }

    #[async_trait]
    impl Confirm for StubConfirm {
        async fn confirm(&self, _message: &str, _default_yes: bool) -> std::io::Result<bool> {
            Ok(self.answer)
        }
    }

    fn test_catalog(root: PathBuf) -> SkillCatalog {
        let entries = vec![
            SkillDescriptor {
                name: "pptx".into(),
                path: "general/pptx".into(),
                category: Category::General,
                description: "presentations".into(),
            },
            SkillDescriptor {
                name: "better-auth".into(),
                path: "auth/better-auth".into(),
                category: Category::Auth,
                description: "auth integration".into(),
            },
        ];
        let aliases = vec![("powerpoint".to_string(), "pptx".to_string())];
        SkillCatalog::new(root, entries, aliases)
    }

    fn write_source(root: &Path, rel: &str) {
        let dir = root.join(rel);
        std::fs::create_dir_all(dir.join("references")).unwrap();
        std::fs::write(dir.join("SKILL.md"), "---\nname: test\n---\nbody\n").unwrap();
        std::fs::write(dir.join("references/extra.md"), "extra").unwrap();
    }

    #[tokio::test]
    async fn install_copies_whole_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        let outcome = install_skill(&catalog, "pptx", &target_root, false, &StubConfirm {
            answer: false,
        })
        .await
        .unwrap();

        assert_eq!(outcome, InstallOutcome::Installed);
        assert!(target_root.join("pptx/SKILL.md").is_file());
        assert!(target_root.join("pptx/references/extra.md").is_file());
    }

    #[tokio::test]
    async fn install_via_alias_lands_under_canonical_name() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "PowerPoint", &target_root, true, &AutoApprove)
            .await
            .unwrap();

        assert!(target_root.join("pptx/SKILL.md").is_file());
        assert!(!target_root.join("powerpoint").exists());
    }

    #[tokio::test]
    async fn install_unknown_skill_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        let target_root = tmp.path().join("installed");

        let err = install_skill(&catalog, "nope", &target_root, true, &AutoApprove)
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::NotFound { name } if name == "nope"));
        assert!(!target_root.exists());
    }

    #[tokio::test]
    async fn install_with_missing_source_signals_packaging_defect() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        let target_root = tmp.path().join("installed");

        let err = install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::SourceMissing { .. }));
    }

    #[tokio::test]
    async fn declined_overwrite_keeps_existing_install_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        std::fs::write(target_root.join("pptx/SKILL.md"), "locally edited").unwrap();

        let outcome = install_skill(&catalog, "pptx", &target_root, false, &StubConfirm {
            answer: false,
        })
        .await
        .unwrap();

        assert_eq!(outcome, InstallOutcome::Cancelled);
        let kept = std::fs::read_to_string(target_root.join("pptx/SKILL.md")).unwrap();
        assert_eq!(kept, "locally edited");
    }

    #[tokio::test]
    async fn accepted_overwrite_replaces_tree_wholesale() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        // A stale file from "a previous version" must not survive.
        std::fs::write(target_root.join("pptx/stale.md"), "old").unwrap();

        let outcome = install_skill(&catalog, "pptx", &target_root, false, &StubConfirm {
            answer: true,
        })
        .await
        .unwrap();

        assert_eq!(outcome, InstallOutcome::Installed);
        assert!(!target_root.join("pptx/stale.md").exists());
        assert!(target_root.join("pptx/SKILL.md").is_file());
    }

    #[tokio::test]
    async fn skip_confirm_overwrites_without_consulting_the_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();

        // A confirm that would decline: skip_confirm must never reach it.
        let outcome = install_skill(&catalog, "pptx", &target_root, true, &StubConfirm {
            answer: false,
        })
        .await
        .unwrap();
        assert_eq!(outcome, InstallOutcome::Installed);
    }

    #[tokio::test]
    async fn remove_absent_skill_is_not_installed() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        let target_root = tmp.path().join("installed");

        let outcome = remove_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        assert_eq!(outcome, RemoveOutcome::NotInstalled);
    }

    #[tokio::test]
    async fn declined_remove_keeps_the_install() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        let outcome = remove_skill(&catalog, "pptx", &target_root, false, &StubConfirm {
            answer: false,
        })
        .await
        .unwrap();

        assert_eq!(outcome, RemoveOutcome::Cancelled);
        assert!(target_root.join("pptx/SKILL.md").is_file());
    }

    #[tokio::test]
    async fn remove_deletes_the_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        let outcome = remove_skill(&catalog, "powerpoint", &target_root, true, &AutoApprove)
            .await
            .unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(!target_root.join("pptx").exists());
    }

    #[tokio::test]
    async fn update_restores_source_content_without_prompting() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();
        std::fs::write(target_root.join("pptx/SKILL.md"), "drifted").unwrap();

        update_skill(&catalog, "pptx", &target_root).await.unwrap();

        let content = std::fs::read_to_string(target_root.join("pptx/SKILL.md")).unwrap();
        assert!(content.contains("body"));
    }

    #[tokio::test]
    async fn update_installs_when_not_yet_installed() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        let target_root = tmp.path().join("installed");

        update_skill(&catalog, "pptx", &target_root).await.unwrap();
        assert!(target_root.join("pptx/SKILL.md").is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_source_entries_are_not_copied() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = test_catalog(tmp.path().join("src"));
        write_source(catalog.root(), "general/pptx");
        std::os::unix::fs::symlink(
            catalog.root().join("general/pptx/SKILL.md"),
            catalog.root().join("general/pptx/link.md"),
        )
        .unwrap();
        let target_root = tmp.path().join("installed");

        install_skill(&catalog, "pptx", &target_root, true, &AutoApprove)
            .await
            .unwrap();

        assert!(target_root.join("pptx/SKILL.md").is_file());
        assert!(!target_root.join("pptx/link.md").exists());
    }
}
