use std::io::Write;

use {
    anyhow::{Result, bail},
    async_trait::async_trait,
    skillbox_skills::{
        Category, Confirm, InstallOutcome, InstallScope, RemoveOutcome, SkillCatalog, SkillError,
        install_root, install_skill, list_catalog, list_installed, remove_skill, search,
        target_path, update_skill,
    },
};

fn scope_for(global: bool) -> InstallScope {
    if global {
        InstallScope::Global
    } else {
        InstallScope::Local
    }
}

pub async fn handle_add(
    catalog: &SkillCatalog,
    name: &str,
    global: bool,
    yes: bool,
) -> Result<()> {
    let root = install_root(scope_for(global))?;
    match install_skill(catalog, name, &root, yes, &StdinConfirm).await {
        Ok(InstallOutcome::Installed) => {
            let canonical = catalog.resolve(name);
            println!(
                "Installed '{canonical}' to {}",
                target_path(&root, &canonical).display()
            );
            Ok(())
        },
        Ok(InstallOutcome::Cancelled) => {
            println!("Cancelled. Existing install left untouched.");
            Ok(())
        },
        Err(SkillError::NotFound { name }) => {
            eprintln!("Unknown skill '{name}'.\n");
            print_catalog(catalog, None);
            bail!("unknown skill '{name}'");
        },
        Err(e) => Err(e.into()),
    }
}

pub async fn handle_remove(
    catalog: &SkillCatalog,
    name: &str,
    global: bool,
    yes: bool,
) -> Result<()> {
    let root = install_root(scope_for(global))?;
    let canonical = catalog.resolve(name);
    match remove_skill(catalog, name, &root, yes, &StdinConfirm).await? {
        RemoveOutcome::Removed => println!("Removed '{canonical}'."),
        RemoveOutcome::NotInstalled => println!("Skill '{canonical}' is not installed."),
        RemoveOutcome::Cancelled => println!("Cancelled."),
    }
    Ok(())
}

pub async fn handle_update(catalog: &SkillCatalog, name: &str, global: bool) -> Result<()> {
    let root = install_root(scope_for(global))?;
    match update_skill(catalog, name, &root).await {
        Ok(()) => {
            println!("Updated '{}'.", catalog.resolve(name));
            Ok(())
        },
        Err(SkillError::NotFound { name }) => {
            eprintln!("Unknown skill '{name}'.\n");
            print_catalog(catalog, None);
            bail!("unknown skill '{name}'");
        },
        Err(e) => Err(e.into()),
    }
}

pub fn handle_list(catalog: &SkillCatalog, category: Option<Category>, json: bool) -> Result<()> {
    if json {
        let descriptors: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|d| category.is_none_or(|c| c == d.category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    let groups = list_catalog(catalog, category);
    if groups.is_empty() {
        println!("No skills in that category.");
        return Ok(());
    }
    print_catalog(catalog, category);
    Ok(())
}

pub fn handle_installed(catalog: &SkillCatalog, global: bool, json: bool) -> Result<()> {
    let root = install_root(scope_for(global))?;
    let installed = list_installed(catalog, &root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&installed)?);
        return Ok(());
    }

    if installed.is_empty() {
        println!("No skills installed in {}.", root.display());
        return Ok(());
    }
    println!("Installed skills in {}:\n", root.display());
    for skill in &installed {
        match &skill.description {
            Some(description) => println!("  {:<20} {description}", skill.name),
            None => println!("  {:<20} (not in the catalog)", skill.name),
        }
    }
    Ok(())
}

pub fn handle_search(catalog: &SkillCatalog, query: &str, json: bool) -> Result<()> {
    let results = search(catalog, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No skills matched '{query}'.");
        return Ok(());
    }
    for result in &results {
        let d = result.descriptor;
        let via = result
            .matched_alias
            .map(|alias| format!(" (alias '{alias}')"))
            .unwrap_or_default();
        println!("  {:<20} {} [{}]{via}", d.name, d.description, d.category);
    }
    Ok(())
}

pub fn handle_info(catalog: &SkillCatalog, name: &str) -> Result<()> {
    let canonical = catalog.resolve(name);
    let Some(descriptor) = catalog.lookup(&canonical) else {
        eprintln!("Unknown skill '{canonical}'.\n");
        print_catalog(catalog, None);
        bail!("unknown skill '{canonical}'");
    };

    println!("Name:        {}", descriptor.name);
    println!("Category:    {}", descriptor.category);
    println!("Description: {}", descriptor.description);
    let aliases = catalog.aliases_for(&descriptor.name);
    if !aliases.is_empty() {
        println!("Aliases:     {}", aliases.join(", "));
    }
    println!(
        "Source:      {}",
        catalog.source_path(descriptor).display()
    );

    let local = install_root(InstallScope::Local)?;
    println!(
        "Local:       {}",
        install_state(&local, &descriptor.name)
    );
    if let Ok(global) = install_root(InstallScope::Global) {
        println!(
            "Global:      {}",
            install_state(&global, &descriptor.name)
        );
    }
    Ok(())
}

fn install_state(root: &std::path::Path, canonical: &str) -> String {
    if target_path(root, canonical).is_dir() {
        "installed".to_string()
    } else {
        "not installed".to_string()
    }
}

/// Render the catalog grouped by category, with aliases inline.
fn print_catalog(catalog: &SkillCatalog, filter: Option<Category>) {
    println!("Available skills:");
    for (category, descriptors) in list_catalog(catalog, filter) {
        println!("\n  {category}");
        for d in descriptors {
            let aliases = catalog.aliases_for(&d.name);
            let alias_note = if aliases.is_empty() {
                String::new()
            } else {
                format!(" (aliases: {})", aliases.join(", "))
            };
            println!("    {:<18} {}{alias_note}", d.name, d.description);
        }
    }
}

/// Interactive y/n confirmation on stdin. Empty input takes the default.
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, message: &str, default_yes: bool) -> std::io::Result<bool> {
        prompt_yes_no(message, default_yes)
    }
}

fn prompt_yes_no(prompt: &str, default_yes: bool) -> std::io::Result<bool> {
    let mut stdout = std::io::stdout();
    loop {
        write!(
            stdout,
            "{prompt} [{}]: ",
            if default_yes {
                "Y/n"
            } else {
                "y/N"
            }
        )?;
        stdout.flush()?;

        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        match line.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer with 'y' or 'n'."),
        }
    }
}
