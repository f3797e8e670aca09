mod skill_commands;

use {
    clap::{Parser, Subcommand},
    skillbox_skills::{Category, SkillCatalog, default_catalog_dir},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "skillbox",
    about = "Skillbox — install agent skills into .claude/skills",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Custom location of the bundled skills tree.
    #[arg(long, global = true, env = "SKILLBOX_SKILLS_DIR")]
    skills_dir: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a skill from the catalog.
    Add {
        /// Skill name or alias.
        name: String,
        /// Install into ~/.claude/skills instead of the current project.
        #[arg(long)]
        global: bool,
        /// Overwrite an existing install without asking.
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Remove an installed skill.
    Remove {
        /// Skill name or alias.
        name: String,
        /// Target ~/.claude/skills instead of the current project.
        #[arg(long)]
        global: bool,
        /// Delete without asking.
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Reinstall a skill from the catalog, no questions asked.
    Update {
        /// Skill name or alias.
        name: String,
        /// Target ~/.claude/skills instead of the current project.
        #[arg(long)]
        global: bool,
    },
    /// Show the skill catalog, grouped by category.
    List {
        /// Only show one category (frontend, general, auth).
        #[arg(long)]
        category: Option<Category>,
        /// Machine-readable output.
        #[arg(long)]
        json: bool,
    },
    /// List skills installed in the target scope.
    Installed {
        /// Inspect ~/.claude/skills instead of the current project.
        #[arg(long)]
        global: bool,
        /// Machine-readable output.
        #[arg(long)]
        json: bool,
    },
    /// Search the catalog by name, description, category, or alias.
    Search {
        query: String,
        /// Machine-readable output.
        #[arg(long)]
        json: bool,
    },
    /// Show details for one skill.
    Info {
        /// Skill name or alias.
        name: String,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let catalog_root = cli.skills_dir.clone().unwrap_or_else(default_catalog_dir);
    let catalog = SkillCatalog::builtin(catalog_root);
    tracing::debug!(catalog_root = %catalog.root().display(), "loaded builtin catalog");

    match cli.command {
        Commands::Add { name, global, yes } => {
            skill_commands::handle_add(&catalog, &name, global, yes).await
        },
        Commands::Remove { name, global, yes } => {
            skill_commands::handle_remove(&catalog, &name, global, yes).await
        },
        Commands::Update { name, global } => {
            skill_commands::handle_update(&catalog, &name, global).await
        },
        Commands::List { category, json } => {
            skill_commands::handle_list(&catalog, category, json)
        },
        Commands::Installed { global, json } => {
            skill_commands::handle_installed(&catalog, global, json)
        },
        Commands::Search { query, json } => {
            skill_commands::handle_search(&catalog, &query, json)
        },
        Commands::Info { name } => skill_commands::handle_info(&catalog, &name),
    }
}
