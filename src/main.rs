use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grocery_list::config::{GroceryConfig, LogFormat};
use grocery_list::list_display::render_list;
use grocery_list::localization::{detect_language, LocalizationManager};
use grocery_list::{GroceryListStore, JsonFileStorage, RecipeBook};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "grocery-list", version, about = "Consolidated grocery list built from recipes")]
struct Cli {
    /// Directory holding the stored list
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON recipe book used by `add`
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Output language (en, fr)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the list grouped by aisle
    List {
        /// Print the raw items as JSON, including item ids
        #[arg(long)]
        json: bool,
    },
    /// Add a recipe's ingredients to the list
    Add { recipe_id: String },
    /// Withdraw a recipe's ingredients from the list
    Remove { recipe_id: String },
    /// Check or uncheck an item
    Toggle { item_id: String },
    /// Delete a single item
    RemoveItem { item_id: String },
    /// Delete every checked item
    ClearChecked,
    /// Empty the list
    ClearAll,
    /// Report whether a recipe contributes to the list
    Contains { recipe_id: String },
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the list itself
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GroceryConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(recipes) = cli.recipes {
        config.recipes_file = Some(recipes);
    }
    if let Some(lang) = cli.lang.as_deref() {
        config.language = detect_language(Some(lang)).to_string();
    }

    init_logging(config.log_format);
    info!(data_dir = %config.data_dir.display(), key = %config.storage_key, "Opening grocery list");

    let recipes = match &config.recipes_file {
        Some(path) => RecipeBook::from_json_file(path)
            .await
            .with_context(|| format!("Failed to load recipes from {}", path.display()))?,
        None => RecipeBook::new(),
    };

    let storage = JsonFileStorage::new(config.data_dir.clone());
    let store = GroceryListStore::new(storage, recipes, &config.storage_key);

    match cli.command {
        Commands::List { json } => {
            let items = store.get_list().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                let l10n = LocalizationManager::new()?;
                print!("{}", render_list(&items, &l10n, &config.language));
            }
        }
        Commands::Add { recipe_id } => {
            if config.recipes_file.is_none() {
                anyhow::bail!("No recipe book configured; pass --recipes or set GROCERY_RECIPES_FILE");
            }
            store
                .add_recipe(&recipe_id)
                .await
                .with_context(|| format!("Failed to add recipe {recipe_id}"))?;
        }
        Commands::Remove { recipe_id } => {
            store
                .remove_recipe(&recipe_id)
                .await
                .with_context(|| format!("Failed to remove recipe {recipe_id}"))?;
        }
        Commands::Toggle { item_id } => {
            store
                .toggle_checked(&item_id)
                .await
                .with_context(|| format!("Failed to toggle item {item_id}"))?;
        }
        Commands::RemoveItem { item_id } => {
            store
                .remove_item(&item_id)
                .await
                .with_context(|| format!("Failed to remove item {item_id}"))?;
        }
        Commands::ClearChecked => {
            store
                .clear_checked()
                .await
                .context("Failed to clear checked items")?;
        }
        Commands::ClearAll => {
            store.clear_all().await.context("Failed to clear the list")?;
        }
        Commands::Contains { recipe_id } => {
            println!("{}", store.is_recipe_in_list(&recipe_id).await);
        }
    }

    Ok(())
}
