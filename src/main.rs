use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use toktotable::cli::GenerateInput;
use toktotable::render::render_list;
use toktotable::{FileStorage, ShoppingListStore, StorageKeys};
use toktotable_shopping::ShoppingList;

/// toktotable - weekly meal plan to shopping list
#[derive(Parser)]
#[command(name = "toktotable")]
#[command(about = "Turn a weekly meal plan into a shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print the list as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the shopping list from the planner (overwrites the current list)
    Generate {
        /// Planner JSON file: {"Monday": ["recipe-id", ...], ...}
        #[arg(long)]
        planner: Option<PathBuf>,

        /// Recipe catalog JSON file: [{"id": ..., "ingredients": [...]}, ...]
        #[arg(long)]
        recipes: Option<PathBuf>,
    },
    /// Print the current shopping list
    Show,
    /// Check or uncheck one item
    Toggle {
        /// Item id as printed by `show`
        item_id: String,
    },
    /// Uncheck every item
    Reset,
    /// Replace the shopping list with an empty one
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = toktotable::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    toktotable::observability::init_observability(
        "toktotable",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let store = ShoppingListStore::new(
        FileStorage::new(&config.storage.dir),
        StorageKeys::from(&config.storage),
    );

    let list = match cli.command {
        Commands::Generate { planner, recipes } => {
            toktotable::cli::generate(&store, GenerateInput { planner, recipes }).await?
        }
        Commands::Show => toktotable::cli::show(&store).await?,
        Commands::Toggle { item_id } => toktotable::cli::toggle(&store, &item_id).await?,
        Commands::Reset => toktotable::cli::reset(&store).await?,
        Commands::Clear => toktotable::cli::clear(&store).await?,
    };

    print_list(&list, cli.json)
}

fn print_list(list: &ShoppingList, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list)?);
    } else {
        println!("{}", render_list(list));
    }

    Ok(())
}
