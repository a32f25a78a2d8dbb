use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use serde::Serialize;
use tracing::info;

use ticklist_core::{Config, FileStorage, Filter, MemoryStorage, Storage, TodoItem, TodoStore};

mod logging;
mod tui;

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A to-do list for the terminal", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved list
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Keep the list in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Whether this run may write to the data directory (list and log file).
    fn writes_to_disk(&self) -> bool {
        !self.ephemeral
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive list (default)
    Tui,
    /// Print the list
    List {
        /// all, active or completed (defaults to the saved filter)
        #[arg(long)]
        filter: Option<Filter>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    filter: Filter,
    active_count: usize,
    items: Vec<&'a TodoItem>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let writes_to_disk = cli.writes_to_disk();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("Failed to load config")?,
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let command = cli.command.unwrap_or(Commands::Tui);

    if writes_to_disk {
        if let Err(e) = logging::init(&config) {
            eprintln!("Logging disabled: {}", e);
        }
    }

    let slot = config.storage.slot_name.clone();
    let store_config = config.store.clone();

    if !writes_to_disk {
        info!("Starting with in-memory storage");
        let store = TodoStore::open(MemoryStorage::new(), slot, store_config);
        dispatch(command, config, store).await
    } else {
        let storage = FileStorage::with_config(&config.storage);
        info!(path = %storage.slot_path(&slot).display(), "Starting");
        let store = TodoStore::open(storage, slot, store_config);
        dispatch(command, config, store).await
    }
}

async fn dispatch<S: Storage>(
    command: Commands,
    config: Config,
    store: TodoStore<S>,
) -> color_eyre::Result<()> {
    match command {
        Commands::Tui => tui::run(config, store).await,
        Commands::List { filter, json } => {
            print!("{}", render_list(&store, filter, json)?);
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Renders the list as printed by `ticklist list`.
///
/// `filter` overrides the saved filter for this listing only.
fn render_list<S: Storage>(
    store: &TodoStore<S>,
    filter: Option<Filter>,
    json: bool,
) -> color_eyre::Result<String> {
    let filter = filter.unwrap_or_else(|| store.filter());
    let items = store.items_matching(filter);

    if json {
        let output = ListOutput {
            filter,
            active_count: store.active_count(),
            items,
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    let mut out = String::new();
    if items.is_empty() {
        out.push_str(&format!("No items ({}).\n", filter));
    }
    for item in &items {
        let checkbox = if item.completed { "[x]" } else { "[ ]" };
        out.push_str(&format!("{} {}  ({})\n", checkbox, item.text, item.id));
    }
    out.push_str(&format!("{} items left!\n", store.active_count()));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticklist_core::StoreConfig;

    fn create_test_store() -> TodoStore<MemoryStorage> {
        let mut store = TodoStore::open(MemoryStorage::new(), "todo-storage", StoreConfig::default());
        let done = store.add_todo("Write report").unwrap();
        store.add_todo("Call Sam").unwrap();
        store.toggle_complete(done);
        store
    }

    #[test]
    fn test_filter_flag_overrides_saved_filter() {
        let mut store = create_test_store();
        store.set_filter(Filter::Active);

        let out = render_list(&store, Some(Filter::Completed), false).unwrap();
        assert!(out.contains("[x] Write report"));
        assert!(!out.contains("Call Sam"));
        assert!(out.ends_with("1 items left!\n"));

        // Saved filter is untouched
        assert_eq!(store.filter(), Filter::Active);
    }

    #[test]
    fn test_saved_filter_used_without_flag() {
        let mut store = create_test_store();
        store.set_filter(Filter::Active);

        let out = render_list(&store, None, false).unwrap();
        assert!(out.contains("[ ] Call Sam"));
        assert!(!out.contains("Write report"));
    }

    #[test]
    fn test_json_output_shape() {
        let store = create_test_store();

        let out = render_list(&store, Some(Filter::All), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["filter"], "All");
        assert_eq!(value["active_count"], 1);

        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["text"], "Write report");
        assert_eq!(items[0]["completed"], true);
        assert!(items[0]["id"].is_u64());
    }

    #[test]
    fn test_empty_list_message() {
        let store = TodoStore::open(MemoryStorage::new(), "todo-storage", StoreConfig::default());

        let out = render_list(&store, Some(Filter::Completed), false).unwrap();
        assert_eq!(out, "No items (Completed).\n0 items left!\n");
    }

    #[test]
    fn test_ephemeral_run_stays_off_disk() {
        let cli = Cli::try_parse_from(["ticklist", "--ephemeral", "list"]).unwrap();
        assert!(!cli.writes_to_disk());

        let cli = Cli::try_parse_from(["ticklist", "list", "--json"]).unwrap();
        assert!(cli.writes_to_disk());
    }
}
