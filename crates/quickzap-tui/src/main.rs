use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use quickzap_core::{
    load_catalog, logging, Catalog, Composer, Config, FilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore, SystemOpener,
};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, Tui};

#[derive(Parser)]
#[command(name = "quickzap")]
#[command(version, about = "Send WhatsApp messages without saving the contact")]
struct Cli {
    /// Use the built-in country list instead of fetching it
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive composer (default)
    Tui,
    /// Print the wa.me link for a number
    Link {
        /// Phone number, any formatting
        phone: String,
        /// Message to pre-fill
        #[arg(short, long, default_value = "")]
        message: String,
        /// ISO country code (defaults to the stored default)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Open the wa.me link in the browser
    Send {
        /// Phone number, any formatting
        phone: String,
        /// Message to pre-fill
        #[arg(short, long, default_value = "")]
        message: String,
        /// ISO country code (defaults to the stored default)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// List countries, optionally filtered by name or code
    Countries {
        /// Case-insensitive name or ISO code filter
        query: Option<String>,
    },
    /// Show or set the default country
    Default {
        /// ISO country code to store
        code: Option<String>,
    },
}

type Store = Box<dyn PreferenceStore>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Could not load config, using defaults");
        Config::new()
    });

    let source = config.catalog_source(cli.offline);
    let catalog = load_catalog(&source).await;
    let store = open_store();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let composer = Composer::new(catalog, store)?
                .with_persist_selection_as_default(config.persist_selection_as_default);
            let app = App::new(composer, Box::new(SystemOpener), source.display_name());
            run_tui(app).await?;
        }
        Commands::Link { phone, message, country } => {
            let composer = one_shot(catalog, store, &phone, &message, country.as_deref())?;
            match composer.compose_link() {
                Some(link) => println!("{link}"),
                None => bail!("Phone number is empty"),
            }
        }
        Commands::Send { phone, message, country } => {
            let composer = one_shot(catalog, store, &phone, &message, country.as_deref())?;
            match composer.send(&SystemOpener)? {
                Some(link) => println!("Opened {link}"),
                None => bail!("Phone number is empty"),
            }
        }
        Commands::Countries { query } => list_countries(&catalog, query.as_deref().unwrap_or("")),
        Commands::Default { code } => {
            let mut composer = Composer::new(catalog, store)?;
            if let Some(code) = code {
                composer.set_default_by_code(&code)?;
            }
            println!("Default country: {}", composer.selected_country().label());
        }
    }

    Ok(())
}

/// File-backed preferences, or an in-memory store if the file can't be used.
fn open_store() -> Store {
    match FilePreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "Preferences unavailable, defaults will not be remembered");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

/// Composer for a single command-line link. A `--country` override is
/// used for this link only and never becomes the default.
fn one_shot(
    catalog: Catalog,
    store: Store,
    phone: &str,
    message: &str,
    country: Option<&str>,
) -> Result<Composer<Store>> {
    let mut composer = Composer::new(catalog, store)?.with_persist_selection_as_default(false);
    if let Some(code) = country {
        composer.select_by_code(code)?;
    }
    composer.set_phone_digits(phone);
    composer.set_message_text(message);
    Ok(composer)
}

fn list_countries(catalog: &Catalog, query: &str) {
    let matches = catalog.filter(query);
    if matches.is_empty() {
        println!("No countries match '{query}'");
        return;
    }
    for country in matches {
        println!("{:<4} {}", country.code, country.label());
    }
}

async fn run_tui(mut app: App) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    info!("TUI started");
    let result = event_loop(&mut app, &mut terminal, &mut events).await;

    // Always restore the terminal, even after an error
    tui::restore()?;
    info!("TUI exited");

    result
}

async fn event_loop(app: &mut App, terminal: &mut Tui, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event)?,
            None => break,
        }
    }
    Ok(())
}
