#![forbid(unsafe_code)]

//! `greeny` — CLI driver for the Greeny Store cart core.
//!
//! Stands in for the storefront's DOM layer: every subcommand maps to a
//! page action (open/add, cart edits, checkout, registration, contact).

mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::EnvFilter;

use greeny_core::config::{self, DATA_DIR_ENV};

#[derive(Parser, Debug)]
#[command(author, version, about = "greeny: Greeny Store cart CLI", long_about = None)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Storage root (overrides GREENY_DATA_DIR and the config file).
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Manage the shopping cart",
        after_help = "EXAMPLES:\n    # Add two salads with a note\n    greeny cart add --id 101 --name \"Kale Salad\" --price 7.00 --qty 2 --note \"extra dressing\"\n\n    # Add a smoothie bundle (three choices required)\n    greeny cart add --id 905 --name \"Smoothie Trio Deal\" --price 14.50 \\\n        --choice \"Energy Boost\" --choice \"Green Detox\" --choice \"Mango Delight\"\n\n    # Inspect and edit\n    greeny cart list\n    greeny cart decrease 0\n    greeny cart remove 1"
    )]
    Cart(cmd::cart::CartArgs),

    #[command(
        about = "Run the checkout gate",
        long_about = "Decide the next screen: payment when a registered user exists, registration otherwise. An empty cart is blocked."
    )]
    Checkout(cmd::checkout::CheckoutArgs),

    #[command(about = "Register a customer account")]
    Register(cmd::register::RegisterArgs),

    #[command(about = "Send a message to customer service")]
    Contact(cmd::contact::ContactArgs),

    #[command(about = "List bundle-deal choice menus")]
    Catalog(cmd::catalog::CatalogArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GREENY_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let user_config = config::load_user_config()?;
    let data_dir = config::resolve_data_dir(
        cli.store_dir.clone(),
        std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        &user_config,
    );
    tracing::debug!(data_dir = %data_dir.display(), "resolved storage root");

    let output = cli.output_mode();
    match &cli.command {
        Commands::Cart(args) => cmd::cart::run_cart(args, output, &data_dir),
        Commands::Checkout(args) => cmd::checkout::run_checkout(args, output, &data_dir),
        Commands::Register(args) => cmd::register::run_register(args, output, &data_dir),
        Commands::Contact(args) => cmd::contact::run_contact(args, output),
        Commands::Catalog(args) => cmd::catalog::run_catalog(args, output),
    }
}
