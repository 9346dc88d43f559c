//! CLI entry point for the menu viewer.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aahaar_menu::menu::{DEFAULT_MENU_URL, MenuClient};
use aahaar_menu::tui::runner;

#[derive(Debug, Parser)]
#[command(name = "aahaar-menu", about = "Terminal viewer for the Aahaar restaurant menu")]
struct Args {
    /// Menu endpoint (overrides the published URL, e.g. for a mock server)
    #[arg(long, default_value = DEFAULT_MENU_URL)]
    url: String,

    /// Redraw tick in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; the TUI owns the alternate screen on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = MenuClient::with_url(args.url);
    runner::run(client, args.tick_ms).await
}
