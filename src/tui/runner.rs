//! Terminal lifecycle and the async event loop.
//!
//! Raw mode, alternate screen, and mouse capture, restored on every exit
//! path including panics. One spawned task performs the menu fetch and
//! delivers the result over a bounded channel; quitting drops the
//! receiver, so a response that resolves after teardown goes nowhere.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::menu::MenuClient;

use super::app::App;
use super::input::handle_key;
use super::layout;
use super::mouse::handle_mouse;

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, event::DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the menu screen until the user quits.
///
/// The menu is fetched exactly once, in the background; the UI starts on
/// the loading placeholder and swaps to the item list when (and if) the
/// document arrives.
pub async fn run(client: MenuClient, tick_ms: u64) -> Result<()> {
    // Restore the terminal before the panic message prints
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, event::DisableMouseCapture);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let result = run_loop(&mut terminal, &mut app, client, tick_ms).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: MenuClient,
    tick_ms: u64,
) -> Result<()> {
    let (load_tx, mut load_rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let _ = load_tx.send(client.fetch_menu().await).await;
    });
    let mut load_pending = true;

    let mut tick = tokio::time::interval(Duration::from_millis(tick_ms.max(10)));
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| layout::draw(f, app))?;

        tokio::select! {
            result = load_rx.recv(), if load_pending => {
                load_pending = false;
                if let Some(result) = result {
                    app.apply_load(result);
                }
            }
            _ = tick.tick() => {}
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => handle_key(app, key),
                    Some(Ok(Event::Mouse(mouse))) => handle_mouse(app, mouse),
                    Some(Ok(Event::Resize(_, _))) => {}
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
