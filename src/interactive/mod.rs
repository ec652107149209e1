pub mod app;
pub mod event;
pub mod layout;
pub mod notifications;
pub mod panels;
pub mod popups;
pub mod ui;

use std::io;
use std::panic;
use std::sync::{mpsc, Arc};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use self::app::{DashboardApp, MountRequest};
use self::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::client::ApiClient;
use crate::error::{ErrorContext, OctofitResult};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::octofit_error;
use crate::views::{load_view, Route};

const TICK_RATE_MS: u64 = 250;

/// Run the interactive dashboard starting at `route`.
pub async fn run(mut context: CliContext, route: Route) -> OctofitResult<()> {
    log_info(&format!("Starting dashboard against {}", context.base_url()));
    let client = context.client()?;

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    log_debug("Terminal initialized");

    let result = run_loop(&mut terminal, client, route);

    restore_terminal(&mut terminal)?;

    log_info("Exiting dashboard");
    result
}

fn setup_terminal() -> OctofitResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()
        .map_err(|e| octofit_error!(TerminalError, "failed to enable raw mode: {}", e))?;

    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));

    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            // Leave the shell usable when the screen could not be taken over
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            log_error(&format!("Terminal setup failed: {}", e));
            Err(octofit_error!(TerminalError, "failed to start the dashboard: {}", e))
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> OctofitResult<()> {
    disable_raw_mode().context("Failed to leave raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave the alternate screen")?;
    terminal.show_cursor().context("Failed to show the cursor")?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: Arc<ApiClient>,
    route: Route,
) -> OctofitResult<()> {
    let mut app = DashboardApp::new(client.base_url());
    let events = EventHandler::new(TICK_RATE_MS);

    if let Some(request) = app.mount(route) {
        spawn_fetch(&client, request, events.sender());
    }

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Fetch tasks need runtime workers while this thread waits on input
        let event = match tokio::task::block_in_place(|| events.recv()) {
            Ok(event) => event,
            Err(_) => break,
        };

        match event {
            Event::Key(key_event) => {
                if let Some(request) = app.handle_key(key_event.code) {
                    spawn_fetch(&client, request, events.sender());
                }
            }
            Event::Tick => app.tick(),
            Event::Fetched { generation, state } => {
                app.apply_fetch(generation, state);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run one view's lifecycle in the background and post the settled state.
fn spawn_fetch(client: &Arc<ApiClient>, request: MountRequest, sender: mpsc::Sender<Event>) {
    let client = Arc::clone(client);
    tokio::spawn(async move {
        let state = load_view(&client, request.kind).await;
        // The receiver is gone once the dashboard has exited
        let _ = sender.send(Event::Fetched {
            generation: request.generation,
            state,
        });
    });
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log_panic_info(info);
        default_hook(info);
    }));
}
