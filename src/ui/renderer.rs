//! Terminal setup, teardown and the async event loop.

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::api::PortalClient;
use crate::config::Config;
use crate::constants::API_TOKEN_ENV;
use crate::router::Route;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};

/// Build the portal client, set up the terminal and run the application
/// until the user quits.
pub async fn run_app(config: Config, initial_route: Route) -> anyhow::Result<()> {
    let token = std::env::var(API_TOKEN_ENV).ok();
    let provider = Arc::new(PortalClient::new(&config.api, token)?);
    let ctx = AppContext::new(provider, config);
    let mouse_enabled = ctx.config.ui.mouse_enabled;

    // Setup terminal. Focus reporting is the subscription behind the
    // chrome re-assert triggers; it is torn down symmetrically below.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(ctx);
    let mut event_handler = EventHandler::new();

    // Terminal is ready: chrome activation, session resolve, first route
    app.on_terminal_ready(initial_route);

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    app.on_terminal_teardown();
    if mouse_enabled {
        execute!(io::stdout(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) | EventType::FocusGained) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Apply completed background work; render only when
                // something actually arrived
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    for action in background_actions {
                        app.dispatch(action);
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
