//! Dish Console - terminal front-end for the dish catalog
//!
//! Run: DISH_API_URL=http://localhost:9000 cargo run -p dish-console

mod app;
mod logger;
mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dish_client::{ClientConfig, Outcome};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::app::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logger::init_logger();

    let config = ClientConfig::from_env();
    let gateway = config.build_gateway()?;
    tracing::info!(
        "Dish catalog at {} (timeout {}s)",
        gateway.base_url(),
        config.timeout
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut outcomes) = App::new(Arc::new(gateway));
    app.mount();

    let res = run_app(&mut terminal, &mut app, &mut outcomes).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    outcomes: &mut mpsc::UnboundedReceiver<Outcome>,
) -> io::Result<()> {
    loop {
        app.columns = ui::grid_columns(terminal.size()?.width);
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(outcome) = outcomes.try_recv() {
            app.on_outcome(outcome);
        }
        app.tick();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    app.handle_key(key);
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
