//! Terminal UI for browsing a travel itinerary: city tabs, collapsible daily
//! schedules, event details, and a marker map.

mod app;
mod input;
mod map;
mod ui;

use std::{io, time::Duration as StdDuration};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use wayfarer_core::WayfarerService;

use crate::app::App;
use crate::input::Action;

#[derive(Parser)]
#[command(name = "wayfarer", about = "Browse a travel itinerary in the terminal")]
struct Cli {
    /// Path or http(s) URL of the itinerary JSON document.
    #[arg(default_value = "data/itinerary.json")]
    source: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // HTTP + service setup
    let client = Client::builder().user_agent("wayfarer/0.1").build()?;
    let service = WayfarerService::from_spec(client, &cli.source);

    // App state
    let app = App::new();

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app, &service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    service: &WayfarerService,
) -> Result<()> {
    // Show the loading state, then perform the single startup fetch. On
    // failure the app keeps running so the message stays readable.
    terminal.draw(|frame| ui::draw(frame, &app))?;
    app.apply_load(&service.describe(), service.load().await);

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
            }
        }
    }

    Ok(())
}
