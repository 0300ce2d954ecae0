use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use slugifier_core::config::Config;
use std::{
    io,
    time::{Duration, Instant},
};

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::ui;

/// Short enough that the spinner-to-check transition looks immediate.
const TICK: Duration = Duration::from_millis(50);

/// Run the interactive slug form until the user quits.
pub fn run_tui(config: &Config) -> Result<()> {
    let mut app = App::new(config, Box::new(SystemClipboard));

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("tui started");
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("tui exited");

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events on platforms that report them.
                if key.kind == KeyEventKind::Press && app.handle_key(key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= TICK {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}
