//! Raw-mode terminal setup and the dashboard event loop.

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};

use super::{reload, ui, Action, App, Source};
use crate::cli::types::time::Season;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the dashboard until the user quits. The terminal is restored even
/// when the loop fails.
pub async fn run(mut source: Source, year: Season) -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(source.label(), year, source.supports_search());
    let res = run_app(&mut terminal, &mut app, &mut source).await;

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &mut Source,
) -> anyhow::Result<()> {
    let mut pending = Some(Action::ALL);

    loop {
        if let Some(action) = pending.take() {
            terminal.draw(|f| ui::draw(f, app))?;
            reload(source, app, action).await;
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.on_key(key) {
                        Action::Quit => return Ok(()),
                        Action::None => {}
                        action => pending = Some(action),
                    }
                }
            }
        }
    }
}
