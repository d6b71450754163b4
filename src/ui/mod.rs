mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{ExitReason, FormField, LogBuffer};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{
    delivery::ShareTarget, registration::RegistrationClient, session::Session, share::ShareFlags,
    storage::KeyValueStore,
};

/// Entry point for running the stats view.
pub fn run_ui<S, C>(
    session: Session<S, C>,
    share_flags: ShareFlags,
    delivery: Box<dyn ShareTarget>,
) -> Result<ExitReason>
where
    S: KeyValueStore + Clone,
    C: RegistrationClient,
{
    let logs = LogBuffer::new();
    let mut app = App::new(session, share_flags, delivery, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
