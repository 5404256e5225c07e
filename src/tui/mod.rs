// Terminal dashboard: screens, rendering, and the event loop.
mod app;
mod events;
mod forms;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::{App, Screen};
pub use terminal::TerminalManager;

use crate::api::{ApiClient, Dispatcher};

/// Run the interactive dashboard until the user quits.
pub fn run_interactive(client: ApiClient, operator: String) -> Result<()> {
    let (dispatcher, rx) = Dispatcher::new(client);
    let mut app = App::new(dispatcher, rx, operator);

    let mut manager = TerminalManager::new()?;
    let result = app.run(manager.terminal_mut());
    manager.restore()?;

    result
}
