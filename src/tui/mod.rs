//! Interactive terminal screen.

mod screen;
mod text;

use crossterm::event::{self, Event, KeyEventKind};

use crate::cli::CliError;
use crate::settings::Settings;
use crate::terminal::ScreenGuard;

pub use screen::{Action, Screen};

/// Run the interactive screen until the user quits.
pub fn run(settings: Settings) -> Result<(), CliError> {
    let mut screen = Screen::new(&settings);
    let mut guard = ScreenGuard::new()?;
    log::debug!(
        "interactive screen: length {}, pattern {}",
        screen.length(),
        screen.pattern().bits()
    );

    loop {
        screen.draw();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if screen.handle_key(key) == Action::Quit {
                    break;
                }
            }
            _ => {}
        }
    }

    guard.restore();
    Ok(())
}
