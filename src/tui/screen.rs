use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use gerasenha::rand::Rand;
use gerasenha::{CharClass, Generated, Length, Pattern, generate_with};

use super::text;
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_rule, box_top, clear, strength_meter};

/// Checkbox order on screen, matching the key hints.
const CLASS_KEYS: [(char, CharClass); 4] = [
    ('s', CharClass::Symbol),
    ('d', CharClass::Digit),
    ('u', CharClass::Uppercase),
    ('l', CharClass::Lowercase),
];

const PASSWORD_WRAP: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Main,
    Help,
    About,
}

pub struct Screen {
    length: Length,
    pattern: Pattern,
    current: Option<Generated>,
    notice: Option<String>,
    view: View,
    clipboard: Option<ClipboardContext>,
}

impl Screen {
    pub fn new(settings: &Settings) -> Self {
        let mut screen = Self {
            length: settings.pass_length,
            pattern: settings.pattern,
            current: None,
            notice: None,
            view: View::Main,
            clipboard: None,
        };
        screen.regenerate();
        screen
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn current(&self) -> Option<&Generated> {
        self.current.as_ref()
    }

    /// New password for the current selection. With no class selected
    /// nothing is generated.
    pub fn regenerate(&mut self) {
        if self.pattern.is_empty() {
            self.current = None;
            self.notice = Some("Select at least one character class.".into());
            return;
        }
        match Rand::with(|rng| generate_with(self.length, self.pattern, rng)) {
            Ok(generated) => {
                self.current = Some(generated);
                self.notice = None;
            }
            Err(e) => {
                self.current = None;
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            };
        }

        if self.view != View::Main {
            self.view = View::Main;
            return match key.code {
                KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('h') | KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('a') => self.view = View::About,
            KeyCode::Char('c') => self.copy(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => self.regenerate(),
            KeyCode::Char('+') | KeyCode::Up | KeyCode::Right => self.step_length(1),
            KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => self.step_length(-1),
            KeyCode::PageUp => self.step_length(8),
            KeyCode::PageDown => self.step_length(-8),
            KeyCode::Char(c) => {
                if let Some(&(_, class)) = CLASS_KEYS.iter().find(|(k, _)| *k == c) {
                    self.pattern.toggle(class);
                    self.regenerate();
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn step_length(&mut self, delta: i64) {
        let next = Length::clamped(self.length.get() as i64 + delta);
        if next != self.length {
            self.length = next;
            self.regenerate();
        }
    }

    fn copy(&mut self) {
        let Some(generated) = &self.current else {
            return;
        };

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    log::debug!("clipboard unavailable: {e}");
                    self.notice = Some("Clipboard unavailable.".into());
                    return;
                }
            }
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            self.notice = Some(match ctx.set_contents(generated.password().to_owned()) {
                Ok(()) => "Copied to clipboard.".into(),
                Err(e) => format!("Clipboard error: {e}"),
            });
        }
    }

    pub fn draw(&self) {
        clear();
        box_top(text::TITLE);

        let page = match self.view {
            View::Main => None,
            View::Help => Some(text::HELP.to_owned()),
            View::About => Some(text::about()),
        };
        if let Some(page) = page {
            for line in page.lines() {
                box_line(line);
            }
            box_rule();
            box_line("Press any key to return.");
            box_bottom();
            return;
        }

        let boxes: Vec<String> = CLASS_KEYS
            .iter()
            .map(|&(key, class)| {
                let mark = if self.pattern.contains(class) { 'x' } else { ' ' };
                format!("[{mark}] {} ({key})", class.label())
            })
            .collect();
        box_line(&format!("Use:       {}", boxes[..2].join("  ")));
        box_line(&format!("           {}", boxes[2..].join("  ")));

        match self.current() {
            Some(generated) => {
                let strength = generated.strength();
                box_line(&format!(
                    "Length:    {:<4}{} {} bits, {}",
                    self.length.get(),
                    strength_meter(strength),
                    generated.entropy(),
                    strength,
                ));
                // ASCII only, so byte chunks are char chunks
                let password = generated.password().as_bytes();
                for (i, chunk) in password.chunks(PASSWORD_WRAP).enumerate() {
                    let label = if i == 0 { "Password:" } else { "" };
                    let mut line = format!("{label:<11}{}", String::from_utf8_lossy(chunk));
                    box_line(&line);
                    line.zeroize();
                }
            }
            None => {
                box_line(&format!("Length:    {}", self.length));
                box_line("Password:");
            }
        }

        box_rule();
        box_line(self.notice.as_deref().unwrap_or(""));
        box_line("[Enter] new  [+/-] length  [c] copy  [h] help  [q] quit");
        box_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn screen() -> Screen {
        Screen::new(&Settings::default())
    }

    #[test]
    fn starts_with_a_password() {
        let screen = screen();
        let generated = screen.current().unwrap();
        assert_eq!(generated.password().len(), 8);
        assert_eq!(generated.entropy(), 47);
        assert_eq!(screen.pattern(), Pattern::ALPHANUMERIC);
    }

    #[test]
    fn toggling_classes() {
        let mut screen = screen();
        screen.handle_key(key('s'));
        assert_eq!(screen.pattern(), Pattern::ALL);
        assert_eq!(screen.current().unwrap().entropy(), 49);

        screen.handle_key(key('s'));
        assert_eq!(screen.pattern(), Pattern::ALPHANUMERIC);
    }

    #[test]
    fn empty_selection_generates_nothing() {
        let mut screen = screen();
        for c in ['l', 'u', 'd'] {
            screen.handle_key(key(c));
        }
        assert!(screen.pattern().is_empty());
        assert!(screen.current().is_none());
        assert!(screen.notice.is_some());

        screen.handle_key(key('d'));
        assert!(screen.current().is_some());
        assert!(screen.notice.is_none());
    }

    #[test]
    fn length_is_clamped() {
        let mut screen = screen();
        for _ in 0..10 {
            screen.handle_key(key('-'));
        }
        assert_eq!(screen.length().get(), 4);
        assert_eq!(screen.current().unwrap().password().len(), 4);

        for _ in 0..10 {
            screen.handle_key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
        }
        assert_eq!(screen.length().get(), 64);
    }

    #[test]
    fn quit_keys() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key('q')), Action::Quit);
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Action::Quit
        );
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut screen = screen();
        screen.handle_key(key('h'));
        assert_eq!(screen.view, View::Help);
        assert_eq!(screen.handle_key(key('x')), Action::Continue);
        assert_eq!(screen.view, View::Main);
    }

    #[test]
    fn about_view() {
        let mut screen = screen();
        let password = screen.current().unwrap().password().to_owned();

        screen.handle_key(key('a'));
        assert_eq!(screen.view, View::About);
        // Keys close the view without acting on the screen
        screen.handle_key(key('s'));
        assert_eq!(screen.view, View::Main);
        assert_eq!(screen.pattern(), Pattern::ALPHANUMERIC);
        assert_eq!(screen.current().unwrap().password(), password);
    }

    #[test]
    fn about_text_names_version_and_license() {
        let about = text::about();
        assert!(about.contains(env!("CARGO_PKG_VERSION")));
        assert!(about.contains("GPL-3.0-or-later"));
        assert!(about.lines().all(|line| line.chars().count() <= 60));
    }
}
