use std::io::{self, Write};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use registration::{Key, Line, Tone};

/// Raw-mode terminal on the alternate screen. Restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Block until the next key press the form understands.
    pub fn next_key(&self) -> io::Result<Key> {
        loop {
            if let CrosstermEvent::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(key) = map_key(key)
            {
                return Ok(key);
            }
        }
    }

    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.stdout, cursor::MoveTo(1, y))?;
            for span in &line.spans {
                let (color, bold) = style(span.tone);
                if bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    self.stdout,
                    SetForegroundColor(color),
                    Print(&span.text),
                    ResetColor,
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn style(tone: Tone) -> (Color, bool) {
    match tone {
        Tone::Normal => (Color::Reset, false),
        Tone::Title => (Color::Cyan, true),
        Tone::Focused => (Color::Yellow, true),
        Tone::Muted => (Color::DarkGrey, false),
        Tone::Error => (Color::Red, false),
        Tone::Success => (Color::Green, true),
    }
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::Escape),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}
