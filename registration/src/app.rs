//! Terminal model of the registration form.
//!
//! [`RegistrationApp`] owns the form controller and a focus ring over the
//! fields and the submit button. It turns key presses into change, blur and
//! submit calls on the controller and renders the form as styled lines. It
//! knows nothing about the terminal itself; see the binary for that.

use formkit::{FieldBinding, FieldKind, FormController, RawInput, SubmitOutcome, Value};

use crate::error::Result;
use crate::values::RegistrationValues;

/// Keys the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep going.
    Continue,
    /// The form was submitted with these values.
    Submitted(RegistrationValues),
    /// The user asked to leave.
    Quit,
}

/// How a span of text should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Title,
    Focused,
    Muted,
    Error,
    Success,
}

/// A run of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.spans.push(Span::new(text, tone));
    }

    /// The line's text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Outcome of the last submit, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Editing,
    Rejected(usize),
    Submitted,
}

/// The registration form as a keyboard-driven terminal app.
#[derive(Debug)]
pub struct RegistrationApp {
    form: FormController,
    bindings: Vec<FieldBinding>,
    /// Index into `bindings`; `bindings.len()` is the submit button.
    focus: usize,
    status: Status,
    submissions: Vec<RegistrationValues>,
}

impl RegistrationApp {
    pub fn new(form: FormController) -> Self {
        let bindings = form.bindings();
        Self {
            form,
            bindings,
            focus: 0,
            status: Status::Editing,
            submissions: Vec::new(),
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Every successfully submitted snapshot, oldest first.
    pub fn submissions(&self) -> &[RegistrationValues] {
        &self.submissions
    }

    /// Name of the focused field, `None` when the submit button has focus.
    pub fn focused_field(&self) -> Option<&str> {
        self.bindings.get(self.focus).map(|b| b.name())
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: Key) -> Result<AppAction> {
        match key {
            Key::Escape => return Ok(AppAction::Quit),
            Key::Tab => self.move_focus(1)?,
            Key::BackTab => self.move_focus(self.bindings.len())?,
            Key::Enter => return self.submit(),
            _ => {
                if let Some(binding) = self.bindings.get(self.focus).cloned() {
                    self.edit(&binding, key)?;
                }
            }
        }
        Ok(AppAction::Continue)
    }

    /// Submit the form, as the submit button does.
    pub fn submit(&mut self) -> Result<AppAction> {
        let outcome = self.form.submit(|values| {
            log::info!(
                "Submitted: {}",
                serde_json::to_string(values).unwrap_or_default()
            );
        });

        match outcome {
            SubmitOutcome::Submitted => {
                let values = RegistrationValues::try_from(self.form.values())?;
                self.status = Status::Submitted;
                self.submissions.push(values.clone());
                Ok(AppAction::Submitted(values))
            }
            SubmitOutcome::Rejected { errors } => {
                self.status = Status::Rejected(errors);
                if let Some(field) = self.form.first_invalid_field() {
                    self.focus = self
                        .bindings
                        .iter()
                        .position(|b| b.name() == field)
                        .unwrap_or(self.focus);
                }
                Ok(AppAction::Continue)
            }
        }
    }

    fn move_focus(&mut self, step: usize) -> Result<()> {
        if let Some(binding) = self.bindings.get(self.focus) {
            binding.blur(&mut self.form)?;
        }
        let stops = self.bindings.len() + 1;
        self.focus = (self.focus + step) % stops;
        Ok(())
    }

    fn edit(&mut self, binding: &FieldBinding, key: Key) -> Result<()> {
        let current = self.form.value(binding.name()).cloned().unwrap_or_default();

        let input = match (binding.kind(), key) {
            (kind, Key::Char(c)) if kind.is_textual() => {
                let mut text = current.as_str().unwrap_or_default().to_string();
                text.push(c);
                RawInput::Text(text)
            }
            (kind, Key::Backspace) if kind.is_textual() => {
                let mut text = current.as_str().unwrap_or_default().to_string();
                if text.pop().is_none() {
                    return Ok(());
                }
                RawInput::Text(text)
            }
            (FieldKind::Checkbox, Key::Char(' ')) => {
                RawInput::Checked(!current.as_bool().unwrap_or(false))
            }
            (FieldKind::Radio, Key::Up | Key::Left) => radio_step(binding, &current, false),
            (FieldKind::Radio, Key::Down | Key::Right | Key::Char(' ')) => {
                radio_step(binding, &current, true)
            }
            _ => return Ok(()),
        };

        binding.change(&mut self.form, input)?;
        if self.status != Status::Editing {
            self.status = Status::Editing;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the form as styled lines.
    pub fn render(&self) -> Vec<Line> {
        let mut lines = Vec::new();

        let mut title = Line::default();
        title.push(
            format!("Registration ({} validation)", self.form.strategy()),
            Tone::Title,
        );
        lines.push(title);
        lines.push(Line::default());

        for (index, binding) in self.bindings.iter().enumerate() {
            self.render_field(index, binding, &mut lines);
        }

        lines.push(Line::default());
        let mut submit = Line::default();
        let focused = self.focus == self.bindings.len();
        submit.push(if focused { "> " } else { "  " }, Tone::Focused);
        submit.push("[ submit ]", if focused { Tone::Focused } else { Tone::Normal });
        lines.push(submit);

        let mut status = Line::default();
        match self.status {
            Status::Editing => status.push("", Tone::Muted),
            Status::Rejected(count) => {
                status.push(format!("{} field(s) need attention", count), Tone::Error)
            }
            Status::Submitted => status.push("Submitted!", Tone::Success),
        }
        lines.push(status);

        let mut help = Line::default();
        help.push(
            "Tab/Shift+Tab move  Space toggle  Up/Down choose  Enter submit  Esc quit",
            Tone::Muted,
        );
        lines.push(help);

        lines
    }

    fn render_field(&self, index: usize, binding: &FieldBinding, lines: &mut Vec<Line>) {
        let focused = index == self.focus;
        let value = self.form.value(binding.name()).cloned().unwrap_or_default();
        let label = binding.label().unwrap_or(binding.name());

        let mut line = Line::default();
        line.push(if focused { "> " } else { "  " }, Tone::Focused);
        line.push(
            format!("{}: ", label),
            if focused { Tone::Focused } else { Tone::Normal },
        );

        match binding.kind() {
            FieldKind::Password => {
                let len = value.as_str().map(|s| s.chars().count()).unwrap_or(0);
                line.push("*".repeat(len), Tone::Normal);
            }
            FieldKind::Checkbox => {
                let mark = if value.as_bool().unwrap_or(false) { "[x]" } else { "[ ]" };
                line.push(mark, Tone::Normal);
            }
            FieldKind::Radio => {}
            _ => line.push(value.as_str().unwrap_or_default(), Tone::Normal),
        }

        if let Some(error) = self.form.error(binding.name()) {
            line.push(format!("  {}", error.message), Tone::Error);
        }
        lines.push(line);

        if binding.kind() == FieldKind::Radio {
            for option in binding.options() {
                let selected = value.as_str() == Some(option.value.as_str());
                let mut line = Line::default();
                line.push(
                    format!("    {} {}", if selected { "(*)" } else { "( )" }, option.label),
                    Tone::Normal,
                );
                lines.push(line);
            }
        }
    }
}

/// Select the next or previous radio option, wrapping around.
fn radio_step(binding: &FieldBinding, current: &Value, forward: bool) -> RawInput {
    let options = binding.options();
    let len = options.len();
    let position = current
        .as_str()
        .and_then(|v| options.iter().position(|o| o.value == v));

    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    RawInput::radio(options[next].value.clone(), true)
}
