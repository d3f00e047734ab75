use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::components::{centered_rect, split_vertical, TerminalGuard};
use crate::ui::styles::{error_line, secondary_line, ACCENT};
use crate::ui::UiRoute;

const MAX_INPUT_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Continue,
    Submit(String),
    Cancel,
}

/// Editable line plus the last validation message.
#[derive(Debug, Default)]
pub struct PromptState {
    buffer: String,
    error: Option<String>,
}

impl PromptState {
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            error: None,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_key<V>(&mut self, key: KeyEvent, validate: &V) -> PromptEvent
    where
        V: Fn(&str) -> Result<String>,
    {
        match key.code {
            KeyCode::Esc => PromptEvent::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptEvent::Cancel
            }
            KeyCode::Enter => match validate(self.buffer.as_str()) {
                Ok(value) => PromptEvent::Submit(value),
                Err(err) => {
                    self.error = Some(err.to_string());
                    PromptEvent::Continue
                }
            },
            KeyCode::Backspace => {
                self.buffer.pop();
                self.error = None;
                PromptEvent::Continue
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                if self.buffer.chars().count() < MAX_INPUT_LEN {
                    self.buffer.push(ch);
                    self.error = None;
                } else {
                    self.error = Some("Input is too long".to_string());
                }
                PromptEvent::Continue
            }
            _ => PromptEvent::Continue,
        }
    }
}

/// Single-line input dialog; `None` when the user backs out.
pub fn run_text_prompt<V>(
    route: UiRoute,
    label: &str,
    hint: &str,
    initial: &str,
    validate: V,
) -> Result<Option<String>>
where
    V: Fn(&str) -> Result<String>,
{
    let mut guard = TerminalGuard::new()?;
    let mut state = PromptState::with_text(initial);

    loop {
        guard.draw(|f| render(f, route, label, hint, &state))?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key, &validate) {
            PromptEvent::Continue => {}
            PromptEvent::Submit(value) => {
                guard.restore()?;
                return Ok(Some(value));
            }
            PromptEvent::Cancel => {
                guard.restore()?;
                return Ok(None);
            }
        }
    }
}

fn render(f: &mut Frame, route: UiRoute, label: &str, hint: &str, state: &PromptState) {
    let area = centered_rect(70, 40, f.size());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(route.title());
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let chunks = split_vertical(
        inner,
        &[
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ],
    );

    f.render_widget(Paragraph::new(secondary_line(hint.to_string())), chunks[0]);

    let mut display = state.buffer().to_string();
    display.push('_');
    let input = Paragraph::new(display)
        .style(Style::default().fg(ACCENT))
        .block(Block::default().borders(Borders::ALL).title(label.to_string()));
    f.render_widget(input, chunks[1]);

    let footer = match state.error() {
        Some(message) => error_line(message.to_string()),
        None => secondary_line("Enter to confirm • Esc to cancel • Backspace delete"),
    };
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn non_empty(value: &str) -> Result<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(AppError::Validation("Name cannot be empty".to_string()))
        } else {
            Ok(trimmed.to_string())
        }
    }

    fn type_text(state: &mut PromptState, text: &str) {
        for ch in text.chars() {
            assert_eq!(
                state.handle_key(key(KeyCode::Char(ch)), &non_empty),
                PromptEvent::Continue
            );
        }
    }

    #[test]
    fn submits_validated_value() {
        let mut state = PromptState::default();
        type_text(&mut state, " My Preset ");

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &non_empty),
            PromptEvent::Submit("My Preset".to_string())
        );
    }

    #[test]
    fn validation_error_keeps_dialog_open_until_edited() {
        let mut state = PromptState::default();

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &non_empty),
            PromptEvent::Continue
        );
        assert_eq!(state.error(), Some("Name cannot be empty"));

        type_text(&mut state, "x");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn backspace_edits_initial_text() {
        let mut state = PromptState::with_text("Base");
        state.handle_key(key(KeyCode::Backspace), &non_empty);
        type_text(&mut state, "ics");
        assert_eq!(state.buffer(), "Basics");
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        let mut state = PromptState::default();
        assert_eq!(
            state.handle_key(key(KeyCode::Esc), &non_empty),
            PromptEvent::Cancel
        );
        assert_eq!(
            state.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &non_empty
            ),
            PromptEvent::Cancel
        );
    }
}
