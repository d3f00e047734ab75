use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::ui::components::TerminalGuard;
use crate::ui::styles::{header_text, secondary_line, selection_style};
use crate::ui::UiRoute;

/// Options offered when the incoming preset name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    Overwrite,
    Rename,
    Cancel,
}

impl ConflictAction {
    pub const ALL: [ConflictAction; 3] = [
        ConflictAction::Overwrite,
        ConflictAction::Rename,
        ConflictAction::Cancel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConflictAction::Overwrite => "Overwrite",
            ConflictAction::Rename => "Rename",
            ConflictAction::Cancel => "Cancel",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConflictAction::Overwrite => "Replace the existing preset with the collection",
            ConflictAction::Rename => "Save the collection under a different name",
            ConflictAction::Cancel => "Leave the presets file untouched",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Continue,
    Chosen(ConflictAction),
}

/// Cursor over [`ConflictAction::ALL`]; digits 1-3 pick directly.
#[derive(Debug, Default)]
pub struct PickerState {
    selected: usize,
}

impl PickerState {
    pub fn selected(&self) -> ConflictAction {
        ConflictAction::ALL[self.selected]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerEvent {
        let count = ConflictAction::ALL.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
                PickerEvent::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
                PickerEvent::Continue
            }
            KeyCode::Char(digit @ '1'..='3') => {
                self.selected = (digit as u32 - '1' as u32) as usize;
                PickerEvent::Chosen(self.selected())
            }
            KeyCode::Enter => PickerEvent::Chosen(self.selected()),
            KeyCode::Esc => PickerEvent::Chosen(ConflictAction::Cancel),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PickerEvent::Chosen(ConflictAction::Cancel)
            }
            _ => PickerEvent::Continue,
        }
    }
}

pub fn run_conflict_picker(name: &str) -> Result<ConflictAction> {
    let mut guard = TerminalGuard::new()?;
    let mut state = PickerState::default();

    loop {
        guard.draw(|f| render(f, name, &state))?;

        if !event::poll(Duration::from_millis(150))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let PickerEvent::Chosen(action) = state.handle_key(key) {
            guard.restore()?;
            return Ok(action);
        }
    }
}

fn render(f: &mut Frame, name: &str, state: &PickerState) {
    let area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.size());

    let title = Paragraph::new(header_text(format!(
        "A preset named '{name}' already exists."
    )));
    f.render_widget(title, area[0]);

    let label_width = ConflictAction::ALL
        .iter()
        .map(|action| UnicodeWidthStr::width(action.label()))
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = ConflictAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let line = Line::from(vec![
                Span::from(format!("{}. ", idx + 1)),
                Span::from(format!("{:<label_width$}", action.label())).bold(),
                "   ".into(),
                Span::from(action.description()).dim(),
            ]);
            let item = ListItem::new(line);
            if *action == state.selected() {
                item.style(selection_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(UiRoute::ConflictPicker.title()),
    );
    f.render_widget(list, area[1]);

    let help = Paragraph::new(secondary_line(
        "↑/↓ or j/k move • 1-3 or Enter select • Esc cancel",
    ));
    f.render_widget(help, area[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_wrap_around() {
        let mut state = PickerState::default();
        assert_eq!(state.handle_key(key(KeyCode::Up)), PickerEvent::Continue);
        assert_eq!(state.selected(), ConflictAction::Cancel);
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.selected(), ConflictAction::Overwrite);
    }

    #[test]
    fn digits_choose_immediately() {
        let mut state = PickerState::default();
        assert_eq!(
            state.handle_key(key(KeyCode::Char('2'))),
            PickerEvent::Chosen(ConflictAction::Rename)
        );
    }

    #[test]
    fn enter_confirms_current_row() {
        let mut state = PickerState::default();
        state.handle_key(key(KeyCode::Char('j')));
        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            PickerEvent::Chosen(ConflictAction::Rename)
        );
    }

    #[test]
    fn escape_cancels() {
        let mut state = PickerState::default();
        assert_eq!(
            state.handle_key(key(KeyCode::Esc)),
            PickerEvent::Chosen(ConflictAction::Cancel)
        );
    }
}
