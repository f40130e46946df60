use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter a city name";
pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Loading...";

/// Label row + 3-row input.
pub const FORM_HEIGHT: u16 = 4;

/// Text label of the submit control.
pub fn button_label(is_loading: bool) -> &'static str {
    if is_loading {
        LOADING_LABEL
    } else {
        SEARCH_LABEL
    }
}

/// Location text field plus submit control
pub struct SearchForm {
    input: TextInput,
}

pub struct SearchFormProps<'a> {
    pub value: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for SearchForm {
    type Props<'a> = SearchFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            // Submit control is disabled while a lookup is in flight
            KeyCode::Enter if props.is_loading => return Vec::new(),
            KeyCode::Enter => return vec![(props.on_submit)(props.value.to_string())],
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input + button
        ])
        .split(area);

        let label = Line::from(vec![Span::styled(
            "Location",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(Paragraph::new(label), rows[0]);

        let label = button_label(props.is_loading);
        let button_width = label.len() as u16 + 4;
        let cols = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(button_width),
        ])
        .split(rows[1]);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, cols[0], input_props);

        let button_style = if props.is_loading {
            Style::default().fg(Color::DarkGray).bg(Color::Rgb(40, 40, 48))
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        let button_row = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(cols[2]);
        frame.render_widget(
            Paragraph::new(Line::from(format!("  {label}  ")).centered()).style(button_style),
            button_row[0],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn props(value: &str, is_loading: bool) -> SearchFormProps<'_> {
        SearchFormProps {
            value,
            is_loading,
            is_focused: true,
            on_change: Action::LocationChange,
            on_submit: Action::LookupSubmit,
        }
    }

    fn enter() -> EventKind {
        EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_submits_raw_value() {
        let mut form = SearchForm::new();
        let actions: Vec<_> = form
            .handle_event(&enter(), props(" Lahore ", false))
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::LookupSubmit(" Lahore ".into()));
    }

    #[test]
    fn test_enter_ignored_while_loading() {
        let mut form = SearchForm::new();
        let actions: Vec<_> = form
            .handle_event(&enter(), props("Lahore", true))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(false), "Search");
        assert_eq!(button_label(true), "Loading...");
    }
}
