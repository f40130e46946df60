use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::messages::{location_message, temperature_message, weather_message};
use crate::state::WeatherData;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const TEMPERATURE_ICON: &str = "\u{1f321}\u{fe0f}";
pub const CONDITION_ICON: &str = "\u{2601}\u{fe0f}";
pub const LOCATION_ICON: &str = "\u{1f4cd}";

/// Error line and result lines below the form
pub struct ConditionsPanel;

pub struct ConditionsPanelProps<'a> {
    pub weather: Option<&'a WeatherData>,
    pub error: Option<&'a str>,
    pub local_hour: u32,
}

/// The three display strings for one result, in render order.
pub fn result_lines(
    weather: &WeatherData,
    local_hour: u32,
) -> [(&'static str, &'static str, String); 3] {
    [
        (
            TEMPERATURE_ICON,
            "Temperature",
            temperature_message(weather.temperature, &weather.unit),
        ),
        (CONDITION_ICON, "Conditions", weather_message(&weather.description)),
        (
            LOCATION_ICON,
            "Location",
            location_message(&weather.location, local_hour),
        ),
    ]
}

impl Component<Action> for ConditionsPanel {
    type Props<'a> = ConditionsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(error) = props.error {
            lines.push(Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled(error.to_string(), Style::default().fg(Color::Red).bold()),
            ]));
            lines.push(Line::default());
        }

        if let Some(weather) = props.weather {
            for (icon, label, message) in result_lines(weather, props.local_hour) {
                lines.push(Line::from(vec![
                    Span::raw(format!("{icon} ")),
                    Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                    Span::raw(message),
                ]));
            }
        }

        if lines.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
