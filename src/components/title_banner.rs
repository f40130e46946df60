use artbox::{
    integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer, fonts,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub const TITLE: &str = "Weather Widget";
pub const SUBTITLE: &str = "Search for the current Weather Conditions";

pub struct TitleBanner;

pub struct TitleBannerProps<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    /// Tints the title; gray when nothing has been looked up yet
    pub temperature: Option<f64>,
}

/// Rows reserved below the FIGlet title: 1 subtitle line.
pub const BANNER_OVERHEAD: u16 = 1;

fn gradient_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        Some(t) if t < 10.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        Some(t) if t < 20.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(190, 220, 120)),
        Some(t) if t < 30.0 => (ArtColor::rgb(255, 220, 100), ArtColor::rgb(255, 180, 80)),
        Some(_) => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(220, 220, 220)),
    }
}

impl Component<Action> for TitleBanner {
    type Props<'a> = TitleBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),                  // FIGlet title
            Constraint::Length(BANNER_OVERHEAD), // Subtitle
        ])
        .split(area);

        let (start, end) = gradient_colors(props.temperature);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
        frame.render_widget(ArtBox::new(&renderer, props.title), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            props.subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
