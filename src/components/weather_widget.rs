use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::search_form::FORM_HEIGHT;
use super::title_banner::{SUBTITLE, TITLE};
use super::{
    Component, ConditionsPanel, ConditionsPanelProps, SearchForm, SearchFormProps, TitleBanner,
    TitleBannerProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Widest the card gets on large terminals.
pub const CARD_MAX_WIDTH: u16 = 76;

/// Props for WeatherWidget - read-only view of state
pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole lookup widget: banner, form, results and key hints
#[derive(Default)]
pub struct WeatherWidget {
    form: SearchForm,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> SearchFormProps<'a> {
        SearchFormProps {
            value: &state.location,
            is_loading: state.is_loading,
            is_focused,
            on_change: Action::LocationChange,
            on_submit: Action::LookupSubmit,
        }
    }
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.form
            .handle_event(event, Self::form_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherWidgetProps<'_>) {
        let outer = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(outer[0]);

        let chunks = Layout::vertical([
            Constraint::Max(8),              // Banner
            Constraint::Length(1),           // Spacer
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Length(1),           // Spacer
            Constraint::Min(1),              // Error / results
        ])
        .split(card);

        let state = props.state;
        let mut banner = TitleBanner;
        banner.render(
            frame,
            chunks[0],
            TitleBannerProps {
                title: TITLE,
                subtitle: SUBTITLE,
                temperature: state.weather.as_ref().map(|w| w.temperature),
            },
        );

        self.form
            .render(frame, chunks[2], Self::form_props(state, props.is_focused));

        let mut panel = ConditionsPanel;
        panel.render(
            frame,
            chunks[4],
            ConditionsPanelProps {
                weather: state.weather.as_ref(),
                error: state.error.as_deref(),
                local_hour: state.local_hour,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            outer[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
