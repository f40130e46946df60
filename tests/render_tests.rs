//! Render tests using RenderHarness

use tui_dispatch::testing::*;
use weather_widget::{
    components::{Component, WeatherWidget, WeatherWidgetProps},
    state::{AppState, WeatherData},
};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherWidget::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn with_weather(temperature: f64, description: &str, hour: u32) -> AppState {
    AppState {
        weather: Some(WeatherData {
            temperature,
            description: description.into(),
            location: "Lahore".into(),
            unit: "C".into(),
        }),
        local_hour: hour,
        ..Default::default()
    }
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("Search for the current Weather Conditions"));
    assert!(output.contains("Search"), "Should show idle button label");
    assert!(!output.contains("Loading..."));
    assert!(!output.contains("City not Found"));
}

#[test]
fn test_render_three_result_lines() {
    let output = render(&with_weather(22.5, "Partly cloudy", 10), 80, 24);

    assert!(
        output.contains("It's a pleasant 22.5°C. Enjoy the nice weather!."),
        "output:\n{}",
        output
    );
    assert!(output.contains("Expect some clouds and sunshine."));
    assert!(output.contains("Lahore During the Day"));
}

#[test]
fn test_render_unknown_condition_verbatim() {
    let output = render(&with_weather(4.0, "Patchy light drizzle", 22), 80, 24);

    assert!(output.contains("It's quite cold at 4°C. Wear warm clothes."));
    assert!(output.contains("Patchy light drizzle"));
    assert!(output.contains("Lahore at Night"));
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        error: Some("City not Found. Please try again.".into()),
        ..Default::default()
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("City not Found. Please try again."));
    assert!(!output.contains("Temperature:"), "No results with an error");
}

#[test]
fn test_render_empty_location_error() {
    let state = AppState {
        error: Some("Please Enter a Valid Location.".into()),
        ..Default::default()
    };

    let output = render(&state, 80, 24);
    assert!(output.contains("Please Enter a Valid Location."));
}

#[test]
fn test_render_typed_location() {
    let state = AppState {
        location: "Karachi".into(),
        ..Default::default()
    };

    let output = render(&state, 80, 24);
    assert!(output.contains("Karachi"));
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
