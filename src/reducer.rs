//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::WidgetError;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location actions =====
        Action::LocationChange(text) => {
            if text == state.location {
                return DispatchResult::unchanged();
            }
            state.location = text;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit(raw) => {
            let location = raw.trim().to_string();
            state.location = raw;
            if location.is_empty() {
                state.error = Some(WidgetError::EmptyLocation.to_string());
                state.weather = None;
                return DispatchResult::changed();
            }

            state.is_loading = true;
            state.error = None;
            state.generation += 1;
            DispatchResult::changed_with(Effect::LookupWeather {
                generation: state.generation,
                location,
            })
        }

        Action::LookupDidLoad { generation, weather } => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.weather = Some(weather);
            state.error = None;
            state.last_failure = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::LookupDidError { generation, cause } => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.error = Some(WidgetError::LookupFailed.to_string());
            state.weather = None;
            state.last_failure = Some(cause);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiClockTick(hour) => {
            let hour = hour % 24;
            if hour == state.local_hour {
                DispatchResult::unchanged()
            } else {
                state.local_hour = hour;
                DispatchResult::changed()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}
