//! Actions: user input, async lookup results and clock updates

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherData;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location category =====
    /// Text field content changed
    LocationChange(String),

    // ===== Lookup category =====
    /// Intent: submit the raw field content (triggers async task when valid)
    LookupSubmit(String),

    /// Result: provider returned current conditions
    LookupDidLoad { generation: u64, weather: WeatherData },

    /// Result: lookup failed; `cause` is diagnostic only
    LookupDidError { generation: u64, cause: String },

    // ===== UI category =====
    /// Local wall-clock hour observed by the runtime
    UiClockTick(u32),

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
