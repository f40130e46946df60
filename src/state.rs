//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unit marker the provider translation always reports.
pub const CELSIUS: &str = "C";

/// Current conditions for one resolved place.
///
/// This is the stable internal record; provider-specific field names never
/// leak past the translation in [`crate::provider`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherData {
    /// Degrees on the scale named by `unit`, unrounded.
    pub temperature: f64,
    /// Free-text sky condition in the provider's vocabulary.
    pub description: String,
    /// Place name as normalized by the provider.
    pub location: String,
    pub unit: String,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Raw text field content, updated on every keystroke
    #[debug(section = "Input", label = "Location")]
    pub location: String,

    /// Last successful lookup, absent until the first success
    #[debug(section = "Lookup", label = "Weather", debug_fmt)]
    pub weather: Option<WeatherData>,

    /// User-facing error message
    #[debug(section = "Lookup", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// True while the latest lookup is in flight
    #[debug(section = "Lookup", label = "Loading")]
    pub is_loading: bool,

    /// Id of the most recently issued lookup; older results are dropped
    #[debug(section = "Lookup", label = "Generation")]
    pub generation: u64,

    /// Diagnostic cause of the last failed lookup
    #[debug(section = "Lookup", label = "Last cause", debug_fmt)]
    pub last_failure: Option<String>,

    /// Local wall-clock hour (0-23) used for day/night framing
    #[debug(section = "Clock", label = "Hour")]
    pub local_hour: u32,
}

impl AppState {
    /// Create an idle state at the given local hour
    pub fn new(local_hour: u32) -> Self {
        Self {
            location: String::new(),
            weather: None,
            error: None,
            is_loading: false,
            generation: 0,
            last_failure: None,
            local_hour: local_hour % 24,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(12)
    }
}
