//! Effects - side effects declared by the reducer

use tracing::{info, warn};

use crate::action::Action;
use crate::provider::WeatherProvider;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Query current conditions for an already trimmed location
    LookupWeather { generation: u64, location: String },
}

/// Run one lookup and turn its outcome into the matching result action.
///
/// Every failure is logged with its cause here and reported as
/// [`Action::LookupDidError`]; nothing escapes to the caller.
pub async fn perform_lookup(
    provider: &dyn WeatherProvider,
    generation: u64,
    location: &str,
) -> Action {
    info!(generation, location, "looking up weather");
    match provider.current(location).await {
        Ok(weather) => {
            info!(
                generation,
                resolved = %weather.location,
                temperature = weather.temperature,
                "lookup succeeded"
            );
            Action::LookupDidLoad { generation, weather }
        }
        Err(error) => {
            warn!(generation, location, %error, "lookup failed");
            Action::LookupDidError {
                generation,
                cause: error.to_string(),
            }
        }
    }
}
