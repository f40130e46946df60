//! Display strings derived from a lookup result.
//!
//! All three functions are pure; the caller supplies the local hour.

use crate::state::CELSIUS;

/// First hour counted as night.
pub const NIGHT_STARTS: u32 = 18;
/// First hour counted as day.
pub const DAY_STARTS: u32 = 6;

/// Sentence describing how the temperature feels.
///
/// Celsius values fall into five buckets whose lower bounds (0, 10, 20, 30)
/// are inclusive. Other units get a bare `"{t}°{unit}"`.
pub fn temperature_message(temperature: f64, unit: &str) -> String {
    if unit != CELSIUS {
        return format!("{temperature}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's Freezing at {temperature}°C. Bundle up!")
    } else if temperature < 10.0 {
        format!("It's quite cold at {temperature}°C. Wear warm clothes.")
    } else if temperature < 20.0 {
        format!("The temperature is {temperature}°C. Comfortable for a light jacket.")
    } else if temperature < 30.0 {
        format!("It's a pleasant {temperature}°C. Enjoy the nice weather!.")
    } else {
        format!("It's hot at {temperature}°C. Stay hydrated.")
    }
}

/// Friendly sentence for a known sky condition, or the description itself.
pub fn weather_message(description: &str) -> String {
    let sentence = match description.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine.",
        "cloudy" => "It's cloudy today.",
        "overcast" => "The sky is overcast.",
        "rain" => "Don't forget your umbrella! It's raining.",
        "thunderstorm" => "Thunderstorms are expected today.",
        "snow" => "Bundle up! It's snowing.",
        "mist" => "It's misty outside.",
        "fog" => "Be careful, there's fog outside.",
        _ => return description.to_string(),
    };
    sentence.to_string()
}

pub fn is_night(hour: u32) -> bool {
    hour >= NIGHT_STARTS || hour < DAY_STARTS
}

/// Place name framed by time of day.
pub fn location_message(location: &str, hour: u32) -> String {
    if is_night(hour) {
        format!("{location} at Night")
    } else {
        format!("{location} During the Day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_temperature_buckets() {
        assert_eq!(
            temperature_message(-5.0, "C"),
            "It's Freezing at -5°C. Bundle up!"
        );
        assert_eq!(
            temperature_message(3.2, "C"),
            "It's quite cold at 3.2°C. Wear warm clothes."
        );
        assert_eq!(
            temperature_message(15.0, "C"),
            "The temperature is 15°C. Comfortable for a light jacket."
        );
        assert_eq!(
            temperature_message(22.5, "C"),
            "It's a pleasant 22.5°C. Enjoy the nice weather!."
        );
        assert_eq!(
            temperature_message(41.0, "C"),
            "It's hot at 41°C. Stay hydrated."
        );
    }

    #[test]
    fn test_temperature_boundaries_are_lower_inclusive() {
        assert!(temperature_message(-0.1, "C").starts_with("It's Freezing"));
        assert!(temperature_message(0.0, "C").starts_with("It's quite cold"));
        assert!(temperature_message(9.9, "C").starts_with("It's quite cold"));
        assert!(temperature_message(10.0, "C").starts_with("The temperature is"));
        assert!(temperature_message(19.99, "C").starts_with("The temperature is"));
        assert!(temperature_message(20.0, "C").starts_with("It's a pleasant"));
        assert!(temperature_message(29.9, "C").starts_with("It's a pleasant"));
        assert!(temperature_message(30.0, "C").starts_with("It's hot"));
    }

    #[test]
    fn test_temperature_keeps_provider_precision() {
        assert_eq!(
            temperature_message(12.345, "C"),
            "The temperature is 12.345°C. Comfortable for a light jacket."
        );
    }

    #[test]
    fn test_other_units_fall_back() {
        assert_eq!(temperature_message(72.0, "F"), "72°F");
        assert_eq!(temperature_message(-3.5, "K"), "-3.5°K");
        // Unit matching is exact
        assert_eq!(temperature_message(25.0, "c"), "25°c");
    }

    #[test]
    fn test_weather_message_is_case_insensitive() {
        let expected = "It's a beautiful sunny day!";
        assert_eq!(weather_message("sunny"), expected);
        assert_eq!(weather_message("Sunny"), expected);
        assert_eq!(weather_message("SUNNY"), expected);
        assert_eq!(
            weather_message("Partly cloudy"),
            "Expect some clouds and sunshine."
        );
    }

    #[test]
    fn test_weather_message_vocabulary() {
        assert_eq!(weather_message("cloudy"), "It's cloudy today.");
        assert_eq!(weather_message("Overcast"), "The sky is overcast.");
        assert_eq!(
            weather_message("rain"),
            "Don't forget your umbrella! It's raining."
        );
        assert_eq!(
            weather_message("Thunderstorm"),
            "Thunderstorms are expected today."
        );
        assert_eq!(weather_message("snow"), "Bundle up! It's snowing.");
        assert_eq!(weather_message("Mist"), "It's misty outside.");
        assert_eq!(weather_message("Fog"), "Be careful, there's fog outside.");
    }

    #[test]
    fn test_weather_message_passes_unknown_through() {
        assert_eq!(
            weather_message("Patchy rain nearby"),
            "Patchy rain nearby"
        );
        assert_eq!(weather_message(""), "");
        // No trimming either
        assert_eq!(weather_message(" sunny"), " sunny");
    }

    #[test]
    fn test_night_hours() {
        for hour in (18..24).chain(0..6) {
            assert!(is_night(hour), "hour {hour} should be night");
            assert_eq!(location_message("Lahore", hour), "Lahore at Night");
        }
    }

    #[test]
    fn test_day_hours() {
        for hour in 6..18 {
            assert!(!is_night(hour), "hour {hour} should be day");
            assert_eq!(location_message("Lahore", hour), "Lahore During the Day");
        }
    }
}
