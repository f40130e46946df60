pub mod conditions_panel;
pub mod search_form;
pub mod title_banner;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use conditions_panel::{ConditionsPanel, ConditionsPanelProps, ERROR_ICON};
pub use search_form::{SearchForm, SearchFormProps};
pub use title_banner::{TitleBanner, TitleBannerProps};
pub use weather_widget::{WeatherWidget, WeatherWidgetProps};
