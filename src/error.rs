//! User-facing error kinds

use thiserror::Error;

/// The two ways a lookup can fail from the user's point of view.
///
/// The `Display` text is exactly what the widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Blank or whitespace-only input, rejected before any request
    #[error("Please Enter a Valid Location.")]
    EmptyLocation,

    /// Any provider failure: status, transport or body shape
    #[error("City not Found. Please try again.")]
    LookupFailed,
}
