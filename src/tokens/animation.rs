//! Motion constants.

// Durations in milliseconds

pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;

// Easing curves

/// Ease-out, the default for entering elements.
pub const EASE_OUT: &str = "cubic-bezier(0, 0, 0.2, 1)";

/// Ease-in, for leaving elements.
pub const EASE_IN: &str = "cubic-bezier(0.4, 0, 1, 1)";

/// Symmetric ease, for color and opacity transitions.
pub const EASE_IN_OUT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Formats a duration constant as a CSS time value.
///
/// ```
/// use attire::tokens::{css_duration, DURATION_FAST};
///
/// assert_eq!(css_duration(DURATION_FAST), "150ms");
/// ```
pub fn css_duration(millis: u32) -> String {
    format!("{millis}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_are_ordered() {
        assert!(DURATION_FAST < DURATION_NORMAL);
        assert!(DURATION_NORMAL < DURATION_SLOW);
    }

    #[test]
    fn test_css_duration_formats_millis() {
        assert_eq!(css_duration(DURATION_SLOW), "500ms");
    }
}
