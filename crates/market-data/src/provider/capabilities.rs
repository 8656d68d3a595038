//! Request pacing configuration.

use std::time::Duration;

/// Fixed delay between consecutive provider requests.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(500);

/// Describes how a caller should space out requests to a provider.
///
/// The delay is applied after every request regardless of its outcome; it is
/// not adaptive and never grows on repeated failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay to wait after each request.
    pub delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delay: DEFAULT_PACING_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing_is_half_a_second() {
        assert_eq!(Pacing::default().delay, Duration::from_millis(500));
    }
}
