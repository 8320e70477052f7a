//! Single failure-reporting policy for screens.
//!
//! Every failed request reaches the screen that asked for it. The screen
//! hands it to its `FailureReporter`, which always logs it and, for screens
//! that present failures, produces an alert overlay to show.

use log::warn;

use crate::api::ApiError;
use crate::core::navigation::NavHandle;
use crate::core::overlay::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Show an alert overlay.
    Alert,
    /// Log only; the screen keeps whatever it was showing.
    Silent,
}

#[derive(Debug, Clone)]
pub struct FailureReporter {
    screen: &'static str,
    presentation: Presentation,
}

impl FailureReporter {
    pub fn new(screen: &'static str, presentation: Presentation) -> Self {
        Self {
            screen,
            presentation,
        }
    }

    /// Records a failed `operation` and returns the overlay to display, if any.
    pub fn report(&self, nav: &NavHandle, operation: &str, error: &ApiError) -> Option<Overlay> {
        warn!("[{}] {} failed: {}", self.screen, operation, error);
        match self.presentation {
            Presentation::Alert => Some(Overlay::alert(nav, alert_title(error), &error.to_string())),
            Presentation::Silent => None,
        }
    }
}

fn alert_title(error: &ApiError) -> &'static str {
    match error {
        ApiError::Network(_) => "No connection",
        ApiError::Client { .. } if error.is_not_found() => "Not found",
        ApiError::Client { .. } => "Request rejected",
        ApiError::Server { .. } => "Server unavailable",
        ApiError::Decode(_) => "Unexpected response",
        ApiError::Config(_) | ApiError::Interrupted => "Something went wrong",
    }
}
