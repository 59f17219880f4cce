//! View state for the admin pages.
//!
//! Views own the data they render; the page (or terminal) is output only.

mod members;
mod planets;

pub use members::*;
pub use planets::*;

use crate::errors::ClientError;

/// Browser navigation, injected so session expiry can leave the page.
pub trait Navigator {
    /// Replace the current location with `url`.
    fn replace(&mut self, url: &str);
}

/// Navigator that remembers where it was sent instead of leaving.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, url: &str) {
        tracing::warn!("Session expired, redirecting to {}", url);
        self.visited.push(url.to_string());
    }
}

/// Visibility of the success and error message containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessagePanels {
    pub success_visible: bool,
    pub error_visible: bool,
}

impl MessagePanels {
    pub fn show_success(&mut self) {
        self.error_visible = false;
        self.success_visible = true;
    }

    pub fn show_error(&mut self) {
        self.success_visible = false;
        self.error_visible = true;
    }
}

/// Result of a user-triggered mutation.
#[derive(Debug)]
pub enum Outcome {
    /// Server accepted the change and state was reloaded
    Saved,
    /// Required input was missing; nothing was sent
    Skipped,
    /// Session expired; the navigator was sent to the refresh URL
    SessionExpired,
    /// Server rejected the change; the error panel shows its payload
    Rejected,
    /// Any other failure; nothing on the page changed
    Failed(ClientError),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_are_exclusive() {
        let mut panels = MessagePanels::default();
        assert_eq!(panels, MessagePanels::default());

        panels.show_error();
        assert!(panels.error_visible);
        assert!(!panels.success_visible);

        panels.show_success();
        assert!(panels.success_visible);
        assert!(!panels.error_visible);
    }

    #[test]
    fn test_recording_navigator() {
        let mut navigator = RecordingNavigator::default();
        assert!(navigator.last().is_none());
        navigator.replace("http://localhost/login");
        assert_eq!(navigator.last(), Some("http://localhost/login"));
    }
}
