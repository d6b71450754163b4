//! Hand-off of share text to the platform: native share first, clipboard second.

use thiserror::Error;
use tracing::{info, warn};

/// What happened to the share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// Native share was not possible; the text is on the clipboard instead.
    Copied,
    Failed,
}

impl ShareOutcome {
    /// Short feedback line for the player.
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Shared => "Shared",
            ShareOutcome::Copied => "Game copied to clipboard",
            ShareOutcome::Failed => "Could not share or copy the result",
        }
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("not available on this platform")]
    Unavailable,
    #[error("{0}")]
    Failed(String),
}

/// Platform share surfaces.
pub trait ShareTarget {
    fn native_share(&mut self, text: &str) -> Result<(), DeliveryError>;

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), DeliveryError>;
}

/// Deliver `text`, preferring the native share sheet.
pub fn deliver<T: ShareTarget + ?Sized>(target: &mut T, text: &str) -> ShareOutcome {
    match target.native_share(text) {
        Ok(()) => {
            info!("Shared result natively");
            return ShareOutcome::Shared;
        }
        Err(DeliveryError::Unavailable) => {}
        Err(e) => warn!("Native share failed, falling back to clipboard: {}", e),
    }

    match target.copy_to_clipboard(text) {
        Ok(()) => {
            info!("Copied result to clipboard");
            ShareOutcome::Copied
        }
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            ShareOutcome::Failed
        }
    }
}

/// Desktop clipboard. Terminals have no native share sheet.
#[derive(Default)]
pub struct SystemClipboard;

impl ShareTarget for SystemClipboard {
    fn native_share(&mut self, _text: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unavailable)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), DeliveryError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| DeliveryError::Failed(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| DeliveryError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls and answers with preset results.
    struct FakeTarget {
        share: fn() -> Result<(), DeliveryError>,
        copy: fn() -> Result<(), DeliveryError>,
        calls: Vec<&'static str>,
        last_text: Option<String>,
    }

    impl FakeTarget {
        fn new(
            share: fn() -> Result<(), DeliveryError>,
            copy: fn() -> Result<(), DeliveryError>,
        ) -> Self {
            Self {
                share,
                copy,
                calls: Vec::new(),
                last_text: None,
            }
        }
    }

    impl ShareTarget for FakeTarget {
        fn native_share(&mut self, text: &str) -> Result<(), DeliveryError> {
            self.calls.push("share");
            self.last_text = Some(text.to_string());
            (self.share)()
        }

        fn copy_to_clipboard(&mut self, text: &str) -> Result<(), DeliveryError> {
            self.calls.push("copy");
            self.last_text = Some(text.to_string());
            (self.copy)()
        }
    }

    fn ok() -> Result<(), DeliveryError> {
        Ok(())
    }

    fn unavailable() -> Result<(), DeliveryError> {
        Err(DeliveryError::Unavailable)
    }

    fn broken() -> Result<(), DeliveryError> {
        Err(DeliveryError::Failed("boom".to_string()))
    }

    #[test]
    fn test_native_share_wins_when_available() {
        let mut target = FakeTarget::new(ok, ok);
        assert_eq!(deliver(&mut target, "hello"), ShareOutcome::Shared);
        assert_eq!(target.calls, vec!["share"]);
    }

    #[test]
    fn test_falls_back_to_clipboard_when_unavailable() {
        let mut target = FakeTarget::new(unavailable, ok);
        assert_eq!(deliver(&mut target, "hello"), ShareOutcome::Copied);
        assert_eq!(target.calls, vec!["share", "copy"]);
        assert_eq!(target.last_text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_falls_back_to_clipboard_when_share_fails() {
        let mut target = FakeTarget::new(broken, ok);
        assert_eq!(deliver(&mut target, "hello"), ShareOutcome::Copied);
    }

    #[test]
    fn test_reports_failure_when_both_fail() {
        let mut target = FakeTarget::new(broken, broken);
        assert_eq!(deliver(&mut target, "hello"), ShareOutcome::Failed);
        assert_eq!(target.calls, vec!["share", "copy"]);
    }
}
