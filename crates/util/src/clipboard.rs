//! Clipboard writes with toast feedback.

use thiserror::Error;
use tracing::warn;

use crate::notifications::{Notifier, ToastKind};

/// Failure notice shown when the platform refuses the write.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform clipboard refused access or is not available.
    #[error("clipboard access denied: {0}")]
    Denied(String),
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
///
/// On X11 and Wayland the copying process owns the selection, so a write
/// blocks until another application takes ownership of it. Elsewhere the
/// contents outlive the process and the write returns immediately.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Whether [`ClipboardWriter::write_text`] keeps serving the selection
    /// until another application copies.
    pub const fn serves_selection() -> bool {
        cfg!(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))
    }
}

impl ClipboardWriter for SystemClipboard {
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set().wait().text(text.to_string()))
            .map_err(|error| ClipboardError::Denied(error.to_string()))
    }

    #[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|error| ClipboardError::Denied(error.to_string()))
    }
}

/// Copy `text` and report the outcome through `notifier`.
///
/// On success the toast shows `message`, or `Copied: <text>` when no message
/// is given. On failure it shows [`COPY_FAILED_MESSAGE`]. There is no retry.
pub fn copy_with_notice(
    writer: &mut dyn ClipboardWriter,
    notifier: &mut Notifier,
    text: &str,
    message: Option<&str>,
) -> Result<(), ClipboardError> {
    match writer.write_text(text) {
        Ok(()) => {
            let message = message.map_or_else(|| format!("Copied: {text}"), str::to_string);
            notifier.show(message, ToastKind::Success);
            Ok(())
        }
        Err(error) => {
            warn!(error = %error, "Failed to copy");
            notifier.show(COPY_FAILED_MESSAGE, ToastKind::Failure);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Option<String>,
        deny: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::Denied("permission denied".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn success_uses_custom_message() {
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = Notifier::default();
        copy_with_notice(&mut clipboard, &mut notifier, "#7B61FF", Some("Copied HEX: #7B61FF")).unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("#7B61FF"));
        let toast = notifier.visible().unwrap();
        assert_eq!(toast.message, "Copied HEX: #7B61FF");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn success_defaults_message_to_copied_text() {
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = Notifier::default();
        copy_with_notice(&mut clipboard, &mut notifier, "rgb(1, 2, 3)", None).unwrap();
        assert_eq!(notifier.visible().unwrap().message, "Copied: rgb(1, 2, 3)");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_clipboard_serves_selection_after_write() {
        assert!(SystemClipboard::serves_selection());
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    #[test]
    fn desktop_clipboard_keeps_contents_without_serving() {
        assert!(!SystemClipboard::serves_selection());
    }

    #[test]
    fn denial_shows_failure_notice() {
        let mut clipboard = RecordingClipboard {
            deny: true,
            ..Default::default()
        };
        let mut notifier = Notifier::default();
        let result = copy_with_notice(&mut clipboard, &mut notifier, "#000000", None);

        assert!(matches!(result, Err(ClipboardError::Denied(_))));
        let toast = notifier.visible().unwrap();
        assert_eq!(toast.message, COPY_FAILED_MESSAGE);
        assert_eq!(toast.kind, ToastKind::Failure);
    }
}
