//! Session-backed state and UI support for the Vyra color toolkit.

pub mod clipboard;
pub mod notifications;
pub mod palette_store;
pub mod paths;
pub mod preferences;
pub mod session_storage;

pub use clipboard::{COPY_FAILED_MESSAGE, ClipboardError, ClipboardWriter, SystemClipboard, copy_with_notice};
pub use notifications::{NOTIFICATION_DURATION, Notifier, TOOLTIP_DURATION, Toast, ToastKind};
pub use palette_store::{AddOutcome, EMPTY_PALETTE_MESSAGE, PALETTE_KEY, PaletteRenderer, PaletteState, PaletteStore};
pub use paths::{SESSION_PATH_ENV, default_session_path, expand_tilde};
pub use preferences::{THEME_KEY, ThemePreference};
pub use session_storage::{
    InMemorySessionStorage, JsonSessionStorage, SessionStorage, StorageError, open_session_or_ephemeral,
};
