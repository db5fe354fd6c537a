//! The user's saved palette for the current session.
//!
//! [`PaletteStore`] owns an ordered, duplicate-free list of canonical
//! `#RRGGBB` strings. Every mutation is written straight through to the
//! injected [`SessionStorage`] and then handed to the [`PaletteRenderer`], so
//! the view never drifts from the stored list. Storage failures are logged
//! and the store keeps working from memory.

use std::sync::Arc;

use tracing::{debug, warn};
use vyra_color::{ColorError, canonical_hex, hex_to_rgb};

use crate::session_storage::SessionStorage;

/// Session key holding the JSON array of palette colors.
pub const PALETTE_KEY: &str = "vyra-palette";

/// Placeholder shown by renderers when the palette has no colors.
pub const EMPTY_PALETTE_MESSAGE: &str = "Add colors to build your palette";

/// Result of [`PaletteStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

impl AddOutcome {
    /// Toast text describing the outcome for `hex`.
    pub fn message(&self, hex: &str) -> String {
        match self {
            Self::Added => format!("Added {hex} to palette"),
            Self::AlreadyPresent => "Color already in palette".to_string(),
        }
    }
}

/// Observable palette state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteState {
    Empty,
    NonEmpty,
}

/// Receives the full palette snapshot after every change.
pub trait PaletteRenderer {
    fn render(&mut self, colors: &[String]);
}

impl<F: FnMut(&[String])> PaletteRenderer for F {
    fn render(&mut self, colors: &[String]) {
        self(colors)
    }
}

/// Deduplicated, insertion-ordered palette persisted to session storage.
pub struct PaletteStore {
    storage: Arc<dyn SessionStorage>,
    renderer: Option<Box<dyn PaletteRenderer>>,
    colors: Vec<String>,
    persistent: bool,
}

impl PaletteStore {
    /// Create an empty store bound to `storage`. Call [`PaletteStore::load`]
    /// to restore a previous session.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            renderer: None,
            colors: Vec::new(),
            persistent: true,
        }
    }

    /// Attach the collaborator that draws the palette.
    pub fn with_renderer(mut self, renderer: impl PaletteRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Restore the palette from session storage.
    ///
    /// An absent key leaves the current state untouched. Unparseable data or
    /// an unreadable backend resets the palette to empty. Saved entries are
    /// canonicalised; invalid ones are dropped and duplicates keep their first
    /// position.
    pub fn load(&mut self) {
        match self.storage.get_item(PALETTE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(colors) => self.colors = canonical_entries(colors),
                Err(error) => {
                    warn!(key = PALETTE_KEY, error = %error, "Failed to parse saved palette; starting empty");
                    self.colors.clear();
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(key = PALETTE_KEY, error = %error, "Failed to read saved palette; starting empty");
                self.persistent = false;
                self.colors.clear();
            }
        }
        debug!(count = self.colors.len(), "palette loaded");
        self.render();
    }

    /// Append `hex` unless it is already saved.
    ///
    /// The value is validated and stored in canonical uppercase form, so
    /// `#ff0000` and `#FF0000` are the same entry.
    ///
    /// # Errors
    /// [`ColorError::InvalidFormat`] when `hex` is not a valid color; the
    /// palette is left unchanged.
    pub fn add(&mut self, hex: &str) -> Result<AddOutcome, ColorError> {
        let canonical = canonical_hex(hex)?;
        if self.contains(&canonical) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        self.colors.push(canonical);
        self.persist();
        self.render();
        Ok(AddOutcome::Added)
    }

    /// Remove every entry exactly equal to `hex`. Missing values are a no-op.
    pub fn remove(&mut self, hex: &str) {
        self.colors.retain(|color| color != hex);
        self.persist();
        self.render();
    }

    /// Remove every color.
    pub fn clear(&mut self) {
        self.colors.clear();
        self.persist();
        self.render();
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[String] {
        &self.colors
    }

    pub fn contains(&self, hex: &str) -> bool {
        self.colors.iter().any(|color| color == hex)
    }

    pub fn state(&self) -> PaletteState {
        if self.colors.is_empty() {
            PaletteState::Empty
        } else {
            PaletteState::NonEmpty
        }
    }

    /// `rgb(r, g, b)` strings for the saved colors, skipping any entry that no
    /// longer parses.
    pub fn rgb_strings(&self) -> Vec<String> {
        self.colors
            .iter()
            .filter_map(|hex| hex_to_rgb(hex).ok())
            .map(|rgb| rgb.to_string())
            .collect()
    }

    /// `false` once a write or read against session storage has failed.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.colors)
            .map_err(Into::into)
            .and_then(|payload| self.storage.set_item(PALETTE_KEY, &payload));
        if let Err(error) = result {
            warn!(key = PALETTE_KEY, error = %error, "Failed to persist palette; keeping it in memory");
            self.persistent = false;
        }
    }

    fn render(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.colors);
        }
    }
}

fn canonical_entries(raw: Vec<String>) -> Vec<String> {
    let mut colors: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        match canonical_hex(&entry) {
            Ok(hex) if !colors.contains(&hex) => colors.push(hex),
            Ok(_) => {}
            Err(error) => warn!(key = PALETTE_KEY, value = %entry, error = %error, "Dropping invalid saved color"),
        }
    }
    colors
}
