//! Session progress persistence
//!
//! One boolean survives across sessions: whether the player has dismissed
//! the tutorial overlay. Stored as JSON in LocalStorage on wasm; native
//! builds start fresh every run.

use serde::{Deserialize, Serialize};

/// Persisted player progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Tutorial was completed at some point; one-way, never reset
    pub tutorial_done: bool,
}

impl Progress {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "penguin_peaks_progress";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record tutorial completion and persist it.
    pub fn complete_tutorial(&mut self) {
        self.tutorial_done = true;
        self.save();
    }

    /// Load progress from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(progress) = serde_json::from_str(&json) {
                    return progress;
                }
            }
        }

        log::info!("No saved progress, starting with tutorial");
        Self::new()
    }

    /// Save progress to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Progress saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
