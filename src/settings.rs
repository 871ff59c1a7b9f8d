use serde::{Deserialize, Serialize};

use crate::{
    events::{KeyCombo, KeyEvent},
    visibility::VisibilityMode,
};

/// Hotkey binding as stored by the host configuration store. The default is
/// unset, which matches no key event at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkey {
    pub binding: Option<KeyCombo>,
}

impl Hotkey {
    pub fn new(combo: KeyCombo) -> Self {
        Self {
            binding: Some(combo),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.binding.map_or(false, |combo| combo == event.key)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub hotkey: Hotkey,
    pub toggle_mode: bool,
}

impl TagSettings {
    pub fn mode(&self) -> VisibilityMode {
        if self.toggle_mode {
            VisibilityMode::Toggle
        } else {
            VisibilityMode::Hold
        }
    }
}
