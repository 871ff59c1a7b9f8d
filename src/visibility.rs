#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Tags are shown while the hotkey is physically held down.
    Hold,
    /// Each hotkey press flips tags between shown and hidden.
    Toggle,
}

/// Whether tags are currently shown. The mode is host configuration and is
/// passed in per event, so flipping the setting mid-session takes effect on
/// the next key event without a transition of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagVisibility {
    shown: bool,
}

impl TagVisibility {
    pub fn key_down(&mut self, mode: VisibilityMode, repeat: bool) {
        match mode {
            VisibilityMode::Hold => self.shown = true,
            // A held key reports repeated downs; only the first edge flips.
            VisibilityMode::Toggle if !repeat => self.shown = !self.shown,
            VisibilityMode::Toggle => {}
        }
    }

    pub fn key_up(&mut self, mode: VisibilityMode) {
        if mode == VisibilityMode::Hold {
            self.shown = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::{TagVisibility, VisibilityMode};

    #[test]
    fn hold_mode_follows_physical_key_state() {
        let mut visibility = TagVisibility::default();
        assert!(!visibility.is_visible());

        visibility.key_down(VisibilityMode::Hold, false);
        assert!(visibility.is_visible());
        visibility.key_down(VisibilityMode::Hold, true);
        assert!(visibility.is_visible());
        visibility.key_up(VisibilityMode::Hold);
        assert!(!visibility.is_visible());
    }

    #[test]
    fn toggle_mode_flips_on_each_key_down() {
        let mut visibility = TagVisibility::default();
        visibility.key_down(VisibilityMode::Toggle, false);
        assert!(visibility.is_visible());
        visibility.key_down(VisibilityMode::Toggle, false);
        assert!(!visibility.is_visible());
    }

    #[test]
    fn toggle_mode_ignores_key_up() {
        let mut visibility = TagVisibility::default();
        visibility.key_down(VisibilityMode::Toggle, false);
        visibility.key_up(VisibilityMode::Toggle);
        assert!(visibility.is_visible());
    }

    #[test]
    fn toggle_mode_coalesces_key_repeats() {
        let mut visibility = TagVisibility::default();
        visibility.key_down(VisibilityMode::Toggle, false);
        visibility.key_down(VisibilityMode::Toggle, true);
        visibility.key_down(VisibilityMode::Toggle, true);
        assert!(visibility.is_visible());
    }

    #[test]
    fn mode_change_applies_on_the_next_event() {
        let mut visibility = TagVisibility::default();
        visibility.key_down(VisibilityMode::Toggle, false);
        assert!(visibility.is_visible());

        // Switching to hold mode does nothing by itself; the next key-up
        // is evaluated under the new mode and hides the tags.
        visibility.key_up(VisibilityMode::Hold);
        assert!(!visibility.is_visible());
    }
}
