use std::{collections::HashSet, path::PathBuf};

use tracing::{debug, info, warn};

use crate::{
    events::{CharacterSprite, KeyEdge, KeyEvent, MenuAction, MenuClick, MenuEntry},
    host::Host,
    names::normalize,
    persist::{load_tags, save_tags},
    store::TagStore,
    visibility::TagVisibility,
};

/// Label of the injected context-menu option.
pub const TAG_PLAYER: &str = "Tag Player";

/// Session controller: owns the tag store and visibility flag, and turns the
/// host's key, menu, prompt, and render callbacks into store mutations and
/// overlay draws. All entry points run on the host's single dispatch thread.
pub struct TagPlugin {
    tags_path: PathBuf,
    store: TagStore,
    visibility: TagVisibility,
    // Canonical name of the character an open prompt is editing. At most
    // one prompt is in flight; further clicks are refused until it closes.
    pending_prompt: Option<String>,
}

impl TagPlugin {
    pub fn new(tags_path: PathBuf) -> Self {
        Self {
            tags_path,
            store: TagStore::new(),
            visibility: TagVisibility::default(),
            pending_prompt: None,
        }
    }

    /// Session start: load persisted tags. A load failure is logged and the
    /// session continues with an empty store.
    pub fn start(&mut self) {
        self.store = match load_tags(&self.tags_path) {
            Ok(store) => store,
            Err(err) => {
                warn!(?err, path = %self.tags_path.display(), "failed loading tags; starting empty");
                TagStore::new()
            }
        };
        info!(entries = self.store.len(), "tag overlay started");
    }

    /// Session stop: one final persist before the host drops the plugin.
    pub fn stop(&mut self) {
        self.persist();
        info!("tag overlay stopped");
    }

    pub fn on_key_event(&mut self, host: &mut dyn Host, event: &KeyEvent) {
        let settings = host.settings();
        if !settings.hotkey.matches(event) {
            return;
        }
        let mode = settings.mode();
        match event.edge {
            KeyEdge::Down => self.visibility.key_down(mode, event.repeat),
            KeyEdge::Up => self.visibility.key_up(mode),
        }
        debug!(visible = self.visibility.is_visible(), ?mode, "hotkey event");
    }

    /// Injects one `Tag Player` entry per distinct raw target among the
    /// player-targeted entries of the menu that just opened. Decorated
    /// variants of the same character each keep their own entry.
    pub fn on_menu_opened(&self, host: &mut dyn Host, entries: &[MenuEntry]) {
        if !self.visibility.is_visible() {
            return;
        }
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.action != MenuAction::Player || !seen.insert(entry.target.as_str()) {
                continue;
            }
            debug!(target = %entry.target, "injecting tag option");
            host.push_menu_entry(MenuEntry {
                option: TAG_PLAYER.to_owned(),
                target: entry.target.clone(),
                action: MenuAction::Custom,
            });
        }
    }

    pub fn on_menu_clicked(&mut self, host: &mut dyn Host, click: &mut MenuClick) {
        if click.option != TAG_PLAYER {
            return;
        }
        click.consumed = true;
        if self.pending_prompt.is_some() {
            debug!(target = %click.target, "tag prompt already open; ignoring click");
            return;
        }
        let name = normalize(&click.target);
        let prefill = self.store.nickname(&name).unwrap_or("").to_owned();
        host.open_text_prompt(&format!("Enter tag for {name}"), &prefill);
        self.pending_prompt = Some(name);
    }

    /// Prompt outcome: `None` is a cancel and changes nothing; confirmed
    /// text sets the tag, or removes it when the trimmed text is empty.
    /// Either mutation persists immediately.
    pub fn on_prompt_closed(&mut self, input: Option<&str>) {
        let Some(name) = self.pending_prompt.take() else {
            debug!("prompt closed without a pending tag request");
            return;
        };
        let Some(input) = input else {
            debug!(name = %name, "tag prompt cancelled");
            return;
        };
        if input.trim().is_empty() {
            self.store.remove_tag(&name);
        } else {
            self.store.set_tag(&name, input);
        }
        self.persist();
    }

    pub fn on_render(&self, host: &mut dyn Host, characters: &[CharacterSprite]) {
        if !self.visibility.is_visible() {
            return;
        }
        for sprite in characters {
            let Some(nickname) = self.store.nickname(&sprite.name) else {
                continue;
            };
            match sprite.anchor {
                Some(anchor) => host.draw_text(nickname, anchor),
                None => debug!(name = %sprite.name, "character off-screen; skipping tag"),
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn store(&self) -> &TagStore {
        &self.store
    }

    fn persist(&self) {
        match save_tags(&self.tags_path, &self.store) {
            Ok(()) => info!(path = %self.tags_path.display(), "tags saved"),
            Err(err) => warn!(?err, path = %self.tags_path.display(), "failed saving tags"),
        }
    }
}
