//! Private nickname tags for in-game characters, shown above their
//! on-screen positions while a configured hotkey is held down or toggled on.
//!
//! The crate is a plugin core: the host client delivers key, menu, prompt,
//! and render callbacks into [`TagPlugin`], which calls back through the
//! narrow [`Host`] trait. Tags persist to a flat `tagged_players.txt`.

mod events;
mod host;
mod names;
mod persist;
mod plugin;
mod settings;
mod store;
mod visibility;

pub use events::{
    CanvasPoint, CharacterSprite, KeyCombo, KeyEdge, KeyEvent, MenuAction, MenuClick, MenuEntry,
};
pub use host::Host;
pub use names::normalize;
pub use persist::{default_tags_path, load_tags, save_tags, TAGS_FILE};
pub use plugin::{TagPlugin, TAG_PLAYER};
pub use settings::{Hotkey, TagSettings};
pub use store::TagStore;
pub use visibility::{TagVisibility, VisibilityMode};
