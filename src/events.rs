use serde::{Deserialize, Serialize};

/// Key identity as reported by the host input dispatcher. Equality against
/// the configured binding is the whole match test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCombo {
    pub code: u16,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCombo,
    pub edge: KeyEdge,
    /// Hardware auto-repeat of a held key, when the host can tell.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: KeyCombo) -> Self {
        Self {
            key,
            edge: KeyEdge::Down,
            repeat: false,
        }
    }

    pub fn up(key: KeyCombo) -> Self {
        Self {
            key,
            edge: KeyEdge::Up,
            repeat: false,
        }
    }
}

/// What a context-menu entry acts on, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Player,
    Npc,
    Object,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub option: String,
    pub target: String,
    pub action: MenuAction,
}

/// A clicked menu option. The handler sets `consumed` to stop the host from
/// delivering the click to further listeners.
#[derive(Debug, Clone)]
pub struct MenuClick {
    pub option: String,
    pub target: String,
    pub consumed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// Per-frame render view of one character entity. `anchor` is the
/// host-computed text position above the entity, `None` while off-screen.
#[derive(Debug, Clone)]
pub struct CharacterSprite {
    pub name: String,
    pub anchor: Option<CanvasPoint>,
}
