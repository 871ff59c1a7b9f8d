use crate::{
    events::{CanvasPoint, MenuEntry},
    settings::TagSettings,
};

/// The slice of the host framework the plugin calls into. Key, menu, prompt,
/// and render callbacks travel the other way, as method calls on
/// [`TagPlugin`](crate::TagPlugin), so the trait stays narrow and an
/// in-memory fake is enough to drive the whole plugin in tests.
pub trait Host {
    /// Current values from the host configuration store, read per event so
    /// runtime setting changes apply to the next event.
    fn settings(&self) -> TagSettings;

    /// Append a custom entry to the context menu that is currently open.
    fn push_menu_entry(&mut self, entry: MenuEntry);

    /// Open the host text prompt. The outcome arrives later through
    /// [`TagPlugin::on_prompt_closed`](crate::TagPlugin::on_prompt_closed)
    /// on the same serial dispatch.
    fn open_text_prompt(&mut self, title: &str, prefill: &str);

    /// Draw overlay text at a canvas position.
    fn draw_text(&mut self, text: &str, anchor: CanvasPoint);
}
