//! Frame host boundary: the window, event pump and widget toolkit.
//!
//! The host owns the per-frame begin/end cycle. The notes app only needs a
//! handful of widgets on top of the markdown draw surface.

use notes_render::DrawSurface;

pub trait FrameHost<F>: DrawSurface<F> {
    fn begin_frame(&mut self);
    fn end_frame(&mut self);

    /// Open a bordered child pane. `width_fraction` of the available width,
    /// or the remainder when zero. Returns false when the pane is clipped.
    fn begin_pane(&mut self, id: &str, width_fraction: f32) -> bool;
    fn end_pane(&mut self);

    /// Returns true when the button was pressed this frame.
    fn button(&mut self, label: &str) -> bool;

    fn begin_tab_bar(&mut self, id: &str) -> bool;
    /// Returns true when this tab is the open one.
    fn tab_item(&mut self, label: &str) -> bool;
    /// Tab-shaped button at the end of the bar. Returns true when pressed.
    fn trailing_tab_button(&mut self, label: &str) -> bool;
    fn end_tab_bar(&mut self);

    /// Multiline editor over `buffer`. Returns true when the text changed.
    fn text_editor(&mut self, id: &str, buffer: &mut String) -> bool;
}
