//! Frame host without a window. Widgets answer from a script and every
//! markdown draw call lands in a [`RecordingSurface`].

use std::collections::HashSet;

use notes_render::{Color, DrawSurface, FontAsset, ImageInfo, RecordingSurface, RunStyle};

use crate::host::FrameHost;

/// Widget interaction the headless host saw this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    Pane { id: String, width_fraction: f32 },
    Button(String),
    TabBar(String),
    Tab { label: String, open: bool },
    TrailingTab(String),
    Editor(String),
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    surface: RecordingSurface,
    widgets: Vec<WidgetCall>,
    pressed: HashSet<String>,
    selected_tab: Option<String>,
    typed: Option<String>,
    tab_open_this_bar: bool,
    frames: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the button or trailing tab labelled `label` as pressed on the next frame.
    pub fn press(&mut self, label: impl Into<String>) {
        self.pressed.insert(label.into());
    }

    /// Open the tab labelled `label`. With none chosen, the first tab in a bar opens.
    pub fn select_tab(&mut self, label: impl Into<String>) {
        self.selected_tab = Some(label.into());
    }

    /// Append `text` to the next editor drawn.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.typed = Some(text.into());
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RecordingSurface {
        &mut self.surface
    }

    pub fn widgets(&self) -> &[WidgetCall] {
        &self.widgets
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<F> DrawSurface<F> for HeadlessHost {
    fn push_font(&mut self, font: &FontAsset<F>) {
        self.surface.push_font(font);
    }

    fn pop_font(&mut self) {
        DrawSurface::<F>::pop_font(&mut self.surface);
    }

    fn push_text_color(&mut self, color: Color) {
        DrawSurface::<F>::push_text_color(&mut self.surface, color);
    }

    fn pop_text_color(&mut self) {
        DrawSurface::<F>::pop_text_color(&mut self.surface);
    }

    fn text(&mut self, run: &str, style: RunStyle) {
        DrawSurface::<F>::text(&mut self.surface, run, style);
    }

    fn clickable(&mut self, href: &str) -> bool {
        DrawSurface::<F>::clickable(&mut self.surface, href)
    }

    fn tooltip(&mut self, text: &str) {
        DrawSurface::<F>::tooltip(&mut self.surface, text);
    }

    fn new_line(&mut self) {
        DrawSurface::<F>::new_line(&mut self.surface);
    }

    fn spacing(&mut self) {
        DrawSurface::<F>::spacing(&mut self.surface);
    }

    fn indent(&mut self) {
        DrawSurface::<F>::indent(&mut self.surface);
    }

    fn unindent(&mut self) {
        DrawSurface::<F>::unindent(&mut self.surface);
    }

    fn separator(&mut self) {
        DrawSurface::<F>::separator(&mut self.surface);
    }

    fn begin_table(&mut self, columns: usize, borders: bool) {
        DrawSurface::<F>::begin_table(&mut self.surface, columns, borders);
    }

    fn next_row(&mut self) {
        DrawSurface::<F>::next_row(&mut self.surface);
    }

    fn next_cell(&mut self) {
        DrawSurface::<F>::next_cell(&mut self.surface);
    }

    fn end_table(&mut self) {
        DrawSurface::<F>::end_table(&mut self.surface);
    }

    fn image(&mut self, image: &ImageInfo) {
        DrawSurface::<F>::image(&mut self.surface, image);
    }
}

impl<F> FrameHost<F> for HeadlessHost {
    fn begin_frame(&mut self) {
        self.surface.take_calls();
        self.widgets.clear();
    }

    fn end_frame(&mut self) {
        self.pressed.clear();
        self.typed = None;
        self.frames += 1;
    }

    fn begin_pane(&mut self, id: &str, width_fraction: f32) -> bool {
        self.widgets.push(WidgetCall::Pane {
            id: id.to_string(),
            width_fraction,
        });
        true
    }

    fn end_pane(&mut self) {}

    fn button(&mut self, label: &str) -> bool {
        self.widgets.push(WidgetCall::Button(label.to_string()));
        self.pressed.contains(label)
    }

    fn begin_tab_bar(&mut self, id: &str) -> bool {
        self.widgets.push(WidgetCall::TabBar(id.to_string()));
        self.tab_open_this_bar = false;
        true
    }

    fn tab_item(&mut self, label: &str) -> bool {
        let open = !self.tab_open_this_bar
            && match &self.selected_tab {
                Some(selected) => selected == label,
                None => true,
            };
        if open {
            self.tab_open_this_bar = true;
        }
        self.widgets.push(WidgetCall::Tab {
            label: label.to_string(),
            open,
        });
        open
    }

    fn trailing_tab_button(&mut self, label: &str) -> bool {
        self.widgets.push(WidgetCall::TrailingTab(label.to_string()));
        self.pressed.contains(label)
    }

    fn end_tab_bar(&mut self) {}

    fn text_editor(&mut self, id: &str, buffer: &mut String) -> bool {
        self.widgets.push(WidgetCall::Editor(id.to_string()));
        match self.typed.take() {
            Some(text) if !text.is_empty() => {
                buffer.push_str(&text);
                true
            }
            _ => false,
        }
    }
}
