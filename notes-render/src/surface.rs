//! Immediate-mode drawing surface the renderer issues calls against.
//!
//! The host toolkit implements [`DrawSurface`]; line breaking, wrapping and
//! cursor placement are its business. [`RecordingSurface`] captures the call
//! stream instead of drawing it, for headless runs and tests.

use std::collections::HashSet;

use crate::font_matrix::{FontAsset, FontKey};
use crate::images::ImageInfo;
use crate::primitives::Color;

/// Decoration flags for one text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub underline: bool,
    pub strikethrough: bool,
}

/// Drawing primitives offered by the host for one frame.
pub trait DrawSurface<F> {
    fn push_font(&mut self, font: &FontAsset<F>);
    fn pop_font(&mut self);

    fn push_text_color(&mut self, color: Color);
    fn pop_text_color(&mut self);

    /// Draw a run of text at the cursor with the top font and color.
    fn text(&mut self, run: &str, style: RunStyle);

    /// Make the last drawn item a link region. Returns true when it was
    /// activated this frame.
    fn clickable(&mut self, href: &str) -> bool;

    /// Show `text` as a tooltip while the last drawn item is hovered.
    fn tooltip(&mut self, text: &str);

    fn new_line(&mut self);
    fn spacing(&mut self);
    fn indent(&mut self);
    fn unindent(&mut self);
    fn separator(&mut self);

    fn begin_table(&mut self, columns: usize, borders: bool);
    fn next_row(&mut self);
    fn next_cell(&mut self);
    fn end_table(&mut self);

    fn image(&mut self, image: &ImageInfo);
}

/// A text run as the recording surface saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRun {
    pub text: String,
    pub font: Option<FontKey>,
    pub size_px: Option<f32>,
    pub color: Option<Color>,
    pub style: RunStyle,
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    PushFont(FontKey),
    PopFont,
    PushTextColor(Color),
    PopTextColor,
    Text(RecordedRun),
    Clickable(String),
    Tooltip(String),
    NewLine,
    Spacing,
    Indent,
    Unindent,
    Separator,
    BeginTable { columns: usize, borders: bool },
    NextRow,
    NextCell,
    EndTable,
    Image(ImageInfo),
}

/// Surface that records calls and tracks the font and color stacks.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    fonts: Vec<(FontKey, f32)>,
    colors: Vec<Color>,
    clicked: HashSet<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `href` as activated whenever a link region for it is registered.
    pub fn click(&mut self, href: impl Into<String>) {
        self.clicked.insert(href.into());
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &RecordedRun> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageInfo> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Image(info) => Some(info),
            _ => None,
        })
    }

    /// Fonts currently pushed. Zero after a balanced pass.
    pub fn font_depth(&self) -> usize {
        self.fonts.len()
    }

    /// Text colors currently pushed. Zero after a balanced pass.
    pub fn color_depth(&self) -> usize {
        self.colors.len()
    }
}

impl<F> DrawSurface<F> for RecordingSurface {
    fn push_font(&mut self, font: &FontAsset<F>) {
        self.fonts.push((font.key(), font.size_px()));
        self.calls.push(DrawCall::PushFont(font.key()));
    }

    fn pop_font(&mut self) {
        debug_assert!(!self.fonts.is_empty(), "pop_font without push_font");
        self.fonts.pop();
        self.calls.push(DrawCall::PopFont);
    }

    fn push_text_color(&mut self, color: Color) {
        self.colors.push(color);
        self.calls.push(DrawCall::PushTextColor(color));
    }

    fn pop_text_color(&mut self) {
        debug_assert!(!self.colors.is_empty(), "pop_text_color without push_text_color");
        self.colors.pop();
        self.calls.push(DrawCall::PopTextColor);
    }

    fn text(&mut self, run: &str, style: RunStyle) {
        let top = self.fonts.last().copied();
        self.calls.push(DrawCall::Text(RecordedRun {
            text: run.to_string(),
            font: top.map(|(key, _)| key),
            size_px: top.map(|(_, size)| size),
            color: self.colors.last().copied(),
            style,
        }));
    }

    fn clickable(&mut self, href: &str) -> bool {
        self.calls.push(DrawCall::Clickable(href.to_string()));
        self.clicked.contains(href)
    }

    fn tooltip(&mut self, text: &str) {
        self.calls.push(DrawCall::Tooltip(text.to_string()));
    }

    fn new_line(&mut self) {
        self.calls.push(DrawCall::NewLine);
    }

    fn spacing(&mut self) {
        self.calls.push(DrawCall::Spacing);
    }

    fn indent(&mut self) {
        self.calls.push(DrawCall::Indent);
    }

    fn unindent(&mut self) {
        self.calls.push(DrawCall::Unindent);
    }

    fn separator(&mut self) {
        self.calls.push(DrawCall::Separator);
    }

    fn begin_table(&mut self, columns: usize, borders: bool) {
        self.calls.push(DrawCall::BeginTable { columns, borders });
    }

    fn next_row(&mut self) {
        self.calls.push(DrawCall::NextRow);
    }

    fn next_cell(&mut self) {
        self.calls.push(DrawCall::NextCell);
    }

    fn end_table(&mut self) {
        self.calls.push(DrawCall::EndTable);
    }

    fn image(&mut self, image: &ImageInfo) {
        self.calls.push(DrawCall::Image(*image));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_matrix::{Variant, test_matrix};
    use crate::scale::SizeTier;

    #[test]
    fn test_text_uses_top_of_stacks() {
        let matrix = test_matrix();
        let mut surface = RecordingSurface::new();

        DrawSurface::<String>::text(&mut surface, "plain", RunStyle::default());
        surface.push_font(matrix.lookup(Variant::Bold, SizeTier::H2));
        DrawSurface::<String>::push_text_color(&mut surface, Color::RED);
        DrawSurface::<String>::text(&mut surface, "styled", RunStyle::default());
        DrawSurface::<String>::pop_text_color(&mut surface);
        DrawSurface::<String>::pop_font(&mut surface);

        let runs: Vec<_> = surface.text_runs().collect();
        assert_eq!(runs[0].font, None);
        assert_eq!(runs[0].color, None);
        assert_eq!(runs[1].font, Some(FontKey::new(Variant::Bold, SizeTier::H2)));
        assert_eq!(runs[1].size_px, Some(matrix.lookup(Variant::Bold, SizeTier::H2).size_px()));
        assert_eq!(runs[1].color, Some(Color::RED));
        assert_eq!(surface.font_depth(), 0);
        assert_eq!(surface.color_depth(), 0);
    }

    #[test]
    fn test_clickable_reports_registered_clicks() {
        let mut surface = RecordingSurface::new();
        surface.click("https://example.com");

        assert!(DrawSurface::<String>::clickable(&mut surface, "https://example.com"));
        assert!(!DrawSurface::<String>::clickable(&mut surface, "https://other.example"));
        assert_eq!(surface.calls().len(), 2);
    }
}
