//! Render state flags and font selection.

use crate::font_matrix::{FontAsset, FontKey, FontMatrix, Variant};
use crate::scale::SizeTier;

/// Heading level of the "small" size context.
pub const SMALL_LEVEL: u8 = 7;
/// Heading level of the "tiny" size context.
pub const TINY_LEVEL: u8 = 8;

/// Font used when the heading level is outside 0-8.
pub const FALLBACK_FONT: FontKey = FontKey::new(Variant::Bold, SizeTier::Body);
/// Font used for table header cells.
pub const TABLE_HEADER_FONT: FontKey = FontKey::new(Variant::Bold, SizeTier::Body);

/// One open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    /// Next item number for ordered lists, `None` for bullet lists.
    pub next_number: Option<u64>,
}

/// Mutable flags for one render pass.
///
/// Every field is changed by an "enter" event and restored by its matching
/// "exit", so a pass over well-formed input ends back at `default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// 0 = body, 1-6 = headings, 7 = small, 8 = tiny.
    pub heading_level: u8,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub table_header: bool,
    pub table_border: bool,
    /// Target of the innermost open link.
    pub link: Option<String>,
    /// Open image spans. Text inside an image is alt text and is not drawn.
    pub image_depth: u32,
    pub in_code_block: bool,
    pub quote_depth: u32,
    pub lists: Vec<ListState>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            heading_level: 0,
            bold: false,
            italic: false,
            strikethrough: false,
            table_header: false,
            table_border: true,
            link: None,
            image_depth: 0,
            in_code_block: false,
            quote_depth: 0,
            lists: Vec::new(),
        }
    }
}

impl RenderState {
    #[inline]
    pub fn variant(&self) -> Variant {
        Variant::from_flags(self.bold, self.italic)
    }

    /// Matrix cell for the current flags.
    pub fn font_key(&self) -> FontKey {
        if self.table_header {
            return TABLE_HEADER_FONT;
        }
        match SizeTier::from_heading_level(self.heading_level) {
            Some(tier) => FontKey::new(self.variant(), tier),
            None => {
                tracing::trace!(level = self.heading_level, "heading level out of range, using fallback font");
                FALLBACK_FONT
            }
        }
    }
}

/// Pick the font for the current render state.
#[inline]
pub fn resolve_font<'m, F>(matrix: &'m FontMatrix<F>, state: &RenderState) -> &'m FontAsset<F> {
    matrix.get(state.font_key())
}
