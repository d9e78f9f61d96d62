//! Host capabilities the renderer calls out to.
//!
//! One implementation per host platform supplies link opening, image lookup
//! and directive styling; font selection defaults to [`resolve_font`].

use crate::font_matrix::{FontAsset, FontMatrix};
use crate::images::ImageInfo;
use crate::primitives::Color;
use crate::style::{RenderState, SMALL_LEVEL, TINY_LEVEL, resolve_font};
use crate::theme::Theme;

/// Styling changes a recognized directive applies for the scope of its block.
///
/// `None` fields leave the current value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectiveStyle {
    pub text_color: Option<Color>,
    pub table_border: Option<bool>,
    pub heading_level: Option<u8>,
}

impl DirectiveStyle {
    /// Tinted text, borderless tables.
    pub const fn highlight() -> Self {
        Self {
            text_color: Some(Theme::HIGHLIGHT),
            table_border: Some(false),
            heading_level: None,
        }
    }

    pub const fn size_context(level: u8) -> Self {
        Self {
            text_color: None,
            table_border: None,
            heading_level: Some(level),
        }
    }
}

/// Directive classes every host understands.
pub fn builtin_directive(tag: &str) -> Option<DirectiveStyle> {
    match tag {
        "highlight" | "red" => Some(DirectiveStyle::highlight()),
        "small" => Some(DirectiveStyle::size_context(SMALL_LEVEL)),
        "tiny" => Some(DirectiveStyle::size_context(TINY_LEVEL)),
        _ => None,
    }
}

pub trait RenderCapabilities {
    /// Font for a text run under `state`.
    fn resolve_font<'m, F>(&self, matrix: &'m FontMatrix<F>, state: &RenderState) -> &'m FontAsset<F> {
        resolve_font(matrix, state)
    }

    /// Open an activated link. Fire-and-forget.
    fn open_link(&self, href: &str);

    /// Texture for an image href, or `None` to skip the image.
    fn resolve_image(&self, href: &str) -> Option<ImageInfo>;

    /// Styling for a directive class, or `None` if the class is not recognized.
    fn directive(&self, tag: &str) -> Option<DirectiveStyle> {
        builtin_directive(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_directives() {
        assert_eq!(builtin_directive("red"), Some(DirectiveStyle::highlight()));
        assert_eq!(builtin_directive("highlight"), Some(DirectiveStyle::highlight()));
        assert_eq!(builtin_directive("small").and_then(|s| s.heading_level), Some(SMALL_LEVEL));
        assert_eq!(builtin_directive("tiny").and_then(|s| s.heading_level), Some(TINY_LEVEL));
        assert_eq!(builtin_directive("sidebar"), None);
        assert_eq!(builtin_directive(""), None);
    }

    #[test]
    fn test_highlight_suppresses_borders() {
        let style = DirectiveStyle::highlight();
        assert_eq!(style.table_border, Some(false));
        assert_eq!(style.text_color, Some(Theme::HIGHLIGHT));
    }
}
