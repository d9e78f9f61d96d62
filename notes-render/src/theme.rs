//! Preview theme - semantic colors for rendered markdown.

use crate::primitives::Color;

/// Preview color palette (light background).
pub struct Theme;

impl Theme {
    pub const LINK: Color = Color::rgb(0.14, 0.42, 0.85);
    pub const CODE: Color = Color::rgb(0.65, 0.2, 0.45);
    pub const QUOTE: Color = Color::rgb(0.35, 0.38, 0.42);

    /// Tint applied inside a `highlight` directive.
    pub const HIGHLIGHT: Color = Color::RED;

    pub const IMAGE_TINT: Color = Color::WHITE;
    pub const IMAGE_BORDER: Color = Color::TRANSPARENT;
}
