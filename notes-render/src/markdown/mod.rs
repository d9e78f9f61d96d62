//! Markdown preview rendering.
//!
//! Uses pulldown-cmark for CommonMark + GFM parsing and walks its event
//! stream straight into draw calls. Nothing is retained between calls: the
//! host re-renders the whole note every frame.

pub mod directive;
mod visitor;

use pulldown_cmark::{Options, Parser};

use crate::capabilities::RenderCapabilities;
use crate::font_matrix::FontMatrix;
use crate::style::RenderState;
use crate::surface::DrawSurface;

use visitor::Visitor;

/// Markdown extensions the preview understands.
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render one markdown document onto `surface`.
///
/// Links activated during this frame are opened through `capabilities`
/// once the walk has finished.
pub fn render<F, C, S>(text: &str, matrix: &FontMatrix<F>, capabilities: &C, surface: &mut S)
where
    C: RenderCapabilities,
    S: DrawSurface<F>,
{
    let mut visitor = Visitor::new(matrix, capabilities, surface);
    visitor.walk(Parser::new_ext(text, parser_options()));
    let pass = visitor.finish();
    debug_assert_eq!(pass.state, RenderState::default(), "render state leaked past the walk");

    for href in &pass.activated {
        tracing::debug!(%href, "opening link");
        capabilities.open_link(href);
    }
}
