//! Notes Render: typographic markdown rendering for immediate-mode hosts.
//!
//! Maps a markdown note onto styled draw calls. Fonts come from a
//! [`FontMatrix`] of four style variants at nine size tiers, built once at
//! startup; every frame the whole note is walked again through
//! [`markdown::render`].
//!
//! # Usage
//!
//! ```ignore
//! use notes_render::{FontMatrix, FontdueLoader, TypographyConfig, markdown};
//!
//! let config = TypographyConfig::default();
//! let matrix = FontMatrix::load(&config.size_table(), &config.fonts, &mut FontdueLoader::new())?;
//!
//! // every frame:
//! markdown::render(&note.content, &matrix, &capabilities, &mut surface);
//! ```

// Core primitives
pub mod primitives;
pub mod error;
pub mod theme;

// Typography
pub mod scale;
pub mod font_matrix;
pub mod style;
pub mod config;

// Host boundary
pub mod surface;
pub mod images;
pub mod capabilities;

// Markdown walker
pub mod markdown;

// Re-export core types
pub use primitives::{Color, Point, Size};
pub use error::{ConfigError, FontError};
pub use scale::{SizeTier, SizeTierTable, TIER_COUNT, compute_sizes};
pub use font_matrix::{FaceLoader, FontAsset, FontKey, FontMatrix, FontPaths, FontdueLoader, Variant};
pub use style::{RenderState, resolve_font};
pub use config::TypographyConfig;
pub use surface::{DrawCall, DrawSurface, RecordedRun, RecordingSurface, RunStyle};
pub use images::{ImageInfo, ImageRegistry, TextureId};
pub use capabilities::{DirectiveStyle, RenderCapabilities, builtin_directive};
pub use theme::Theme;
