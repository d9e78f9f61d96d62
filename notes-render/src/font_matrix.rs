//! Font matrix: every style variant rasterized at every size tier.
//!
//! Built once at startup and shared read-only by every render pass. A matrix
//! only exists fully populated, so `lookup` cannot miss.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use serde::{Deserialize, Serialize};

use crate::error::FontError;
use crate::scale::{SizeTier, SizeTierTable, TIER_COUNT};

/// Number of style variants.
pub const VARIANT_COUNT: usize = 4;

/// Variant bit set by strong text.
pub const BOLD_BIT: u8 = 0b01;
/// Variant bit set by emphasized text.
pub const ITALIC_BIT: u8 = 0b10;

/// Font style variant. The discriminant is the bold/italic bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Regular = 0,
    Bold = BOLD_BIT as isize,
    Italic = ITALIC_BIT as isize,
    BoldItalic = (BOLD_BIT | ITALIC_BIT) as isize,
}

impl Variant {
    pub const ALL: [Variant; VARIANT_COUNT] = [
        Variant::Regular,
        Variant::Bold,
        Variant::Italic,
        Variant::BoldItalic,
    ];

    /// Variant for a bold/italic bit set. Bits outside the two style bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Variant {
        Self::ALL[(bits & (BOLD_BIT | ITALIC_BIT)) as usize]
    }

    #[inline]
    pub const fn from_flags(bold: bool, italic: bool) -> Variant {
        let mut bits = 0;
        if bold {
            bits |= BOLD_BIT;
        }
        if italic {
            bits |= ITALIC_BIT;
        }
        Self::from_bits(bits)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Address of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub variant: Variant,
    pub tier: SizeTier,
}

impl FontKey {
    #[inline]
    pub const fn new(variant: Variant, tier: SizeTier) -> Self {
        Self { variant, tier }
    }
}

/// A face rasterized at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct FontAsset<F = Font> {
    key: FontKey,
    size_px: f32,
    face: F,
}

impl<F> FontAsset<F> {
    #[inline]
    pub fn key(&self) -> FontKey {
        self.key
    }

    #[inline]
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    #[inline]
    pub fn face(&self) -> &F {
        &self.face
    }
}

/// Font file for each style variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPaths {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub italic: PathBuf,
    pub bold_italic: PathBuf,
}

impl FontPaths {
    pub fn path(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Regular => &self.regular,
            Variant::Bold => &self.bold,
            Variant::Italic => &self.italic,
            Variant::BoldItalic => &self.bold_italic,
        }
    }
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("data/ttf/Hack-Regular.ttf"),
            bold: PathBuf::from("data/ttf/Hack-Bold.ttf"),
            italic: PathBuf::from("data/ttf/Hack-Italic.ttf"),
            bold_italic: PathBuf::from("data/ttf/Hack-BoldItalic.ttf"),
        }
    }
}

/// Loads one font face at one pixel size.
pub trait FaceLoader {
    type Face;

    fn load_face(&mut self, path: &Path, size_px: f32) -> Result<Self::Face, FontError>;
}

/// Rasterizes faces with fontdue. Each font file is read from disk once.
#[derive(Default)]
pub struct FontdueLoader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl FontdueLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FaceLoader for FontdueLoader {
    type Face = Font;

    fn load_face(&mut self, path: &Path, size_px: f32) -> Result<Font, FontError> {
        let bytes = match self.files.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let bytes = std::fs::read(path).map_err(|source| FontError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                entry.insert(bytes)
            }
        };

        let settings = FontSettings {
            scale: size_px,
            ..FontSettings::default()
        };
        Font::from_bytes(bytes.as_slice(), settings).map_err(|reason| FontError::Rasterize {
            path: path.to_path_buf(),
            size: size_px,
            reason: reason.to_string(),
        })
    }
}

/// Fully populated variant x tier table of font assets.
pub struct FontMatrix<F = Font> {
    cells: [[FontAsset<F>; TIER_COUNT]; VARIANT_COUNT],
}

impl<F> FontMatrix<F> {
    /// Rasterize every (variant, tier) pair. The first failure aborts the load.
    pub fn load<L>(table: &SizeTierTable, paths: &FontPaths, loader: &mut L) -> Result<Self, FontError>
    where
        L: FaceLoader<Face = F>,
    {
        let [regular, bold, italic, bold_italic] = Variant::ALL;
        let cells = [
            Self::load_row(regular, table, paths, loader)?,
            Self::load_row(bold, table, paths, loader)?,
            Self::load_row(italic, table, paths, loader)?,
            Self::load_row(bold_italic, table, paths, loader)?,
        ];

        tracing::debug!(
            cells = VARIANT_COUNT * TIER_COUNT,
            body_px = table.size(SizeTier::Body),
            "font matrix loaded"
        );
        Ok(Self { cells })
    }

    fn load_row<L>(
        variant: Variant,
        table: &SizeTierTable,
        paths: &FontPaths,
        loader: &mut L,
    ) -> Result<[FontAsset<F>; TIER_COUNT], FontError>
    where
        L: FaceLoader<Face = F>,
    {
        let path = paths.path(variant);
        let mut load = |tier: SizeTier| -> Result<FontAsset<F>, FontError> {
            let size_px = table.size(tier);
            if !(size_px.is_finite() && size_px > 0.0) {
                return Err(FontError::InvalidSize { size: size_px });
            }
            Ok(FontAsset {
                key: FontKey::new(variant, tier),
                size_px,
                face: loader.load_face(path, size_px)?,
            })
        };

        let [h1, h2, h3, h4, h5, h6, body, small, tiny] = SizeTier::ALL;
        Ok([
            load(h1)?,
            load(h2)?,
            load(h3)?,
            load(h4)?,
            load(h5)?,
            load(h6)?,
            load(body)?,
            load(small)?,
            load(tiny)?,
        ])
    }

    #[inline]
    pub fn lookup(&self, variant: Variant, tier: SizeTier) -> &FontAsset<F> {
        &self.cells[variant.index()][tier.index()]
    }

    #[inline]
    pub fn get(&self, key: FontKey) -> &FontAsset<F> {
        self.lookup(key.variant, key.tier)
    }

    /// All assets, variant-major.
    pub fn iter(&self) -> impl Iterator<Item = &FontAsset<F>> + '_ {
        self.cells.iter().flatten()
    }
}

/// Loader that labels each cell instead of reading font files.
#[cfg(test)]
pub(crate) struct LabelLoader;

#[cfg(test)]
impl FaceLoader for LabelLoader {
    type Face = String;

    fn load_face(&mut self, path: &Path, size_px: f32) -> Result<String, FontError> {
        Ok(format!("{}@{size_px}", path.display()))
    }
}

#[cfg(test)]
pub(crate) fn test_matrix() -> FontMatrix<String> {
    let table = crate::scale::compute_sizes(16.0, 1.125);
    FontMatrix::load(&table, &FontPaths::default(), &mut LabelLoader).expect("label loader never fails")
}
