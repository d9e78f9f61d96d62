//! Size tiers derived from one base size by geometric progression.
//!
//! Tier `k` has size `base * ratio^k`, with h1 at `k = 6` down to tiny at
//! `k = -2`. Body text sits at `k = 0`, so it is exactly the base size.

/// Number of size tiers.
pub const TIER_COUNT: usize = 9;

/// One of the nine discrete size levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    Small,
    Tiny,
}

impl SizeTier {
    /// All tiers, largest first. Position in this array is the tier's index.
    pub const ALL: [SizeTier; TIER_COUNT] = [
        SizeTier::H1,
        SizeTier::H2,
        SizeTier::H3,
        SizeTier::H4,
        SizeTier::H5,
        SizeTier::H6,
        SizeTier::Body,
        SizeTier::Small,
        SizeTier::Tiny,
    ];

    /// Exponent applied to the scale ratio for this tier.
    #[inline]
    pub const fn exponent(self) -> i32 {
        6 - self.index() as i32
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a render heading level to a tier.
    ///
    /// 0 is body text, 1-6 are headings, 7 is small and 8 is tiny. Anything
    /// else has no tier.
    pub const fn from_heading_level(level: u8) -> Option<SizeTier> {
        match level {
            0 => Some(SizeTier::Body),
            1 => Some(SizeTier::H1),
            2 => Some(SizeTier::H2),
            3 => Some(SizeTier::H3),
            4 => Some(SizeTier::H4),
            5 => Some(SizeTier::H5),
            6 => Some(SizeTier::H6),
            7 => Some(SizeTier::Small),
            8 => Some(SizeTier::Tiny),
            _ => None,
        }
    }
}

/// Pixel sizes for every tier, h1 first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTierTable {
    sizes: [f32; TIER_COUNT],
}

impl SizeTierTable {
    #[cfg(test)]
    pub(crate) fn from_sizes(sizes: [f32; TIER_COUNT]) -> Self {
        Self { sizes }
    }

    /// Pixel size of a tier.
    #[inline]
    pub fn size(&self, tier: SizeTier) -> f32 {
        self.sizes[tier.index()]
    }

    /// Sizes in tier order, h1 first.
    #[inline]
    pub fn sizes(&self) -> &[f32; TIER_COUNT] {
        &self.sizes
    }

    /// `(tier, size)` pairs, h1 first.
    pub fn iter(&self) -> impl Iterator<Item = (SizeTier, f32)> + '_ {
        SizeTier::ALL.iter().map(|&tier| (tier, self.size(tier)))
    }
}

/// Compute the nine tier sizes from a base size and scale ratio.
///
/// Callers must pass `base_size > 0` and `ratio > 1`; other inputs give a
/// degenerate or non-monotonic table.
pub fn compute_sizes(base_size: f32, ratio: f32) -> SizeTierTable {
    debug_assert!(base_size > 0.0, "base size must be positive");
    debug_assert!(ratio > 1.0, "scale ratio must exceed 1");

    let mut sizes = [0.0; TIER_COUNT];
    for tier in SizeTier::ALL {
        sizes[tier.index()] = base_size * ratio.powi(tier.exponent());
    }
    SizeTierTable { sizes }
}
