#![forbid(unsafe_code)]

//! Height-application policy.
//!
//! The embedding page historically shipped two behaviors for the same
//! message: apply the reported height verbatim, or add a fixed bottom
//! margin. Whether padding is needed depends on whether the embedded
//! page's own measurement already includes its bottom margin; the two
//! must never be mixed across environments. The policy is therefore a
//! single configuration value, applied uniformly.

/// Fixed margin added by [`HeightPolicy::Padded`], in logical pixels.
pub const PADDED_MARGIN_PX: f64 = 20.0;

/// How a reported content height maps to the applied iframe height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeightPolicy {
    /// Apply the reported height verbatim. Correct when the embedded
    /// page measures its full content box including margins; padding on
    /// top of that caused resize mini-loops.
    #[default]
    Exact,
    /// Apply the reported height plus [`PADDED_MARGIN_PX`].
    Padded,
}

/// Policy used when none is configured explicitly.
pub const DEFAULT_HEIGHT_POLICY: HeightPolicy = HeightPolicy::Exact;

impl HeightPolicy {
    /// Height to apply, in logical pixels, for a validated report.
    #[must_use]
    pub fn applied_height(self, reported: f64) -> f64 {
        match self {
            Self::Exact => reported,
            Self::Padded => reported + PADDED_MARGIN_PX,
        }
    }
}
