//! Volume level
//!
//! The backend contract promises the clamp, not the caller, so the level is
//! a newtype that can only hold `[0.0, 1.0]`.

/// Playback volume in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Silent
    pub const MUTED: Self = Self(0.0);

    /// Full volume
    pub const FULL: Self = Self(1.0);

    /// Create a volume, clamping out-of-range input
    ///
    /// Non-finite input is treated as muted.
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_finite() {
            Self(level.clamp(0.0, 1.0))
        } else {
            Self::MUTED
        }
    }

    /// Level in `[0.0, 1.0]`
    #[must_use]
    pub fn level(&self) -> f32 {
        self.0
    }

    /// Level in `[0.0, 100.0]`, for native engines that speak percent
    #[must_use]
    pub fn percent(&self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}
