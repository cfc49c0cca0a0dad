//! Viewport breakpoint classification.
//!
//! The carousel shows a different number of items per page depending on how
//! wide the host viewport is. [`ViewportTier`] buckets a raw pixel width
//! into one of three tiers, and [`BreakpointTable`] maps each tier to an
//! items-per-page count.

use tracing::debug;

use crate::{error::ConfigError, px::Px};

/// Widths at or above this are at least tablet tier.
pub const TABLET_MIN_WIDTH: Px = Px(640);
/// Widths at or above this are desktop tier.
pub const DESKTOP_MIN_WIDTH: Px = Px(1024);

/// Size class of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportTier {
    /// Narrower than [`TABLET_MIN_WIDTH`].
    Mobile,
    /// At least [`TABLET_MIN_WIDTH`], narrower than [`DESKTOP_MIN_WIDTH`].
    Tablet,
    /// At least [`DESKTOP_MIN_WIDTH`].
    Desktop,
}

impl ViewportTier {
    /// Buckets a viewport width into its tier.
    pub fn classify(width: Px) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Items-per-page counts keyed by viewport tier.
///
/// `tablet` is optional and falls back to the `mobile` count when unset.
///
/// # Examples
///
/// ```
/// use carousel_core::{BreakpointTable, Px};
///
/// let table = BreakpointTable {
///     mobile: 1,
///     tablet: Some(2),
///     desktop: 3,
/// };
/// assert_eq!(table.items_per_page(Px(500)), 1);
/// assert_eq!(table.items_per_page(Px(800)), 2);
/// assert_eq!(table.items_per_page(Px(1200)), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointTable {
    /// Items per page on mobile-width viewports.
    pub mobile: usize,
    /// Items per page on tablet-width viewports; `None` falls back to
    /// `mobile`.
    pub tablet: Option<usize>,
    /// Items per page on desktop-width viewports.
    pub desktop: usize,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            mobile: 1,
            tablet: Some(2),
            desktop: 3,
        }
    }
}

impl BreakpointTable {
    /// The items-per-page count for a given tier.
    pub fn for_tier(&self, tier: ViewportTier) -> usize {
        match tier {
            ViewportTier::Mobile => self.mobile,
            ViewportTier::Tablet => self.tablet.unwrap_or(self.mobile),
            ViewportTier::Desktop => self.desktop,
        }
    }

    /// Classifies `width` and resolves the items-per-page count for it.
    pub fn items_per_page(&self, width: Px) -> usize {
        let tier = ViewportTier::classify(width);
        let count = self.for_tier(tier);
        debug!(?tier, count, %width, "resolved items per page");
        count
    }

    /// Checks that every tier resolves to at least one item per page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in [
            ViewportTier::Mobile,
            ViewportTier::Tablet,
            ViewportTier::Desktop,
        ] {
            if self.for_tier(tier) == 0 {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "breakpoint tier {tier:?} resolves to zero items per page"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ViewportTier::classify(Px(0)), ViewportTier::Mobile);
        assert_eq!(ViewportTier::classify(Px(639)), ViewportTier::Mobile);
        assert_eq!(ViewportTier::classify(Px(640)), ViewportTier::Tablet);
        assert_eq!(ViewportTier::classify(Px(1023)), ViewportTier::Tablet);
        assert_eq!(ViewportTier::classify(Px(1024)), ViewportTier::Desktop);
    }

    #[test]
    fn test_items_per_page_per_width() {
        let table = BreakpointTable {
            mobile: 1,
            tablet: Some(2),
            desktop: 3,
        };
        assert_eq!(table.items_per_page(Px(500)), 1);
        assert_eq!(table.items_per_page(Px(800)), 2);
        assert_eq!(table.items_per_page(Px(1200)), 3);
    }

    #[test]
    fn test_tablet_falls_back_to_mobile() {
        let table = BreakpointTable {
            mobile: 2,
            tablet: None,
            desktop: 4,
        };
        assert_eq!(table.items_per_page(Px(800)), 2);
    }

    #[test]
    fn test_validate_rejects_zero_tier() {
        let table = BreakpointTable {
            mobile: 0,
            tablet: Some(2),
            desktop: 3,
        };
        assert!(table.validate().is_err());

        let fallback_zero = BreakpointTable {
            mobile: 0,
            tablet: None,
            desktop: 3,
        };
        assert!(fallback_zero.validate().is_err());

        assert!(BreakpointTable::default().validate().is_ok());
    }
}
