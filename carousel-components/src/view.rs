//! Render-tree description types.
//!
//! One render pass of the carousel produces a [`CarouselView`]: plain data
//! the host maps onto its own widget tree. Nothing here knows how to draw;
//! the carousel's contract ends at this description.

/// One cell of the visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<V> {
    /// A rendered item.
    Item(V),
    /// An empty cell padding a short last page so the layout grid keeps its
    /// shape.
    Placeholder,
}

impl<V> Slot<V> {
    /// Whether this slot is padding.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder)
    }

    /// The rendered item, if any.
    pub fn item(&self) -> Option<&V> {
        match self {
            Slot::Item(item) => Some(item),
            Slot::Placeholder => None,
        }
    }
}

/// One pagination dot. Tapping it should jump to `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// The page this indicator addresses.
    pub page: usize,
    /// Whether this is the current page.
    pub active: bool,
}

/// Forward/back button state.
///
/// Navigation wraps at both ends, so the buttons have no disabled edge
/// states today; the flags exist so a host styling non-wrapping variants
/// has somewhere to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    /// Whether the "previous" button is actionable.
    pub prev_enabled: bool,
    /// Whether the "next" button is actionable.
    pub next_enabled: bool,
}

/// The carousel's full output for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView<V> {
    /// The current page's cells, in order, padded per configuration.
    pub slots: Vec<Slot<V>>,
    /// One indicator per page; empty when indicators are suppressed.
    pub indicators: Vec<Indicator>,
    /// Navigation buttons; `None` when controls are suppressed.
    pub controls: Option<NavControls>,
    /// Opaque spacing token, passed through from the arguments unchanged.
    pub gap: String,
    /// Opaque style token, passed through from the arguments unchanged.
    pub class: String,
    /// The page being shown.
    pub current_page: usize,
    /// Total page count.
    pub total_pages: usize,
}

impl<V> CarouselView<V> {
    /// Number of padding slots on this page.
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }
}
