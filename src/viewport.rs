//! Scroll offsets used by the navigation script, exposed to the page as
//! data attributes.

/// A section is active once its top edge is at or above this offset
/// from the top of the viewport.
pub const ACTIVE_OFFSET: f64 = 150.0;

/// Scroll depth after which the header switches to its compact style.
pub const SCROLLED_OFFSET: f64 = 50.0;
