//! Saved rows/modules listing order.

use bbkit_core::SavedRowsOrder;
use serde::{Deserialize, Serialize};

/// A saved row or module as listed in the builder's template picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub title: String,
    /// Publish time, epoch seconds.
    pub posted_at: u64,
}

/// Sorts the listing by publish date, title ascending as the tie-break.
/// `Default` leaves the host's ordering alone.
pub fn order_saved_templates(templates: &mut [SavedTemplate], order: SavedRowsOrder) {
    match order {
        SavedRowsOrder::Default => {}
        SavedRowsOrder::DateAsc => templates.sort_by(|a, b| {
            a.posted_at
                .cmp(&b.posted_at)
                .then_with(|| a.title.cmp(&b.title))
        }),
        SavedRowsOrder::DateDesc => templates.sort_by(|a, b| {
            b.posted_at
                .cmp(&a.posted_at)
                .then_with(|| a.title.cmp(&b.title))
        }),
    }
}
