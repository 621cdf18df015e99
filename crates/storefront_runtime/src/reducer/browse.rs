//! Filter facets and overlay management.

use crate::model::{FilterState, Overlay, StoreState};
use crate::reducer::StoreEffect;

pub(super) fn toggle_color(state: &mut StoreState, color: String) {
    if let Some(pos) = state.filters.colors.iter().position(|c| *c == color) {
        state.filters.colors.remove(pos);
    } else {
        state.filters.colors.push(color);
    }
}

pub(super) fn reset_filters(state: &mut StoreState, _effects: &mut Vec<StoreEffect>) {
    state.filters = FilterState::default();
    state.search_query.clear();
}

/// Replaces the open overlay. At most one overlay is ever open, so the host
/// holds at most one focus trap.
pub(super) fn set_overlay(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    next: Option<Overlay>,
) {
    if state.open_overlay == next {
        return;
    }
    state.open_overlay = next;
    effects.push(StoreEffect::OverlayChanged(next));
}
