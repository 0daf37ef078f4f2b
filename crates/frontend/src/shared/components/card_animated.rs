//! Thaw [`Card`] that fades in, optionally staggered within a grid.
//!
//! The `card-appear` keyframes live in the stylesheet.

use leptos::prelude::*;
use thaw::Card;

const STAGGER_STEP_MS: u32 = 60;
const STAGGER_CAP_MS: u32 = 600;

/// Appearance delay of the `index`-th card of a grid, capped so long lists
/// do not trail in for seconds.
pub fn stagger_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(STAGGER_STEP_MS).min(STAGGER_CAP_MS)
}

#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 120);
        assert_eq!(stagger_delay(500), STAGGER_CAP_MS);
    }
}
