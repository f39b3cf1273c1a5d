//! CardAnimated: Thaw Card with the `card-appear` entrance animation.
//!
//! ```text
//! <CardAnimated delay_ms=80 style="max-width: 960px;">
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] animated with `@keyframes card-appear` from `panel.css`.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds, for staggered cards.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
