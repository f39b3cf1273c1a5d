use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of lines shown while collapsed
const COLLAPSED_LINES: usize = 10;

/// Long read-only text (YAML values), collapsed to its first lines
#[component]
pub fn Expandable(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let is_long = move || text.with(|t| t.lines().count() > COLLAPSED_LINES);
    let shown = move || {
        let t = text.get();
        if expanded.get() || !is_long() {
            t
        } else {
            t.lines().take(COLLAPSED_LINES).collect::<Vec<_>>().join("\n")
        }
    };

    view! {
        <div class="expandable">
            <pre class="expandable__text">{shown}</pre>
            <Show when=is_long>
                <a
                    class="expandable__toggle"
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() {
                        view! { {icon("chevron-down")} " Collapse" }.into_any()
                    } else {
                        view! { {icon("chevron-right")} " Show all" }.into_any()
                    }}
                </a>
            </Show>
        </div>
    }
}
