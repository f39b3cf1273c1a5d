//! One section per manifest generation tool, plus the rows shared by them

mod directory;
mod helm;
mod kustomize;
mod override_rows;
mod plugin;

pub use directory::DirectorySection;
pub use helm::HelmSection;
pub use kustomize::KustomizeSection;
pub use plugin::PluginSection;

use super::view_model::ParametersVm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::PanelItem;
use leptos::prelude::*;

/// Single-line text field: plain text when viewing, an input when editing
#[component]
fn TextItem(
    vm: ParametersVm,
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <PanelItem title=title>
            {move || if vm.editing.get() {
                view! { <Input value=value on_input=on_input /> }.into_any()
            } else {
                view! { <span>{move || value.get()}</span> }.into_any()
            }}
        </PanelItem>
    }
}

/// Choice from a list loaded from settings, free text while it is empty.
/// Only the listed choices are offered, plus the current value.
#[component]
fn ChoiceItem(
    vm: ParametersVm,
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] choices: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || choice_options(&choices.get()));
    let has_choices = move || choices.with(|c| !c.is_empty());

    view! {
        <PanelItem title=title>
            {move || match (vm.editing.get(), has_choices()) {
                (true, true) => view! {
                    <Select value=value options=options on_change=on_change />
                }.into_any(),
                (true, false) => view! { <Input value=value on_input=on_change /> }.into_any(),
                (false, _) => view! { <span>{move || value.get()}</span> }.into_any(),
            }}
        </PanelItem>
    }
}

fn choice_options(choices: &[String]) -> Vec<(String, String)> {
    choices.iter().map(|c| (c.clone(), c.clone())).collect()
}

/// Read-only list, one entry per line
fn lines_view(items: Vec<String>) -> impl IntoView {
    view! {
        <div class="editable-panel__lines">
            {items.into_iter().map(|item| view! { <div>{item}</div> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_have_no_default_entry() {
        let options = choice_options(&["cmp-a".to_string(), "cmp-b".to_string()]);
        assert_eq!(
            options,
            vec![
                ("cmp-a".to_string(), "cmp-a".to_string()),
                ("cmp-b".to_string(), "cmp-b".to_string()),
            ]
        );
        assert!(choice_options(&[]).is_empty());
    }
}
