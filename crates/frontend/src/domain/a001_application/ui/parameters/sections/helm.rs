use super::super::view_model::ParametersVm;
use super::lines_view;
use super::override_rows::OverrideRows;
use crate::shared::components::ui::Textarea;
use crate::shared::components::{Expandable, PanelItem, StringArrayInput};
use contracts::shared::source_parameters::OverrideGroup;
use leptos::prelude::*;

#[component]
pub fn HelmSection(vm: ParametersVm) -> impl IntoView {
    let value_files = Signal::derive(move || vm.with_helm(|h| h.value_files.clone()));
    let values = Signal::derive(move || vm.with_helm(|h| h.values.clone().unwrap_or_default()));
    let available_files = Signal::derive(move || {
        vm.details
            .with(|d| d.helm.as_ref().map(|h| h.value_files.join(", ")))
            .unwrap_or_default()
    });
    let chart_values = Signal::derive(move || {
        vm.details
            .with(|d| d.helm.as_ref().and_then(|h| h.values.clone()))
            .unwrap_or_default()
    });

    view! {
        <PanelItem title="VALUES FILES">
            {move || if vm.editing.get() {
                view! {
                    <StringArrayInput
                        value=value_files
                        placeholder=available_files.get()
                        on_change=Callback::new(move |files: Vec<String>| {
                            vm.update_helm(|h| h.value_files = files)
                        })
                    />
                }.into_any()
            } else {
                lines_view(value_files.get()).into_any()
            }}
        </PanelItem>
        <Show when=move || vm.shows_helm_values()>
            <PanelItem title="VALUES">
                {move || if vm.editing.get() {
                    view! {
                        <Textarea
                            value=values
                            on_input=Callback::new(move |text: String| {
                                vm.update_helm(|h| h.values = (!text.is_empty()).then_some(text))
                            })
                        />
                        <Show when=move || chart_values.with(|v| !v.is_empty())>
                            <div class="editable-panel__reference">
                                <label class="form__label">"values.yaml"</label>
                                <Expandable text=chart_values />
                            </div>
                        </Show>
                    }.into_any()
                } else {
                    view! { <Expandable text=values /> }.into_any()
                }}
            </PanelItem>
        </Show>
        <OverrideRows vm=vm group=OverrideGroup::HelmParameters />
        <OverrideRows vm=vm group=OverrideGroup::HelmFileParameters />
    }
}
