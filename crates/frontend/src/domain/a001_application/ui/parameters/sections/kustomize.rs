use super::super::view_model::ParametersVm;
use super::override_rows::OverrideRows;
use super::TextItem;
use crate::shared::components::ui::Select;
use crate::shared::components::PanelItem;
use contracts::shared::source_parameters::visibility::DEFAULT_VERSION_LABEL;
use contracts::shared::source_parameters::{version_label, OverrideGroup};
use leptos::prelude::*;

#[component]
pub fn KustomizeSection(vm: ParametersVm) -> impl IntoView {
    let versions = Signal::derive(move || {
        vm.settings
            .with(|s| s.as_ref().map(|s| s.kustomize_versions.clone()))
            .unwrap_or_default()
    });
    let version = Signal::derive(move || vm.with_kustomize(|k| k.version.clone()));
    let version_options = Signal::derive(move || {
        std::iter::once((String::new(), DEFAULT_VERSION_LABEL.to_string()))
            .chain(versions.get().into_iter().map(|v| (v.clone(), v)))
            .collect::<Vec<_>>()
    });

    view! {
        <PanelItem title="VERSION">
            {move || match (vm.editing.get(), versions.with(|v| !v.is_empty())) {
                (true, true) => view! {
                    <Select
                        value=version
                        options=version_options
                        on_change=Callback::new(move |v: String| vm.update_kustomize(|k| k.version = v))
                    />
                }.into_any(),
                (true, false) => view! { <span>{DEFAULT_VERSION_LABEL}</span> }.into_any(),
                (false, _) => view! {
                    <span>{move || version.with(|v| version_label(v).to_string())}</span>
                }.into_any(),
            }}
        </PanelItem>
        <TextItem
            vm=vm
            title="NAME PREFIX"
            value=Signal::derive(move || vm.with_kustomize(|k| k.name_prefix.clone()))
            on_input=Callback::new(move |v: String| vm.update_kustomize(|k| k.name_prefix = v))
        />
        <TextItem
            vm=vm
            title="NAME SUFFIX"
            value=Signal::derive(move || vm.with_kustomize(|k| k.name_suffix.clone()))
            on_input=Callback::new(move |v: String| vm.update_kustomize(|k| k.name_suffix = v))
        />
        <OverrideRows vm=vm group=OverrideGroup::Images />
    }
}
