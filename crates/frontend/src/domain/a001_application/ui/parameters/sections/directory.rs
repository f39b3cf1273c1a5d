use super::super::view_model::ParametersVm;
use super::{lines_view, TextItem};
use crate::shared::components::ui::Checkbox;
use crate::shared::components::{JsonnetVarsInput, PanelItem};
use contracts::domain::a001_application::JsonnetVar;
use contracts::shared::source_parameters::validation::{EXT_VARS_FIELD, TLAS_FIELD};
use leptos::prelude::*;

fn describe(var: &JsonnetVar) -> String {
    if var.code {
        format!("{}={} (code)", var.name, var.value)
    } else {
        format!("{}={}", var.name, var.value)
    }
}

/// Jsonnet variable list, editable with its validation error underneath
#[component]
fn JsonnetVarsItem(
    vm: ParametersVm,
    title: &'static str,
    field: &'static str,
    #[prop(into)] value: Signal<Vec<JsonnetVar>>,
    on_change: Callback<Vec<JsonnetVar>>,
) -> impl IntoView {
    let error = Signal::derive(move || vm.field_error(field));

    view! {
        <PanelItem title=title>
            {move || if vm.editing.get() {
                view! { <JsonnetVarsInput value=value on_change=on_change error=error /> }.into_any()
            } else {
                lines_view(value.get().iter().map(describe).collect()).into_any()
            }}
        </PanelItem>
    }
}

#[component]
pub fn DirectorySection(vm: ParametersVm) -> impl IntoView {
    let recurse = Signal::derive(move || vm.with_directory(|d| d.recurse));

    view! {
        <PanelItem title="DIRECTORY RECURSE">
            {move || if vm.editing.get() {
                view! {
                    <Checkbox
                        label="Recurse into subdirectories"
                        checked=recurse
                        on_change=Callback::new(move |checked: bool| {
                            vm.update_directory(|d| d.recurse = checked)
                        })
                    />
                }.into_any()
            } else {
                view! { <span>{move || recurse.get().to_string()}</span> }.into_any()
            }}
        </PanelItem>
        <JsonnetVarsItem
            vm=vm
            title="TOP-LEVEL ARGUMENTS"
            field=TLAS_FIELD
            value=Signal::derive(move || vm.with_directory(|d| d.jsonnet.tlas.clone()))
            on_change=Callback::new(move |vars: Vec<JsonnetVar>| {
                vm.update_directory(|d| d.jsonnet.tlas = vars)
            })
        />
        <JsonnetVarsItem
            vm=vm
            title="EXTERNAL VARIABLES"
            field=EXT_VARS_FIELD
            value=Signal::derive(move || vm.with_directory(|d| d.jsonnet.ext_vars.clone()))
            on_change=Callback::new(move |vars: Vec<JsonnetVar>| {
                vm.update_directory(|d| d.jsonnet.ext_vars = vars)
            })
        />
        <TextItem
            vm=vm
            title="INCLUDE"
            value=Signal::derive(move || vm.with_directory(|d| d.include.clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| {
                vm.update_directory(|d| d.include = (!v.is_empty()).then_some(v))
            })
        />
        <TextItem
            vm=vm
            title="EXCLUDE"
            value=Signal::derive(move || vm.with_directory(|d| d.exclude.clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| {
                vm.update_directory(|d| d.exclude = (!v.is_empty()).then_some(v))
            })
        />
    }
}
