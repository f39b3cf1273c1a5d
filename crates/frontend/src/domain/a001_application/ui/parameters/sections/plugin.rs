use super::super::view_model::ParametersVm;
use super::{lines_view, ChoiceItem};
use crate::shared::components::{MapInput, NameValueInput, PanelItem, PanelSection, StringArrayInput};
use contracts::domain::a001_application::{NameValue, ParameterShape, ParameterValue};
use contracts::shared::source_parameters::plugin::PLUGIN_PARAMETER_HINT;
use contracts::shared::source_parameters::{PluginDraft, PluginParamAction, PluginParamRow};
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

#[component]
pub fn PluginSection(vm: ParametersVm) -> impl IntoView {
    let plugin_names = Signal::derive(move || {
        vm.settings
            .with(|s| s.as_ref().map(|s| s.plugin_names()))
            .unwrap_or_default()
    });
    let env = Signal::derive(move || vm.with_plugin(|p| p.env.clone()));
    let rows = Memo::new(move |_| vm.plugin_rows());

    view! {
        <ChoiceItem
            vm=vm
            title="NAME"
            value=Signal::derive(move || vm.with_plugin(|p| p.name.clone()))
            choices=plugin_names
            on_change=Callback::new(move |name: String| vm.update_plugin(|p| p.name = name))
        />
        <PanelItem title="ENV">
            {move || if vm.editing.get() {
                view! {
                    <NameValueInput
                        value=env
                        on_change=Callback::new(move |rows: Vec<NameValue>| vm.update_plugin(|p| p.env = rows))
                    />
                }.into_any()
            } else {
                lines_view(env.get().into_iter().map(|e| format!("{}={}", e.name, e.value)).collect())
                    .into_any()
            }}
        </PanelItem>
        <Show when=move || rows.with(|r| !r.is_empty())>
            <PanelSection title="PARAMETERS" />
        </Show>
        <For
            each=move || rows.get()
            key=|row| (row.name.clone(), row.shape)
            children=move |row| view! { <PluginParamItem vm=vm row=row /> }
        />
    }
}

#[component]
fn PluginParamItem(vm: ParametersVm, row: PluginParamRow) -> impl IntoView {
    let title = row.title.clone();
    let tooltip = row.tooltip.clone();
    let marker_title = match &tooltip {
        Some(t) => format!("{} {}", PLUGIN_PARAMETER_HINT, t),
        None => PLUGIN_PARAMETER_HINT.to_string(),
    };
    let marker_icon = row.from_plugin.then_some("puzzle");
    let row = StoredValue::new(row);

    view! {
        <PanelItem title=title marker_icon=marker_icon marker_title=marker_title>
            {move || if vm.editing.get() {
                view! { <PluginParamEditor vm=vm row=row /> }.into_any()
            } else {
                let value = row.with_value(|r| r.effective_value().display());
                view! { <span>{value}</span> }.into_any()
            }}
        </PanelItem>
    }
}

#[component]
fn PluginParamEditor(vm: ParametersVm, row: StoredValue<PluginParamRow>) -> impl IntoView {
    let name = row.with_value(|r| r.name.clone());
    let shape = row.with_value(|r| r.shape);
    // Bumped on reset so the map editor reloads its rows
    let resets = RwSignal::new(0u32);

    let value = Signal::derive(move || {
        vm.draft.with(|d| {
            let empty = PluginDraft::default();
            row.with_value(|r| r.draft_value(d.as_plugin().unwrap_or(&empty)))
        })
    });
    let action = Signal::derive(move || {
        vm.draft.with(|d| {
            let empty = PluginDraft::default();
            row.with_value(|r| r.action(d.as_plugin().unwrap_or(&empty)))
        })
    });
    let set_value = {
        let name = name.clone();
        Callback::new(move |value: ParameterValue| {
            vm.update_plugin(|p| p.set_value(&name, value))
        })
    };
    let reset = Callback::new(move |_: ()| {
        vm.update_plugin(|p| {
            p.reset(&name);
        });
        resets.update(|n| *n += 1);
    });

    let editor = move || match shape {
        ParameterShape::String => view! {
            <input
                class="form__input"
                type="text"
                prop:value=move || match value.get() {
                    ParameterValue::String(s) => s,
                    _ => String::new(),
                }
                on:input=move |ev| set_value.run(ParameterValue::String(event_target_value(&ev)))
            />
        }
        .into_any(),
        ParameterShape::Array => view! {
            <StringArrayInput
                value=Signal::derive(move || match value.get() {
                    ParameterValue::Array(items) => items,
                    _ => Vec::new(),
                })
                on_change=Callback::new(move |items: Vec<String>| set_value.run(ParameterValue::Array(items)))
            />
        }
        .into_any(),
        ParameterShape::Map => {
            resets.track();
            let initial = match value.get_untracked() {
                ParameterValue::Map(map) => map,
                _ => BTreeMap::new(),
            };
            view! {
                <MapInput
                    value=initial
                    on_change=Callback::new(move |map: BTreeMap<String, String>| set_value.run(ParameterValue::Map(map)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="plugin-param">
            <div class="plugin-param__editor">{editor}</div>
            <ActionButton action=action on_click=reset />
        </div>
    }
}

#[component]
fn ActionButton(action: Signal<PluginParamAction>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            size=ButtonSize::Small
            on_click=move |_| on_click.run(())
            disabled=Signal::derive(move || action.get().disabled)
            attr:title=move || action.get().tooltip
        >
            {move || action.get().label}
        </Button>
    }
}
