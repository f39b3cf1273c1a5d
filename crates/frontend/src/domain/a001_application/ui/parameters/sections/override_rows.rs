use super::super::view_model::ParametersVm;
use crate::shared::components::{PanelItem, PanelSection};
use contracts::domain::a001_application::KustomizeImage;
use contracts::shared::source_parameters::{OverrideGroup, ReconciledItem};
use leptos::prelude::*;

/// Section of overridable rows: images, helm parameters, helm file parameters
#[component]
pub fn OverrideRows(vm: ParametersVm, group: OverrideGroup) -> impl IntoView {
    let items = Memo::new(move |_| vm.items(group));
    let visible = Memo::new(move |_| items.with(|i| vm.shows_group(group, i)));

    view! {
        <Show when=move || visible.get()>
            <PanelSection title=group.title() />
            <For
                each=move || items.get()
                key=|item| (item.name.clone(), item.override_index, item.value.clone())
                children=move |item| view! { <OverrideRow vm=vm group=group item=item /> }
            />
        </Show>
    }
}

#[component]
fn OverrideRow(vm: ParametersVm, group: OverrideGroup, item: ReconciledItem) -> impl IntoView {
    let overridden = item.is_overridden();
    let removable = item.can_remove_override();
    let marker_title = format!("Original value: {}", item.original);
    let item = StoredValue::new(item);
    let name = item.with_value(|i| i.name.clone());

    let edit_view = move || {
        let name = item.with_value(|i| i.name.clone());
        if vm.is_removed(group, &name) {
            return view! {
                <span class="editable-panel__original">
                    {item.with_value(|i| i.original.clone())}
                </span>
                <a
                    class="editable-panel__link"
                    on:click=move |_| item.with_value(|i| vm.keep_override(group, i))
                >
                    "Keep override"
                </a>
            }
            .into_any();
        }

        let editor = match group {
            OverrideGroup::Images => view! { <ImageOverrideEditor vm=vm item=item /> }.into_any(),
            _ => view! {
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || item.with_value(|i| vm.override_value(group, i))
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        item.with_value(|i| vm.set_override(group, i, &text));
                    }
                />
            }
            .into_any(),
        };

        view! {
            {editor}
            {removable.then(|| view! {
                <a
                    class="editable-panel__link"
                    on:click=move |_| item.with_value(|i| vm.remove_override(group, i))
                >
                    "Remove override"
                </a>
            })}
        }
        .into_any()
    };

    view! {
        <PanelItem
            title=name
            marker_icon=overridden.then_some("gavel")
            marker_title=marker_title
        >
            {move || if vm.editing.get() {
                edit_view().into_any()
            } else {
                view! { <span>{item.with_value(|i| i.value.clone())}</span> }.into_any()
            }}
        </PanelItem>
    }
}

/// Image override with the image name fixed to the row: only the
/// replacement name, tag and digest are editable
#[component]
fn ImageOverrideEditor(vm: ParametersVm, item: StoredValue<ReconciledItem>) -> impl IntoView {
    let image = Signal::derive(move || {
        item.with_value(|i| KustomizeImage::parse(&vm.override_value(OverrideGroup::Images, i)))
    });
    let edit = move |apply: fn(KustomizeImage, &str) -> KustomizeImage, text: String| {
        item.with_value(|i| {
            let mut next = apply(image.get_untracked(), &text);
            next.name = i.name.clone();
            vm.set_override(OverrideGroup::Images, i, &next.to_string());
        });
    };

    view! {
        <div class="image-override">
            <span class="image-override__name">{item.with_value(|i| i.name.clone())}</span>
            <span class="image-override__sep">"="</span>
            <input
                class="form__input"
                type="text"
                placeholder="new name"
                prop:value=move || image.with(|img| img.new_name.clone().unwrap_or_default())
                on:input=move |ev| edit(KustomizeImage::with_new_name, event_target_value(&ev))
            />
            <span class="image-override__sep">":"</span>
            <input
                class="form__input image-override__tag"
                type="text"
                placeholder="tag"
                prop:value=move || image.with(|img| img.new_tag.clone().unwrap_or_default())
                on:input=move |ev| edit(KustomizeImage::with_tag, event_target_value(&ev))
            />
            <span class="image-override__sep">"@"</span>
            <input
                class="form__input"
                type="text"
                placeholder="digest"
                prop:value=move || image.with(|img| img.digest.clone().unwrap_or_default())
                on:input=move |ev| edit(KustomizeImage::with_digest, event_target_value(&ev))
            />
        </div>
    }
}
