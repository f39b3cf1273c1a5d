//! EditablePanel: card with a read-only view and an edit form.
//!
//! The panel owns only the header and the action buttons; the content reads
//! `editing` itself to choose between its view and its form.
//!
//! ```text
//! <EditablePanel title="HELM" editing=vm.editing saving=saving errors=errors
//!     on_edit=... on_save=... on_cancel=...>
//!     <PanelItem title="VALUES">...</PanelItem>
//! </EditablePanel>
//! ```

use super::card_animated::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EditablePanel(
    #[prop(into)] title: Signal<String>,
    /// Edit mode flag, switched by the panel buttons
    editing: RwSignal<bool>,
    #[prop(into)] saving: Signal<bool>,
    /// Messages shown above the content, e.g. failed field checks
    #[prop(into)] errors: Signal<Vec<String>>,
    /// No Edit button; the content stays in view mode
    #[prop(optional)] read_only: bool,
    /// Always editable, without Edit/Cancel
    #[prop(optional)] no_readonly_mode: bool,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let actions = move || {
        if read_only {
            return ().into_any();
        }
        if no_readonly_mode {
            return view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=saving
                >
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            }
            .into_any();
        }
        if editing.get() {
            view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=saving
                >
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=saving
                >
                    {icon("x")}
                    " Cancel"
                </Button>
            }
            .into_any()
        } else {
            view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_edit.run(())
                >
                    {icon("edit")}
                    " Edit"
                </Button>
            }
            .into_any()
        }
    };

    view! {
        <CardAnimated style="margin-bottom: var(--spacing-md);">
            <div class="editable-panel">
                <div class="editable-panel__header">
                    <h4 class="editable-panel__title">{move || title.get()}</h4>
                    <div class="editable-panel__actions">{actions}</div>
                </div>
                {move || {
                    let errors = errors.get();
                    (!errors.is_empty()).then(|| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <ul class="editable-panel__errors">
                                {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                            </ul>
                        </MessageBar>
                    })
                }}
                <div class="editable-panel__content">{children()}</div>
            </div>
        </CardAnimated>
    }
}

/// Section header inside a panel ("IMAGES", "PARAMETERS")
#[component]
pub fn PanelSection(#[prop(into)] title: String) -> impl IntoView {
    view! { <div class="editable-panel__section">{title}</div> }
}

/// One titled row of a panel.
///
/// `marker_icon` is drawn after the title, with `marker_title` as its tooltip.
#[component]
pub fn PanelItem(
    #[prop(into)] title: String,
    #[prop(optional, into)] marker_icon: MaybeProp<&'static str>,
    #[prop(optional, into)] marker_title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="editable-panel__item">
            <label class="editable-panel__item-title">
                {title}
                {move || marker_icon.get().map(|name| view! {
                    <span
                        class="editable-panel__marker"
                        title=move || marker_title.get().unwrap_or_default()
                    >
                        {icon(name)}
                    </span>
                })}
            </label>
            <div class="editable-panel__item-value">{children()}</div>
        </div>
    }
}
