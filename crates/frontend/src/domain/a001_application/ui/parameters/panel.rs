use super::sections::{DirectorySection, HelmSection, KustomizeSection, PluginSection};
use super::view_model::{ParametersVm, SaveHandler};
use crate::shared::components::EditablePanel;
use contracts::domain::a001_application::Application;
use contracts::domain::a002_repo_app_details::{RepoAppDetails, SourceType};
use leptos::prelude::*;

/// Source parameters panel for the tool detected in `details`.
///
/// Without `save` the panel is read-only. The form closes once the future
/// returned by `save` resolves successfully; with `no_readonly_mode` it opens
/// straight into the form and stays there.
#[component]
pub fn ApplicationParameters(
    #[prop(into)] application: Signal<Application>,
    #[prop(into)] details: Signal<RepoAppDetails>,
    #[prop(optional)] save: Option<SaveHandler>,
    #[prop(optional)] no_readonly_mode: bool,
    /// Save in flight, tracked by the caller
    #[prop(optional, into)]
    saving: MaybeProp<bool>,
) -> impl IntoView {
    let vm = ParametersVm::new(application, details, no_readonly_mode);
    vm.load_settings();

    // A new saved copy replaces the draft unless the operator is mid-edit
    Effect::new(move |_| {
        application.track();
        details.track();
        if vm.no_readonly_mode || !vm.editing.get_untracked() {
            vm.reset_draft();
        }
    });

    let source_type = Memo::new(move |_| vm.source_type());
    let title = Signal::derive(move || source_type.get().as_str().to_uppercase());

    view! {
        <EditablePanel
            title=title
            editing=vm.editing
            saving=Signal::derive(move || saving.get().unwrap_or(false))
            errors=Signal::derive(move || vm.error_messages())
            read_only=save.is_none()
            no_readonly_mode=no_readonly_mode
            on_edit=Callback::new(move |_: ()| vm.begin_edit())
            on_save=Callback::new(move |_: ()| {
                if let Some(save) = save {
                    vm.save(save);
                }
            })
            on_cancel=Callback::new(move |_: ()| vm.cancel())
        >
            {move || match source_type.get() {
                SourceType::Kustomize => view! { <KustomizeSection vm=vm /> }.into_any(),
                SourceType::Helm => view! { <HelmSection vm=vm /> }.into_any(),
                SourceType::Plugin => view! { <PluginSection vm=vm /> }.into_any(),
                SourceType::Directory => view! { <DirectorySection vm=vm /> }.into_any(),
                SourceType::Unknown => view! {
                    <p class="editable-panel__empty">
                        "Parameters are not available for this source type"
                    </p>
                }
                .into_any(),
            }}
        </EditablePanel>
    }
}
