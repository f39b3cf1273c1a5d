//! ViewModel for the source parameters panel
//!
//! The saved application and the repository details come in as signals from
//! the caller. The view model owns the edit draft, the removed-override set
//! and the UI state; everything else is derived from the two inputs.

use crate::system::settings::api as settings_api;
use contracts::domain::a001_application::{Application, ApplicationSourceDirectory, SaveOptions};
use contracts::domain::a002_repo_app_details::{RepoAppDetails, SourceType};
use contracts::shared::source_parameters::{
    helm_file_parameter_items, helm_parameter_items, kustomize_image_items,
    plugin_parameter_rows, shows_helm_values, shows_override_group, validate, FieldErrors,
    HelmDraft, KustomizeDraft, OverrideGroup, ParametersDraft, PluginDraft, PluginParamRow,
    ReconciledItem, RemovedOverrides,
};
use contracts::system::settings::AuthSettings;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;

/// Pending host save; resolves once the application is stored
pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Save hook of the panel: receives the patched application
pub type SaveHandler = Callback<(Application, SaveOptions), SaveFuture>;

/// Panel state changes once the host has answered a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AfterSave {
    clear_removed: bool,
    leave_edit: bool,
}

fn after_save(result: &Result<(), String>, no_readonly_mode: bool) -> AfterSave {
    match result {
        Ok(()) => AfterSave {
            clear_removed: true,
            leave_edit: !no_readonly_mode,
        },
        // the form stays open with the operator's edits
        Err(_) => AfterSave {
            clear_removed: false,
            leave_edit: false,
        },
    }
}

#[derive(Clone, Copy)]
pub struct ParametersVm {
    // === Inputs ===
    pub application: Signal<Application>,
    pub details: Signal<RepoAppDetails>,

    // === Edit state ===
    pub draft: RwSignal<ParametersDraft>,
    pub removed: RwSignal<RemovedOverrides>,
    pub field_errors: RwSignal<FieldErrors>,

    // === Reference data ===
    pub settings: RwSignal<Option<AuthSettings>>,

    // === UI state ===
    pub editing: RwSignal<bool>,
    pub no_readonly_mode: bool,
}

impl ParametersVm {
    pub fn new(
        application: Signal<Application>,
        details: Signal<RepoAppDetails>,
        no_readonly_mode: bool,
    ) -> Self {
        let draft = ParametersDraft::new(
            details.with_untracked(|d| d.app_type),
            &application.get_untracked(),
        );
        Self {
            application,
            details,
            draft: RwSignal::new(draft),
            removed: RwSignal::new(RemovedOverrides::new()),
            field_errors: RwSignal::new(FieldErrors::default()),
            settings: RwSignal::new(None),
            editing: RwSignal::new(no_readonly_mode),
            no_readonly_mode,
        }
    }

    pub fn source_type(&self) -> SourceType {
        self.details.with(|d| d.app_type)
    }

    // === Derived data ===

    /// Merged discovered/override rows of an overridable list
    pub fn items(&self, group: OverrideGroup) -> Vec<ReconciledItem> {
        self.details.with(|details| {
            self.application.with(|app| {
                let source = app.source();
                match group {
                    OverrideGroup::Images => kustomize_image_items(
                        details.kustomize.as_ref(),
                        source.kustomize.as_ref(),
                    ),
                    OverrideGroup::HelmParameters => {
                        helm_parameter_items(details.helm.as_ref(), source.helm.as_ref())
                    }
                    OverrideGroup::HelmFileParameters => {
                        helm_file_parameter_items(details.helm.as_ref(), source.helm.as_ref())
                    }
                }
            })
        })
    }

    /// Whether the section of `group` is rendered for these `items`
    pub fn shows_group(&self, group: OverrideGroup, items: &[ReconciledItem]) -> bool {
        self.details
            .with(|details| shows_override_group(group, details, items))
    }

    pub fn shows_helm_values(&self) -> bool {
        self.application.with(shows_helm_values)
    }

    pub fn plugin_rows(&self) -> Vec<PluginParamRow> {
        self.details.with(|details| {
            self.application.with(|app| {
                let announcements = details
                    .plugin
                    .as_ref()
                    .and_then(|p| p.parameters_announcement.as_deref());
                let live = app
                    .source()
                    .plugin
                    .as_ref()
                    .map(|p| p.parameters.as_slice())
                    .unwrap_or_default();
                plugin_parameter_rows(announcements, live)
            })
        })
    }

    /// Field errors formatted for the panel header
    pub fn error_messages(&self) -> Vec<String> {
        self.field_errors.with(|errors| {
            errors
                .iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect()
        })
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors
            .with(|errors| errors.get(field).map(str::to_string))
    }

    // === Draft access ===

    pub fn with_kustomize<R: Default>(&self, f: impl FnOnce(&KustomizeDraft) -> R) -> R {
        self.draft.with(|d| d.as_kustomize().map(f).unwrap_or_default())
    }

    pub fn update_kustomize(&self, f: impl FnOnce(&mut KustomizeDraft)) {
        self.draft.update(|d| {
            if let Some(k) = d.as_kustomize_mut() {
                f(k);
            }
        });
    }

    pub fn with_helm<R: Default>(&self, f: impl FnOnce(&HelmDraft) -> R) -> R {
        self.draft.with(|d| d.as_helm().map(f).unwrap_or_default())
    }

    pub fn update_helm(&self, f: impl FnOnce(&mut HelmDraft)) {
        self.draft.update(|d| {
            if let Some(h) = d.as_helm_mut() {
                f(h);
            }
        });
    }

    pub fn with_plugin<R: Default>(&self, f: impl FnOnce(&PluginDraft) -> R) -> R {
        self.draft.with(|d| d.as_plugin().map(f).unwrap_or_default())
    }

    pub fn update_plugin(&self, f: impl FnOnce(&mut PluginDraft)) {
        self.draft.update(|d| {
            if let Some(p) = d.as_plugin_mut() {
                f(p);
            }
        });
    }

    pub fn with_directory<R: Default>(
        &self,
        f: impl FnOnce(&ApplicationSourceDirectory) -> R,
    ) -> R {
        self.draft.with(|d| d.as_directory().map(f).unwrap_or_default())
    }

    pub fn update_directory(&self, f: impl FnOnce(&mut ApplicationSourceDirectory)) {
        self.draft.update(|d| {
            if let Some(dir) = d.as_directory_mut() {
                f(dir);
            }
        });
    }

    // === Overrides ===

    pub fn is_removed(&self, group: OverrideGroup, name: &str) -> bool {
        self.removed.with(|r| r.contains(group, name))
    }

    pub fn override_value(&self, group: OverrideGroup, item: &ReconciledItem) -> String {
        self.draft.with(|d| d.override_value(group, item))
    }

    pub fn set_override(&self, group: OverrideGroup, item: &ReconciledItem, value: &str) {
        self.draft.update(|d| d.set_override(group, item, value));
    }

    /// "Remove override": show the discovered value until saved or kept
    pub fn remove_override(&self, group: OverrideGroup, item: &ReconciledItem) {
        let mut removed = self.removed.get_untracked();
        let mut changed = false;
        self.draft.update(|d| changed = d.remove_override(group, item, &mut removed));
        if changed {
            log::debug!("Override {}[{}] removed", group.field_path(), item.name);
            self.removed.set(removed);
        }
    }

    /// "Keep override": bring back the value stored on the application
    pub fn keep_override(&self, group: OverrideGroup, item: &ReconciledItem) {
        let mut removed = self.removed.get_untracked();
        let mut changed = false;
        self.application.with_untracked(|saved| {
            self.draft
                .update(|d| changed = d.keep_override(group, item, saved, &mut removed));
        });
        if changed {
            log::debug!("Override {}[{}] kept", group.field_path(), item.name);
            self.removed.set(removed);
        }
    }

    // === Commands ===

    /// Rebuild the draft from the saved application
    pub fn reset_draft(&self) {
        let draft = ParametersDraft::new(
            self.details.with_untracked(|d| d.app_type),
            &self.application.get_untracked(),
        );
        self.draft.set(draft);
        self.removed.update(RemovedOverrides::clear);
        self.field_errors.set(FieldErrors::default());
    }

    pub fn begin_edit(&self) {
        self.reset_draft();
        self.editing.set(true);
    }

    pub fn cancel(&self) {
        self.reset_draft();
        self.editing.set(false);
    }

    /// Validate the draft and hand the patched application to `save`.
    ///
    /// Removed flags and edit mode are only dropped after the host reports
    /// success.
    pub fn save(&self, save: SaveHandler) {
        let updated = self
            .application
            .with_untracked(|app| self.draft.with_untracked(|d| d.apply_to(app)));

        let errors = validate(&updated);
        if !errors.is_empty() {
            log::warn!(
                "Not saving {}: {} invalid field(s)",
                updated.qualified_name(),
                errors.iter().count()
            );
            self.field_errors.set(errors);
            return;
        }

        self.field_errors.set(FieldErrors::default());
        let name = updated.qualified_name();
        let pending = save.run((updated, SaveOptions::default()));
        let vm = *self;
        leptos::task::spawn_local(async move {
            let result = pending.await;
            if let Err(e) = &result {
                log::warn!("Save of {} failed, keeping the form open: {}", name, e);
            }
            vm.finish_save(&result);
        });
    }

    fn finish_save(&self, result: &Result<(), String>) {
        let next = after_save(result, self.no_readonly_mode);
        if next.clear_removed {
            self.removed.update(RemovedOverrides::clear);
        }
        if next.leave_edit {
            self.editing.set(false);
        }
    }

    /// Fetch console settings (kustomize versions, plugin names).
    ///
    /// A failed fetch is logged; the plugin name falls back to free text.
    pub fn load_settings(&self) {
        let settings = self.settings;
        leptos::task::spawn_local(async move {
            match settings_api::fetch_settings().await {
                Ok(loaded) => settings.set(Some(loaded)),
                Err(e) => log::error!("Failed to load settings: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_save_keeps_edit_state() {
        let failed = after_save(&Err("HTTP 500".to_string()), false);
        assert!(!failed.clear_removed);
        assert!(!failed.leave_edit);
    }

    #[test]
    fn test_successful_save_closes_form() {
        let saved = after_save(&Ok(()), false);
        assert!(saved.clear_removed);
        assert!(saved.leave_edit);

        // the always-editing panel stays open
        let saved = after_save(&Ok(()), true);
        assert!(saved.clear_removed);
        assert!(!saved.leave_edit);
    }
}
