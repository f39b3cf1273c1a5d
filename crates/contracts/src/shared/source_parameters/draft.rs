//! Edit buffer for the parameters panel.
//!
//! A draft is built from the saved application when the panel enters edit
//! mode, mutated by the form, and written back into a copy of the
//! application on save. Overridable lists are kept as slots: a removed
//! override is `None` until the draft is applied.

use super::reconcile::ReconciledItem;
use crate::domain::a001_application::{
    Application, ApplicationSourceDirectory, ApplicationSourceHelm, ApplicationSourceKustomize,
    ApplicationSourcePlugin, HelmFileParameter, HelmParameter, KustomizeImage, NameValue,
    ParameterValue, PluginParameter,
};
use crate::domain::a002_repo_app_details::SourceType;
use std::collections::BTreeSet;

/// Lists whose entries can be overridden, removed and restored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverrideGroup {
    Images,
    HelmParameters,
    HelmFileParameters,
}

impl OverrideGroup {
    pub fn field_path(&self) -> &'static str {
        match self {
            OverrideGroup::Images => "spec.source.kustomize.images",
            OverrideGroup::HelmParameters => "spec.source.helm.parameters",
            OverrideGroup::HelmFileParameters => "spec.source.helm.fileParameters",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OverrideGroup::Images => "IMAGES",
            OverrideGroup::HelmParameters => "PARAMETERS",
            OverrideGroup::HelmFileParameters => "FILE PARAMETERS",
        }
    }
}

/// Overrides suppressed in the form but not saved yet, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovedOverrides(BTreeSet<(OverrideGroup, String)>);

impl RemovedOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, group: OverrideGroup, name: &str) -> bool {
        self.0.contains(&(group, name.to_string()))
    }

    pub fn insert(&mut self, group: OverrideGroup, name: &str) {
        self.0.insert((group, name.to_string()));
    }

    pub fn remove(&mut self, group: OverrideGroup, name: &str) {
        self.0.remove(&(group, name.to_string()));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Entry of an overridable list
trait OverrideEntry: Clone {
    fn entry_name(&self) -> String;
    fn entry_value(&self) -> String;
    fn set_entry_value(&mut self, name: &str, value: &str);
    fn from_name_value(name: &str, value: &str) -> Self;
}

impl OverrideEntry for HelmParameter {
    fn entry_name(&self) -> String {
        self.name.clone()
    }
    fn entry_value(&self) -> String {
        self.value.clone()
    }
    fn set_entry_value(&mut self, _name: &str, value: &str) {
        self.value = value.to_string();
    }
    fn from_name_value(name: &str, value: &str) -> Self {
        HelmParameter::new(name, value)
    }
}

impl OverrideEntry for HelmFileParameter {
    fn entry_name(&self) -> String {
        self.name.clone()
    }
    fn entry_value(&self) -> String {
        self.path.clone()
    }
    fn set_entry_value(&mut self, _name: &str, value: &str) {
        self.path = value.to_string();
    }
    fn from_name_value(name: &str, value: &str) -> Self {
        HelmFileParameter::new(name, value)
    }
}

// Image overrides are plain strings keyed by the parsed image name. Writes
// always target the row's image, whatever name the typed value carries.
impl OverrideEntry for String {
    fn entry_name(&self) -> String {
        KustomizeImage::parse(self).name
    }
    fn entry_value(&self) -> String {
        self.clone()
    }
    fn set_entry_value(&mut self, name: &str, value: &str) {
        *self = KustomizeImage::override_for(name, value).to_string();
    }
    fn from_name_value(name: &str, value: &str) -> Self {
        KustomizeImage::override_for(name, value).to_string()
    }
}

fn slot_position<T: OverrideEntry>(slots: &[Option<T>], name: &str) -> Option<usize> {
    slots
        .iter()
        .rposition(|slot| slot.as_ref().is_some_and(|e| e.entry_name() == name))
}

/// Live slot of `item`: its stored override, else one added in this draft
fn live_slot<T: OverrideEntry>(slots: &[Option<T>], item: &ReconciledItem) -> Option<usize> {
    let stored = item.override_index.filter(|&index| {
        slots
            .get(index)
            .and_then(Option::as_ref)
            .is_some_and(|e| e.entry_name() == item.name)
    });
    stored.or_else(|| slot_position(slots, &item.name))
}

fn suppress<T>(slots: &mut [Option<T>], index: usize) -> bool {
    match slots.get_mut(index) {
        Some(slot) if slot.is_some() => {
            *slot = None;
            true
        }
        _ => false,
    }
}

fn restore<T: Clone>(slots: &mut [Option<T>], index: usize, saved: &[T]) -> bool {
    match (slots.get_mut(index), saved.get(index)) {
        (Some(slot), Some(entry)) => {
            *slot = Some(entry.clone());
            true
        }
        _ => false,
    }
}

fn set_slot<T: OverrideEntry>(slots: &mut Vec<Option<T>>, item: &ReconciledItem, value: &str) {
    match live_slot(slots, item) {
        Some(index) => {
            if let Some(entry) = slots[index].as_mut() {
                entry.set_entry_value(&item.name, value);
            }
        }
        None => slots.push(Some(T::from_name_value(&item.name, value))),
    }
}

/// Live override of the item, or the discovered value when there is none
/// (never set, or suppressed)
fn slot_value<T: OverrideEntry>(slots: &[Option<T>], item: &ReconciledItem) -> String {
    live_slot(slots, item)
        .and_then(|i| slots[i].as_ref())
        .map(|e| e.entry_value())
        .unwrap_or_else(|| item.original.clone())
}

fn to_slots<T: Clone>(entries: &[T]) -> Vec<Option<T>> {
    entries.iter().cloned().map(Some).collect()
}

/// Null-removal filter for templating overrides
pub fn defined_overrides<T: Clone>(slots: &[Option<T>]) -> Vec<T> {
    slots.iter().flatten().cloned().collect()
}

/// Image overrides survive only when set and carrying a `:` delimiter
pub fn versioned_images(slots: &[Option<String>]) -> Vec<String> {
    slots
        .iter()
        .flatten()
        .filter(|image| image.contains(':'))
        .cloned()
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// Per-tool drafts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KustomizeDraft {
    pub version: String,
    pub name_prefix: String,
    pub name_suffix: String,
    pub images: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelmDraft {
    pub value_files: Vec<String>,
    pub values: Option<String>,
    pub parameters: Vec<Option<HelmParameter>>,
    pub file_parameters: Vec<Option<HelmFileParameter>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginDraft {
    pub name: String,
    pub env: Vec<NameValue>,
    pub parameters: Vec<PluginParameter>,
}

impl PluginDraft {
    pub fn entry(&self, name: &str) -> Option<&PluginParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Write an operator value, creating the override on first edit
    pub fn set_value(&mut self, name: &str, value: ParameterValue) {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(param) => param.value = value,
            None => self.parameters.push(PluginParameter::new(name, value)),
        }
    }

    /// Drop the override so the plugin default applies again
    pub fn reset(&mut self, name: &str) -> bool {
        match self.parameters.iter().position(|p| p.name == name) {
            Some(index) => {
                self.parameters.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParametersDraft {
    Kustomize(KustomizeDraft),
    Helm(HelmDraft),
    Plugin(PluginDraft),
    Directory(ApplicationSourceDirectory),
    Unsupported,
}

impl ParametersDraft {
    pub fn new(source_type: SourceType, app: &Application) -> Self {
        let source = app.source();
        match source_type {
            SourceType::Kustomize => {
                let k = source.kustomize.clone().unwrap_or_default();
                ParametersDraft::Kustomize(KustomizeDraft {
                    version: k.version.unwrap_or_default(),
                    name_prefix: k.name_prefix.unwrap_or_default(),
                    name_suffix: k.name_suffix.unwrap_or_default(),
                    images: to_slots(&k.images),
                })
            }
            SourceType::Helm => {
                let h = source.helm.clone().unwrap_or_default();
                ParametersDraft::Helm(HelmDraft {
                    value_files: h.value_files,
                    values: h.values,
                    parameters: to_slots(&h.parameters),
                    file_parameters: to_slots(&h.file_parameters),
                })
            }
            SourceType::Plugin => {
                let p = source.plugin.clone().unwrap_or_default();
                ParametersDraft::Plugin(PluginDraft {
                    name: p.name.unwrap_or_default(),
                    env: p.env,
                    parameters: p.parameters,
                })
            }
            SourceType::Directory => {
                ParametersDraft::Directory(source.directory.clone().unwrap_or_default())
            }
            SourceType::Unknown => ParametersDraft::Unsupported,
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            ParametersDraft::Kustomize(_) => SourceType::Kustomize,
            ParametersDraft::Helm(_) => SourceType::Helm,
            ParametersDraft::Plugin(_) => SourceType::Plugin,
            ParametersDraft::Directory(_) => SourceType::Directory,
            ParametersDraft::Unsupported => SourceType::Unknown,
        }
    }

    pub fn as_kustomize(&self) -> Option<&KustomizeDraft> {
        match self {
            ParametersDraft::Kustomize(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_kustomize_mut(&mut self) -> Option<&mut KustomizeDraft> {
        match self {
            ParametersDraft::Kustomize(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_helm(&self) -> Option<&HelmDraft> {
        match self {
            ParametersDraft::Helm(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_helm_mut(&mut self) -> Option<&mut HelmDraft> {
        match self {
            ParametersDraft::Helm(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_plugin(&self) -> Option<&PluginDraft> {
        match self {
            ParametersDraft::Plugin(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_plugin_mut(&mut self) -> Option<&mut PluginDraft> {
        match self {
            ParametersDraft::Plugin(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&ApplicationSourceDirectory> {
        match self {
            ParametersDraft::Directory(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut ApplicationSourceDirectory> {
        match self {
            ParametersDraft::Directory(d) => Some(d),
            _ => None,
        }
    }

    // === Override toggle ===

    /// Live → Suppressed. Nulls the slot of `item` and flags it by name.
    pub fn remove_override(
        &mut self,
        group: OverrideGroup,
        item: &ReconciledItem,
        removed: &mut RemovedOverrides,
    ) -> bool {
        let Some(index) = item.override_index else {
            return false;
        };
        let suppressed = match (self, group) {
            (ParametersDraft::Kustomize(d), OverrideGroup::Images) => suppress(&mut d.images, index),
            (ParametersDraft::Helm(d), OverrideGroup::HelmParameters) => {
                suppress(&mut d.parameters, index)
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmFileParameters) => {
                suppress(&mut d.file_parameters, index)
            }
            _ => false,
        };
        if suppressed {
            removed.insert(group, &item.name);
        }
        suppressed
    }

    /// Suppressed → Live. Restores the slot from the saved application.
    pub fn keep_override(
        &mut self,
        group: OverrideGroup,
        item: &ReconciledItem,
        saved: &Application,
        removed: &mut RemovedOverrides,
    ) -> bool {
        let Some(index) = item.override_index else {
            return false;
        };
        let source = saved.source();
        let restored = match (self, group) {
            (ParametersDraft::Kustomize(d), OverrideGroup::Images) => {
                let saved_images = source.kustomize.as_ref().map(|k| k.images.as_slice());
                restore(&mut d.images, index, saved_images.unwrap_or_default())
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmParameters) => {
                let saved_params = source.helm.as_ref().map(|h| h.parameters.as_slice());
                restore(&mut d.parameters, index, saved_params.unwrap_or_default())
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmFileParameters) => {
                let saved_params = source.helm.as_ref().map(|h| h.file_parameters.as_slice());
                restore(&mut d.file_parameters, index, saved_params.unwrap_or_default())
            }
            _ => false,
        };
        if restored {
            removed.remove(group, &item.name);
        }
        restored
    }

    /// Edit the override of `item`, appending a new one on first edit
    pub fn set_override(&mut self, group: OverrideGroup, item: &ReconciledItem, value: &str) {
        match (self, group) {
            (ParametersDraft::Kustomize(d), OverrideGroup::Images) => {
                set_slot(&mut d.images, item, value)
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmParameters) => {
                set_slot(&mut d.parameters, item, value)
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmFileParameters) => {
                set_slot(&mut d.file_parameters, item, value)
            }
            _ => {}
        }
    }

    /// Value the form shows for `item`
    pub fn override_value(&self, group: OverrideGroup, item: &ReconciledItem) -> String {
        match (self, group) {
            (ParametersDraft::Kustomize(d), OverrideGroup::Images) => slot_value(&d.images, item),
            (ParametersDraft::Helm(d), OverrideGroup::HelmParameters) => {
                slot_value(&d.parameters, item)
            }
            (ParametersDraft::Helm(d), OverrideGroup::HelmFileParameters) => {
                slot_value(&d.file_parameters, item)
            }
            _ => item.value.clone(),
        }
    }

    // === Save ===

    /// Copy of `app` with the draft written into the active source section
    pub fn apply_to(&self, app: &Application) -> Application {
        let mut updated = app.clone();
        let source = &mut updated.spec.source;

        match self {
            ParametersDraft::Kustomize(d) => {
                let existed = source.kustomize.is_some();
                let mut k = source.kustomize.take().unwrap_or_default();
                k.version = non_empty(&d.version);
                k.name_prefix = non_empty(&d.name_prefix);
                k.name_suffix = non_empty(&d.name_suffix);
                k.images = versioned_images(&d.images);
                if existed || k != ApplicationSourceKustomize::default() {
                    source.kustomize = Some(k);
                }
            }
            ParametersDraft::Helm(d) => {
                let existed = source.helm.is_some();
                let mut h = source.helm.take().unwrap_or_default();
                h.value_files = d.value_files.clone();
                h.values = d.values.clone();
                h.parameters = defined_overrides(&d.parameters);
                h.file_parameters = defined_overrides(&d.file_parameters);
                if existed || h != ApplicationSourceHelm::default() {
                    source.helm = Some(h);
                }
            }
            ParametersDraft::Plugin(d) => {
                let existed = source.plugin.is_some();
                let mut p = source.plugin.take().unwrap_or_default();
                p.name = non_empty(&d.name);
                p.env = d.env.clone();
                p.parameters = d.parameters.clone();
                if existed || p != ApplicationSourcePlugin::default() {
                    source.plugin = Some(p);
                }
            }
            ParametersDraft::Directory(d) => {
                if source.directory.is_some() || *d != ApplicationSourceDirectory::default() {
                    source.directory = Some(d.clone());
                }
            }
            ParametersDraft::Unsupported => {}
        }

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_application::{ApplicationSourceJsonnet, JsonnetVar};
    use crate::domain::a002_repo_app_details::{HelmAppSpec, KustomizeAppSpec};
    use crate::shared::source_parameters::reconcile::{helm_parameter_items, kustomize_image_items};

    fn helm_app(params: &[(&str, &str)]) -> Application {
        let mut app = Application::default();
        app.spec.source.helm = Some(ApplicationSourceHelm {
            parameters: params
                .iter()
                .map(|(n, v)| HelmParameter::new(*n, *v))
                .collect(),
            ..Default::default()
        });
        app
    }

    fn helm_details(params: &[(&str, &str)]) -> HelmAppSpec {
        HelmAppSpec {
            parameters: params
                .iter()
                .map(|(n, v)| HelmParameter::new(*n, *v))
                .collect(),
            ..Default::default()
        }
    }

    fn helm_draft(draft: &ParametersDraft) -> &HelmDraft {
        match draft {
            ParametersDraft::Helm(d) => d,
            other => panic!("expected helm draft, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_then_keep_restores_value() {
        let app = helm_app(&[("replicas", "3"), ("image.tag", "v2")]);
        let details = helm_details(&[("replicas", "1"), ("image.tag", "v1")]);
        let items = helm_parameter_items(Some(&details), app.source().helm.as_ref());

        let mut draft = ParametersDraft::new(SourceType::Helm, &app);
        let before = draft.clone();
        let mut removed = RemovedOverrides::new();
        let tag = items.iter().find(|i| i.name == "image.tag").unwrap();

        assert!(draft.remove_override(OverrideGroup::HelmParameters, tag, &mut removed));
        assert!(removed.contains(OverrideGroup::HelmParameters, "image.tag"));
        assert_eq!(helm_draft(&draft).parameters[1], None);
        // the suppressed row falls back to the discovered value
        assert_eq!(draft.override_value(OverrideGroup::HelmParameters, tag), "v1");

        assert!(draft.keep_override(OverrideGroup::HelmParameters, tag, &app, &mut removed));
        assert!(removed.is_empty());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_removed_flags_are_name_keyed() {
        let mut removed = RemovedOverrides::new();
        removed.insert(OverrideGroup::HelmParameters, "a");
        assert!(!removed.contains(OverrideGroup::HelmFileParameters, "a"));
        assert!(!removed.contains(OverrideGroup::HelmParameters, "b"));
        assert_eq!(removed.len(), 1);
        removed.clear();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_remove_without_override_is_noop() {
        let app = helm_app(&[]);
        let items = helm_parameter_items(Some(&helm_details(&[("a", "1")])), None);
        let mut draft = ParametersDraft::new(SourceType::Helm, &app);
        let mut removed = RemovedOverrides::new();

        assert!(!draft.remove_override(OverrideGroup::HelmParameters, &items[0], &mut removed));
        assert!(removed.is_empty());
    }

    #[test]
    fn test_save_filters_removed_helm_overrides() {
        let app = helm_app(&[("x", "0"), ("y", "1")]);
        let items = helm_parameter_items(None, app.source().helm.as_ref());
        let mut draft = ParametersDraft::new(SourceType::Helm, &app);
        let mut removed = RemovedOverrides::new();

        let x = items.iter().find(|i| i.name == "x").unwrap();
        draft.remove_override(OverrideGroup::HelmParameters, x, &mut removed);

        let saved = draft.apply_to(&app);
        assert_eq!(
            saved.source().helm.as_ref().unwrap().parameters,
            vec![HelmParameter::new("y", "1")]
        );
        // the input application is untouched
        assert_eq!(app.source().helm.as_ref().unwrap().parameters.len(), 2);
    }

    #[test]
    fn test_defined_overrides_drops_nulls() {
        let slots = vec![None, Some(HelmParameter::new("y", "1"))];
        assert_eq!(defined_overrides(&slots), vec![HelmParameter::new("y", "1")]);
    }

    #[test]
    fn test_images_without_delimiter_dropped() {
        assert!(versioned_images(&[Some("repo/image".to_string())]).is_empty());
        assert_eq!(
            versioned_images(&[Some("repo/image:tag".to_string()), None]),
            vec!["repo/image:tag".to_string()]
        );
    }

    #[test]
    fn test_set_override_edits_or_appends() {
        let app = helm_app(&[("a", "1")]);
        let items = helm_parameter_items(
            Some(&helm_details(&[("b", "0")])),
            app.source().helm.as_ref(),
        );
        let mut draft = ParametersDraft::new(SourceType::Helm, &app);

        draft.set_override(OverrideGroup::HelmParameters, &items[0], "2");
        draft.set_override(OverrideGroup::HelmParameters, &items[1], "3");

        let saved = draft.apply_to(&app);
        assert_eq!(
            saved.source().helm.as_ref().unwrap().parameters,
            vec![HelmParameter::new("a", "2"), HelmParameter::new("b", "3")]
        );
    }

    #[test]
    fn test_new_override_visible_in_form_value() {
        let app = helm_app(&[]);
        let items = helm_parameter_items(Some(&helm_details(&[("a", "1")])), None);
        let mut draft = ParametersDraft::new(SourceType::Helm, &app);

        assert_eq!(draft.override_value(OverrideGroup::HelmParameters, &items[0]), "1");
        draft.set_override(OverrideGroup::HelmParameters, &items[0], "5");
        assert_eq!(draft.override_value(OverrideGroup::HelmParameters, &items[0]), "5");
    }

    #[test]
    fn test_image_override_round_trip() {
        let mut app = Application::default();
        app.spec.source.kustomize = Some(ApplicationSourceKustomize {
            images: vec!["nginx:1.21".into()],
            ..Default::default()
        });
        let details = KustomizeAppSpec {
            images: vec!["nginx:1.19".into()],
        };
        let items = kustomize_image_items(Some(&details), app.source().kustomize.as_ref());
        let mut draft = ParametersDraft::new(SourceType::Kustomize, &app);
        let mut removed = RemovedOverrides::new();

        draft.remove_override(OverrideGroup::Images, &items[0], &mut removed);
        assert!(draft
            .apply_to(&app)
            .source()
            .kustomize
            .as_ref()
            .unwrap()
            .images
            .is_empty());

        draft.keep_override(OverrideGroup::Images, &items[0], &app, &mut removed);
        draft.set_override(OverrideGroup::Images, &items[0], "nginx:1.22");
        assert_eq!(
            draft.apply_to(&app).source().kustomize.as_ref().unwrap().images,
            vec!["nginx:1.22".to_string()]
        );
    }

    #[test]
    fn test_image_row_edits_stay_on_one_entry() {
        let mut app = Application::default();
        app.spec.source.kustomize = Some(ApplicationSourceKustomize {
            images: vec!["nginx:1.21".into()],
            ..Default::default()
        });
        let details = KustomizeAppSpec {
            images: vec!["nginx:1.19".into()],
        };
        let items = kustomize_image_items(Some(&details), app.source().kustomize.as_ref());
        let mut draft = ParametersDraft::new(SourceType::Kustomize, &app);

        // keystrokes that move the name part away from the row's image
        for typed in [
            "nginx=mirror/nginx:1.21",
            "nginx=mirror/nginx:1.2",
            "mirror/nginx:1.2",
            "mirror/nginx:1.22",
        ] {
            draft.set_override(OverrideGroup::Images, &items[0], typed);
        }

        let saved = draft.apply_to(&app);
        assert_eq!(
            saved.source().kustomize.as_ref().unwrap().images,
            vec!["nginx=mirror/nginx:1.22".to_string()]
        );
        assert_eq!(
            draft.override_value(OverrideGroup::Images, &items[0]),
            "nginx=mirror/nginx:1.22"
        );
    }

    #[test]
    fn test_new_image_override_uses_row_name() {
        let app = Application::default();
        let details = KustomizeAppSpec {
            images: vec!["redis:7".into()],
        };
        let items = kustomize_image_items(Some(&details), None);
        let mut draft = ParametersDraft::new(SourceType::Kustomize, &app);

        draft.set_override(OverrideGroup::Images, &items[0], "cache/redis:7.2");
        draft.set_override(OverrideGroup::Images, &items[0], "cache/redis:7.4");

        assert_eq!(
            draft.apply_to(&app).source().kustomize.as_ref().unwrap().images,
            vec!["redis=cache/redis:7.4".to_string()]
        );
    }

    #[test]
    fn test_untouched_section_not_created() {
        let app = Application::default();
        let draft = ParametersDraft::new(SourceType::Kustomize, &app);
        assert!(draft.apply_to(&app).source().kustomize.is_none());

        let draft = ParametersDraft::new(SourceType::Directory, &app);
        assert!(draft.apply_to(&app).source().directory.is_none());
    }

    #[test]
    fn test_directory_draft_written_back() {
        let app = Application::default();
        let mut draft = ParametersDraft::new(SourceType::Directory, &app);
        if let ParametersDraft::Directory(d) = &mut draft {
            d.recurse = true;
            d.jsonnet = ApplicationSourceJsonnet {
                tlas: vec![JsonnetVar {
                    name: "env".into(),
                    value: "prod".into(),
                    code: false,
                }],
                ..Default::default()
            };
        }

        let saved = draft.apply_to(&app);
        let dir = saved.source().directory.as_ref().unwrap();
        assert!(dir.recurse);
        assert_eq!(dir.jsonnet.tlas[0].name, "env");
    }

    #[test]
    fn test_plugin_draft_set_and_reset() {
        let mut draft = PluginDraft::default();
        draft.set_value("p", ParameterValue::String("1".into()));
        draft.set_value("p", ParameterValue::String("2".into()));
        assert_eq!(draft.parameters, vec![PluginParameter::string("p", "2")]);

        assert!(draft.reset("p"));
        assert!(!draft.reset("p"));
        assert!(draft.entry("p").is_none());
    }

    #[test]
    fn test_unknown_source_type_leaves_app_alone() {
        let app = helm_app(&[("a", "1")]);
        let draft = ParametersDraft::new(SourceType::Unknown, &app);
        assert_eq!(draft.source_type(), SourceType::Unknown);
        assert_eq!(draft.apply_to(&app), app);
    }

    #[test]
    fn test_variant_accessors() {
        let app = helm_app(&[("a", "1")]);
        let mut draft = ParametersDraft::new(SourceType::Helm, &app);
        assert!(draft.as_kustomize().is_none());
        assert!(draft.as_plugin_mut().is_none());

        if let Some(helm) = draft.as_helm_mut() {
            helm.values = Some("replicas: 3".into());
        }
        assert_eq!(draft.as_helm().unwrap().values.as_deref(), Some("replicas: 3"));
        assert_eq!(
            draft.apply_to(&app).source().helm.as_ref().unwrap().values.as_deref(),
            Some("replicas: 3")
        );
    }
}
