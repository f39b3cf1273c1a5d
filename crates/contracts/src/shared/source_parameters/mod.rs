//! Source parameters: merged view of discovered values and overrides, the
//! edit draft behind the panel form, plugin parameter typing, validation and
//! the rules for optional panel rows.

pub mod draft;
pub mod plugin;
pub mod reconcile;
pub mod validation;
pub mod visibility;

pub use draft::{
    defined_overrides, versioned_images, HelmDraft, KustomizeDraft, OverrideGroup,
    ParametersDraft, PluginDraft, RemovedOverrides,
};
pub use plugin::{plugin_parameter_rows, resolve_shape, PluginParamAction, PluginParamRow};
pub use reconcile::{
    helm_file_parameter_items, helm_parameter_items, kustomize_image_items, overrides_first,
    reconcile, ReconciledItem,
};
pub use validation::{validate, FieldErrors};
pub use visibility::{shows_helm_values, shows_override_group, version_label};
