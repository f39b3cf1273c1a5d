//! Plugin parameter rows: announced parameters merged with the ones stored on
//! the application, each resolved to a single editable shape.

use super::draft::PluginDraft;
use crate::domain::a001_application::{ParameterShape, ParameterValue, PluginParameter};
use crate::domain::a002_repo_app_details::ParameterAnnouncement;

pub const RESET_TOOLTIP: &str = "Resets the parameter to the value provided by the plugin. This removes the parameter override from the application manifest";
pub const DELETE_TOOLTIP: &str = "Deletes this parameter from the application manifest.";
pub const PLUGIN_PARAMETER_HINT: &str =
    "This parameter is provided by the plugin. You can override the value.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginParamRow {
    pub name: String,
    pub title: String,
    pub tooltip: Option<String>,
    /// Announced by the plugin (as opposed to only set on the application)
    pub from_plugin: bool,
    pub shape: ParameterShape,
    /// Announced default, when the announcement carries one of this shape
    pub default: Option<ParameterValue>,
    /// Stored value, coerced to `shape`
    pub live: Option<ParameterValue>,
}

impl PluginParamRow {
    /// Value shown in read-only mode
    pub fn effective_value(&self) -> ParameterValue {
        self.live
            .clone()
            .or_else(|| self.default.clone())
            .unwrap_or_else(|| ParameterValue::empty(self.shape))
    }

    /// Value shown in the form for the current draft
    pub fn draft_value(&self, draft: &PluginDraft) -> ParameterValue {
        match draft.entry(&self.name) {
            Some(param) => param.value.coerce(self.shape),
            None => self
                .default
                .clone()
                .unwrap_or_else(|| ParameterValue::empty(self.shape)),
        }
    }

    pub fn action(&self, draft: &PluginDraft) -> PluginParamAction {
        let disabled = draft.entry(&self.name).is_none();
        let (label, tooltip) = if self.from_plugin {
            ("Reset", RESET_TOOLTIP)
        } else {
            ("Delete", DELETE_TOOLTIP)
        };
        PluginParamAction {
            label,
            tooltip: if disabled { "" } else { tooltip },
            disabled,
        }
    }
}

/// Reset/Delete button state for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginParamAction {
    pub label: &'static str,
    pub tooltip: &'static str,
    pub disabled: bool,
}

/// Shape the row is edited as.
///
/// A declared collection type wins; otherwise the stored parameter decides,
/// and plain strings are the fallback. `None` for an unrecognized declared
/// type, which is not rendered.
pub fn resolve_shape(
    announcement: Option<&ParameterAnnouncement>,
    live: Option<&PluginParameter>,
) -> Option<ParameterShape> {
    match announcement.and_then(|a| a.collection_type.as_deref()) {
        Some(collection_type) => ParameterShape::from_collection_type(collection_type),
        None => Some(
            live.map(|p| p.value.shape())
                .unwrap_or(ParameterShape::String),
        ),
    }
}

fn announced_default(
    announcement: &ParameterAnnouncement,
    shape: ParameterShape,
) -> Option<ParameterValue> {
    match shape {
        ParameterShape::String => announcement.string.clone().map(ParameterValue::String),
        ParameterShape::Array => announcement.array.clone().map(ParameterValue::Array),
        ParameterShape::Map => announcement.map.clone().map(ParameterValue::Map),
    }
}

/// Rows for the plugin section; empty when the plugin announces nothing.
///
/// Announced names come first in announcement order, followed by names only
/// present on the application.
pub fn plugin_parameter_rows(
    announcements: Option<&[ParameterAnnouncement]>,
    live: &[PluginParameter],
) -> Vec<PluginParamRow> {
    let Some(announcements) = announcements else {
        return Vec::new();
    };

    let mut names: Vec<&str> = Vec::new();
    for name in announcements
        .iter()
        .map(|a| a.name.as_str())
        .chain(live.iter().map(|p| p.name.as_str()))
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
        .into_iter()
        .filter_map(|name| {
            let announcement = announcements.iter().find(|a| a.name == name);
            let live_param = live.iter().find(|p| p.name == name);
            let shape = resolve_shape(announcement, live_param)?;

            Some(PluginParamRow {
                name: name.to_string(),
                title: announcement
                    .map(|a| a.display_title().to_string())
                    .unwrap_or_else(|| name.to_string()),
                tooltip: announcement.and_then(|a| a.tooltip.clone()),
                from_plugin: announcement.is_some(),
                shape,
                default: announcement.and_then(|a| announced_default(a, shape)),
                live: live_param.map(|p| p.value.coerce(shape)),
            })
        })
        .collect()
}
