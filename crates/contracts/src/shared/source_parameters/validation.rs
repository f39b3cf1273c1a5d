//! Field-level checks run before a save

use crate::domain::a001_application::{Application, JsonnetVar};
use std::collections::BTreeMap;

pub const TLAS_FIELD: &str = "spec.source.directory.jsonnet.tlas";
pub const EXT_VARS_FIELD: &str = "spec.source.directory.jsonnet.extVars";
pub const MISSING_NAME: &str = "All fields must have name";

/// Error message per field path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

fn has_unnamed(vars: &[JsonnetVar]) -> bool {
    vars.iter().any(|v| v.name.is_empty() && !v.code)
}

/// Every TLA and external variable needs a name unless it is inline code.
pub fn validate(app: &Application) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let Some(directory) = app.source().directory.as_ref() else {
        return errors;
    };

    if has_unnamed(&directory.jsonnet.tlas) {
        errors.insert(TLAS_FIELD, MISSING_NAME);
    }
    if has_unnamed(&directory.jsonnet.ext_vars) {
        errors.insert(EXT_VARS_FIELD, MISSING_NAME);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_application::ApplicationSourceDirectory;

    fn var(name: &str, code: bool) -> JsonnetVar {
        JsonnetVar {
            name: name.to_string(),
            value: "v".to_string(),
            code,
        }
    }

    fn app_with(tlas: Vec<JsonnetVar>, ext_vars: Vec<JsonnetVar>) -> Application {
        let mut app = Application::default();
        let mut directory = ApplicationSourceDirectory::default();
        directory.jsonnet.tlas = tlas;
        directory.jsonnet.ext_vars = ext_vars;
        app.spec.source.directory = Some(directory);
        app
    }

    #[test]
    fn test_named_vars_pass() {
        assert!(validate(&app_with(vec![var("a", false)], vec![var("b", true)])).is_empty());
        assert!(validate(&Application::default()).is_empty());
    }

    #[test]
    fn test_unnamed_var_reported_per_field() {
        let errors = validate(&app_with(vec![var("", false)], vec![var("x", false)]));
        assert_eq!(errors.get(TLAS_FIELD), Some(MISSING_NAME));
        assert_eq!(errors.get(EXT_VARS_FIELD), None);

        let errors = validate(&app_with(vec![], vec![var("", false)]));
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(EXT_VARS_FIELD, MISSING_NAME)]);
    }

    #[test]
    fn test_inline_code_needs_no_name() {
        assert!(validate(&app_with(vec![var("", true)], vec![])).is_empty());
    }
}
