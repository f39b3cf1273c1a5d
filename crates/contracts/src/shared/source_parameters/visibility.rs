//! Optional rows of the parameters panel and when they are rendered

use super::draft::OverrideGroup;
use super::reconcile::ReconciledItem;
use crate::domain::a001_application::Application;
use crate::domain::a002_repo_app_details::RepoAppDetails;

/// Shown for an unset kustomize version
pub const DEFAULT_VERSION_LABEL: &str = "default";

/// Images need discovered images to override; helm groups show whenever
/// they have rows.
pub fn shows_override_group(
    group: OverrideGroup,
    details: &RepoAppDetails,
    items: &[ReconciledItem],
) -> bool {
    match group {
        OverrideGroup::Images => details
            .kustomize
            .as_ref()
            .is_some_and(|k| !k.images.is_empty()),
        OverrideGroup::HelmParameters | OverrideGroup::HelmFileParameters => !items.is_empty(),
    }
}

/// The VALUES row only exists for applications already carrying values
pub fn shows_helm_values(app: &Application) -> bool {
    app.source()
        .helm
        .as_ref()
        .and_then(|h| h.values.as_deref())
        .is_some_and(|values| !values.is_empty())
}

pub fn version_label(version: &str) -> &str {
    if version.is_empty() {
        DEFAULT_VERSION_LABEL
    } else {
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_application::ApplicationSourceHelm;
    use crate::domain::a002_repo_app_details::KustomizeAppSpec;
    use crate::shared::source_parameters::reconcile::reconcile;

    fn kustomize_details(images: &[&str]) -> RepoAppDetails {
        RepoAppDetails {
            kustomize: Some(KustomizeAppSpec {
                images: images.iter().map(|i| i.to_string()).collect(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_images_need_discovered_images() {
        // an override alone does not bring the section up
        let items = reconcile(
            Vec::<(String, String)>::new(),
            vec![("nginx".to_string(), "nginx:1.21".to_string())],
        );
        assert!(!shows_override_group(
            OverrideGroup::Images,
            &kustomize_details(&[]),
            &items
        ));
        assert!(!shows_override_group(
            OverrideGroup::Images,
            &RepoAppDetails::default(),
            &items
        ));
        assert!(shows_override_group(
            OverrideGroup::Images,
            &kustomize_details(&["nginx:1.19"]),
            &[]
        ));
    }

    #[test]
    fn test_helm_groups_follow_rows() {
        let details = RepoAppDetails::default();
        let items = reconcile(
            vec![("a".to_string(), "1".to_string())],
            Vec::<(String, String)>::new(),
        );
        assert!(shows_override_group(OverrideGroup::HelmParameters, &details, &items));
        assert!(!shows_override_group(OverrideGroup::HelmFileParameters, &details, &[]));
    }

    #[test]
    fn test_helm_values_only_when_set() {
        let mut app = Application::default();
        assert!(!shows_helm_values(&app));

        app.spec.source.helm = Some(ApplicationSourceHelm::default());
        assert!(!shows_helm_values(&app));

        app.spec.source.helm = Some(ApplicationSourceHelm {
            values: Some("replicas: 2".into()),
            ..Default::default()
        });
        assert!(shows_helm_values(&app));
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(""), "default");
        assert_eq!(version_label("v5.0.1"), "v5.0.1");
    }
}
