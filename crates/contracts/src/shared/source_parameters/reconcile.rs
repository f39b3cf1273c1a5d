//! Merge discovered parameter values with the overrides stored on an
//! application into one ordered list.

use crate::domain::a001_application::{ApplicationSourceHelm, ApplicationSourceKustomize, KustomizeImage};
use crate::domain::a002_repo_app_details::{HelmAppSpec, KustomizeAppSpec};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// One row of the merged view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledItem<V = String> {
    pub name: String,
    /// Discovered value, or the default when the name was never discovered
    pub original: V,
    /// Position in the stored override list
    pub override_index: Option<usize>,
    /// Override value when present, otherwise `original`. An empty override
    /// is still the value.
    pub value: V,
}

impl<V: PartialEq> ReconciledItem<V> {
    pub fn is_overridden(&self) -> bool {
        self.override_index.is_some()
    }

    pub fn differs_from_original(&self) -> bool {
        self.value != self.original
    }

    /// "Remove override" is only offered for an override that changes the
    /// discovered value
    pub fn can_remove_override(&self) -> bool {
        self.is_overridden() && self.differs_from_original()
    }
}

/// Overridden items first by override position, then the rest by name.
pub fn overrides_first<V>(a: &ReconciledItem<V>, b: &ReconciledItem<V>) -> Ordering {
    match (a.override_index, b.override_index) {
        (Some(x), Some(y)) if x != y => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

/// Union of both collections keyed by name, sorted with [`overrides_first`].
///
/// A name repeated in `overrides` keeps the position of its last occurrence;
/// the earlier entries are left as they are.
pub fn reconcile<V, D, O>(discovered: D, overrides: O) -> Vec<ReconciledItem<V>>
where
    V: Clone + Default,
    D: IntoIterator<Item = (String, V)>,
    O: IntoIterator<Item = (String, V)>,
{
    let originals: BTreeMap<String, V> = discovered.into_iter().collect();
    let overridden: BTreeMap<String, (usize, V)> = overrides
        .into_iter()
        .enumerate()
        .map(|(index, (name, value))| (name, (index, value)))
        .collect();

    let names: BTreeSet<&String> = originals.keys().chain(overridden.keys()).collect();

    let mut items: Vec<ReconciledItem<V>> = names
        .into_iter()
        .map(|name| {
            let original = originals.get(name).cloned().unwrap_or_default();
            let (override_index, value) = match overridden.get(name) {
                Some((index, value)) => (Some(*index), value.clone()),
                None => (None, original.clone()),
            };
            ReconciledItem {
                name: name.clone(),
                original,
                override_index,
                value,
            }
        })
        .collect();

    items.sort_by(overrides_first);
    items
}

pub fn helm_parameter_items(
    discovered: Option<&HelmAppSpec>,
    source: Option<&ApplicationSourceHelm>,
) -> Vec<ReconciledItem> {
    reconcile(
        discovered
            .into_iter()
            .flat_map(|d| d.parameters.iter())
            .map(|p| (p.name.clone(), p.value.clone())),
        source
            .into_iter()
            .flat_map(|s| s.parameters.iter())
            .map(|p| (p.name.clone(), p.value.clone())),
    )
}

pub fn helm_file_parameter_items(
    discovered: Option<&HelmAppSpec>,
    source: Option<&ApplicationSourceHelm>,
) -> Vec<ReconciledItem> {
    reconcile(
        discovered
            .into_iter()
            .flat_map(|d| d.file_parameters.iter())
            .map(|p| (p.name.clone(), p.path.clone())),
        source
            .into_iter()
            .flat_map(|s| s.file_parameters.iter())
            .map(|p| (p.name.clone(), p.path.clone())),
    )
}

/// Images are keyed by image name and valued by their full override string.
pub fn kustomize_image_items(
    discovered: Option<&KustomizeAppSpec>,
    source: Option<&ApplicationSourceKustomize>,
) -> Vec<ReconciledItem> {
    fn keyed(raw: &String) -> (String, String) {
        let image = KustomizeImage::parse(raw);
        (image.name.clone(), image.to_string())
    }

    reconcile(
        discovered.into_iter().flat_map(|d| d.images.iter()).map(keyed),
        source.into_iter().flat_map(|s| s.images.iter()).map(keyed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_application::HelmParameter;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    fn names(items: &[ReconciledItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_one_item_per_distinct_name() {
        let items = reconcile(
            pairs(&[("a", "1"), ("b", "2"), ("c", "3")]),
            pairs(&[("b", "20"), ("d", "40")]),
        );

        assert_eq!(items.len(), 4);
        for item in &items {
            let expected = match item.name.as_str() {
                "b" => Some(0),
                "d" => Some(1),
                _ => None,
            };
            assert_eq!(item.override_index, expected, "{}", item.name);
        }
    }

    #[test]
    fn test_values_prefer_override() {
        let items = reconcile(pairs(&[("a", "1"), ("b", "2")]), pairs(&[("b", "20"), ("x", "9")]));

        let b = items.iter().find(|i| i.name == "b").unwrap();
        assert_eq!((b.original.as_str(), b.value.as_str()), ("2", "20"));
        assert!(b.differs_from_original());

        let a = items.iter().find(|i| i.name == "a").unwrap();
        assert_eq!((a.original.as_str(), a.value.as_str()), ("1", "1"));
        assert!(!a.is_overridden());

        // override without a discovered counterpart still appears
        let x = items.iter().find(|i| i.name == "x").unwrap();
        assert_eq!((x.original.as_str(), x.value.as_str()), ("", "9"));
    }

    #[test]
    fn test_remove_offered_only_for_changed_values() {
        let items = reconcile(
            pairs(&[("same", "1"), ("changed", "1"), ("plain", "1")]),
            pairs(&[("same", "1"), ("changed", "2"), ("added", "3")]),
        );
        let offered: Vec<&str> = items
            .iter()
            .filter(|i| i.can_remove_override())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(offered, vec!["changed", "added"]);
    }

    #[test]
    fn test_empty_override_is_kept_as_value() {
        // an override cleared to "" stays in effect instead of falling back
        let items = reconcile(pairs(&[("tag", "1.0")]), pairs(&[("tag", "")]));
        assert_eq!(items[0].override_index, Some(0));
        assert_eq!(items[0].value, "");
        assert!(items[0].can_remove_override());
    }

    #[test]
    fn test_overrides_sort_by_position_then_name() {
        // "a" sits at override position 0, "b" at position 2
        let items = reconcile(
            pairs(&[("c", "3"), ("b", "2"), ("a", "1")]),
            pairs(&[("a", "10"), ("unused", "0"), ("b", "20")]),
        );
        assert_eq!(names(&items), vec!["a", "unused", "b", "c"]);

        // "b" resolves to position 2, "a" to position 0, "c" is not overridden
        let items = reconcile(
            pairs(&[("c", "3")]),
            pairs(&[("a", "1"), ("b", "old"), ("b", "2")]),
        );
        assert_eq!(names(&items), vec!["a", "b", "c"]);
        assert_eq!(items[1].override_index, Some(2));
        assert_eq!(items[0].override_index, Some(0));
    }

    #[test]
    fn test_non_overridden_sorted_by_name() {
        let items = reconcile(pairs(&[("zeta", "1"), ("alpha", "2"), ("mid", "3")]), pairs(&[]));
        assert_eq!(names(&items), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let first = reconcile(pairs(&[("a", "1"), ("b", "2")]), pairs(&[("b", "3")]));
        let second = reconcile(pairs(&[("b", "2"), ("a", "1")]), pairs(&[("b", "3")]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_override_names_keep_last_position() {
        let items = reconcile(pairs(&[("a", "1")]), pairs(&[("a", "x"), ("a", "y")]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].override_index, Some(1));
        assert_eq!(items[0].value, "y");
    }

    #[test]
    fn test_helm_items_from_details_and_source() {
        let details = HelmAppSpec {
            parameters: vec![HelmParameter::new("image.tag", "1.0")],
            ..Default::default()
        };
        let source = ApplicationSourceHelm {
            parameters: vec![HelmParameter::new("replicas", "3")],
            ..Default::default()
        };

        let items = helm_parameter_items(Some(&details), Some(&source));
        assert_eq!(names(&items), vec!["replicas", "image.tag"]);
        assert!(helm_parameter_items(None, None).is_empty());
    }

    #[test]
    fn test_image_items_keyed_by_image_name() {
        let details = KustomizeAppSpec {
            images: vec!["nginx:1.19".into(), "redis:6".into()],
        };
        let source = ApplicationSourceKustomize {
            images: vec!["nginx:1.21".into()],
            ..Default::default()
        };

        let items = kustomize_image_items(Some(&details), Some(&source));
        assert_eq!(names(&items), vec!["nginx", "redis"]);
        assert_eq!(items[0].original, "nginx:1.19");
        assert_eq!(items[0].value, "nginx:1.21");
        assert_eq!(items[0].override_index, Some(0));
    }
}
