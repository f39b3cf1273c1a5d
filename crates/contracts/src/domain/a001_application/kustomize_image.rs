//! Kustomize image override strings: `name[=new_name][:tag|@digest]`

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KustomizeImage {
    pub name: String,
    pub new_name: Option<String>,
    pub new_tag: Option<String>,
    pub digest: Option<String>,
}

impl KustomizeImage {
    pub fn parse(value: &str) -> Self {
        let (name, target) = match value.split_once('=') {
            Some((name, target)) => (Some(name), target),
            None => (None, value),
        };

        let (image, new_tag, digest) = split_reference(target);
        match name {
            Some(name) => Self {
                name: name.to_string(),
                new_name: (!image.is_empty()).then(|| image.to_string()),
                new_tag,
                digest,
            },
            None => Self {
                name: image.to_string(),
                new_name: None,
                new_tag,
                digest,
            },
        }
    }

    /// Override of the image `name`, whatever the operator typed.
    ///
    /// A value naming another image is taken as the replacement target, so
    /// `mirror/nginx:1.2` typed on the `nginx` row becomes
    /// `nginx=mirror/nginx:1.2`.
    pub fn override_for(name: &str, value: &str) -> Self {
        let mut image = Self::parse(value);
        if image.name != name {
            if image.new_name.is_none() && !value.contains('=') {
                image.new_name = (!image.name.is_empty()).then(|| image.name.clone());
            }
            image.name = name.to_string();
        }
        image
    }

    pub fn with_new_name(mut self, new_name: &str) -> Self {
        self.new_name = non_empty(new_name);
        self
    }

    /// Tag and digest are exclusive: setting one clears the other
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.new_tag = non_empty(tag);
        if self.new_tag.is_some() {
            self.digest = None;
        }
        self
    }

    pub fn with_digest(mut self, digest: &str) -> Self {
        self.digest = non_empty(digest);
        if self.digest.is_some() {
            self.new_tag = None;
        }
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl fmt::Display for KustomizeImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(new_name) = &self.new_name {
            write!(f, "={}", new_name)?;
        }
        if let Some(tag) = &self.new_tag {
            write!(f, ":{}", tag)
        } else if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)
        } else {
            Ok(())
        }
    }
}

/// Split `image[:tag|@digest]`. A colon before the last `/` is a registry port.
fn split_reference(reference: &str) -> (&str, Option<String>, Option<String>) {
    if let Some((image, digest)) = reference.split_once('@') {
        return (image, None, Some(digest.to_string()));
    }
    let path_start = reference.rfind('/').map(|i| i + 1).unwrap_or(0);
    match reference[path_start..].rfind(':') {
        Some(i) => {
            let split = path_start + i;
            (
                &reference[..split],
                Some(reference[split + 1..].to_string()),
                None,
            )
        }
        None => (reference, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_tag() {
        let image = KustomizeImage::parse("nginx:1.19");
        assert_eq!(image.name, "nginx");
        assert_eq!(image.new_tag.as_deref(), Some("1.19"));
        assert_eq!(image.to_string(), "nginx:1.19");
    }

    #[test]
    fn test_parse_with_new_name() {
        let image = KustomizeImage::parse("nginx=mirror.local/nginx:1.2");
        assert_eq!(image.name, "nginx");
        assert_eq!(image.new_name.as_deref(), Some("mirror.local/nginx"));
        assert_eq!(image.new_tag.as_deref(), Some("1.2"));
        assert_eq!(image.to_string(), "nginx=mirror.local/nginx:1.2");
    }

    #[test]
    fn test_parse_digest() {
        let image = KustomizeImage::parse("app@sha256:abc");
        assert_eq!(image.name, "app");
        assert_eq!(image.digest.as_deref(), Some("sha256:abc"));
        assert_eq!(image.new_tag, None);
        assert_eq!(image.to_string(), "app@sha256:abc");
    }

    #[test]
    fn test_registry_port_is_not_a_tag() {
        let image = KustomizeImage::parse("localhost:5000/app");
        assert_eq!(image.name, "localhost:5000/app");
        assert_eq!(image.new_tag, None);

        let tagged = KustomizeImage::parse("localhost:5000/app:v1");
        assert_eq!(tagged.name, "localhost:5000/app");
        assert_eq!(tagged.new_tag.as_deref(), Some("v1"));
    }

    #[test]
    fn test_override_keeps_row_image_name() {
        let same = KustomizeImage::override_for("nginx", "nginx:1.22");
        assert_eq!(same.to_string(), "nginx:1.22");

        let moved = KustomizeImage::override_for("nginx", "mirror/nginx:1.2");
        assert_eq!(moved.to_string(), "nginx=mirror/nginx:1.2");

        let renamed = KustomizeImage::override_for("nginx", "other=mirror/nginx:1.2");
        assert_eq!(renamed.to_string(), "nginx=mirror/nginx:1.2");
    }

    #[test]
    fn test_field_edits() {
        let image = KustomizeImage::parse("nginx:1.21")
            .with_new_name("mirror/nginx")
            .with_tag("1.22");
        assert_eq!(image.to_string(), "nginx=mirror/nginx:1.22");

        let pinned = image.clone().with_digest("sha256:abc");
        assert_eq!(pinned.new_tag, None);
        assert_eq!(pinned.to_string(), "nginx=mirror/nginx@sha256:abc");

        // clearing the new name goes back to the plain image
        assert_eq!(image.with_new_name(" ").to_string(), "nginx:1.22");
    }
}
