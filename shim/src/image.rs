//! Image record projection.
//!
//! Projects the engine's two image record shapes (inspect and list
//! summary) into the normalized image description. Both shapes carry the
//! same semantic fields under different nesting; the projections differ
//! only in where labels live and how the id is resolved. Labels are copied
//! verbatim, and an absent label field projects to an empty map, never a
//! missing one.

use dockbridge_core::engine::{ImageInspect, ImageSummary};
use dockbridge_core::error::{BridgeError, Result};
use dockbridge_core::runtime::RuntimeImage;

use crate::image_id::ImageId;

/// Project an inspect record into the normalized image description.
///
/// Inspect records carry the digest list, so the id goes through
/// [`ImageId::resolve`]: a digest-bearing image comes out pullable, a
/// local-only one keeps its engine id under the local marker.
pub fn inspect_to_image(image: &ImageInspect) -> Result<RuntimeImage> {
    if image.id.is_empty() && image.repo_digests.is_empty() {
        return Err(BridgeError::MalformedRecord {
            shape: "image inspect",
            message: "no id and no repo digests".to_string(),
        });
    }

    let (uid, username) = match &image.config {
        Some(config) => parse_image_user(&config.user),
        None => (None, String::new()),
    };

    // A record with no config and a record whose config carries an empty
    // label map both project to an empty map.
    let labels = image
        .config
        .as_ref()
        .and_then(|config| config.labels.clone())
        .unwrap_or_default();

    Ok(RuntimeImage {
        id: ImageId::resolve(&image.id, &image.repo_digests).to_pull_spec(),
        repo_tags: image.repo_tags.clone(),
        repo_digests: image.repo_digests.clone(),
        size: image.size.max(0) as u64,
        uid,
        username,
        labels,
    })
}

/// Project a list summary into the normalized image description.
///
/// Summaries carry no ordered digest list, so the engine id is used
/// unmodified.
pub fn summary_to_image(image: &ImageSummary) -> Result<RuntimeImage> {
    if image.id.is_empty() {
        return Err(BridgeError::MalformedRecord {
            shape: "image summary",
            message: "missing id".to_string(),
        });
    }

    Ok(RuntimeImage {
        id: image.id.clone(),
        repo_tags: image.repo_tags.clone(),
        repo_digests: image.repo_digests.clone(),
        size: image.size.max(0) as u64,
        uid: None,
        username: String::new(),
        labels: image.labels.clone().unwrap_or_default(),
    })
}

/// Split the image config user field into a numeric uid or a username.
///
/// The engine accepts "1000", "1000:1000", "nginx", or "nginx:nginx". The
/// group part after `:` is dropped; a numeric user becomes a uid, anything
/// else a username.
pub fn parse_image_user(user: &str) -> (Option<i64>, String) {
    let user = user.split(':').next().unwrap_or_default();
    match user.parse::<i64>() {
        Ok(uid) => (Some(uid), String::new()),
        Err(_) => (None, user.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockbridge_core::engine::ImageConfig;
    use std::collections::HashMap;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_inspect_labels_copied_from_config() {
        let image = ImageInspect {
            id: "sha256:abc".to_string(),
            config: Some(ImageConfig {
                labels: Some(labels(&[("key", "value")])),
                ..Default::default()
            }),
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert_eq!(runtime_image.labels, labels(&[("key", "value")]));
    }

    #[test]
    fn test_inspect_without_config_has_empty_labels() {
        let image = ImageInspect {
            id: "sha256:abc".to_string(),
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert!(runtime_image.labels.is_empty());
    }

    #[test]
    fn test_inspect_with_empty_label_map_has_empty_labels() {
        let image = ImageInspect {
            id: "sha256:abc".to_string(),
            config: Some(ImageConfig {
                labels: Some(HashMap::new()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert!(runtime_image.labels.is_empty());
    }

    #[test]
    fn test_inspect_id_prefers_first_digest() {
        let image = ImageInspect {
            id: "image-1".to_string(),
            repo_digests: vec!["digest-1".to_string(), "digest-2".to_string()],
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert_eq!(runtime_image.id, "docker-pullable://digest-1");
    }

    #[test]
    fn test_inspect_id_falls_back_to_local() {
        let image = ImageInspect {
            id: "image-2".to_string(),
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert_eq!(runtime_image.id, "docker://image-2");
    }

    #[test]
    fn test_inspect_size_and_tags_copied() {
        let image = ImageInspect {
            id: "sha256:abc".to_string(),
            repo_tags: vec!["nginx:latest".to_string()],
            size: 142_000_000,
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert_eq!(runtime_image.repo_tags, vec!["nginx:latest"]);
        assert_eq!(runtime_image.size, 142_000_000);
    }

    #[test]
    fn test_inspect_numeric_user_becomes_uid() {
        let image = ImageInspect {
            id: "sha256:abc".to_string(),
            config: Some(ImageConfig {
                user: "1000:1000".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let runtime_image = inspect_to_image(&image).unwrap();
        assert_eq!(runtime_image.uid, Some(1000));
        assert_eq!(runtime_image.username, "");
    }

    #[test]
    fn test_inspect_without_usable_id_fails() {
        let image = ImageInspect::default();
        let err = inspect_to_image(&image).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::MalformedRecord {
                shape: "image inspect",
                ..
            }
        ));
    }

    #[test]
    fn test_inspect_is_idempotent() {
        let image = ImageInspect {
            id: "image-1".to_string(),
            repo_digests: vec!["digest-1".to_string()],
            repo_tags: vec!["nginx:latest".to_string()],
            config: Some(ImageConfig {
                labels: Some(labels(&[("key", "value")])),
                user: "nginx".to_string(),
            }),
            size: 10,
        };

        assert_eq!(
            inspect_to_image(&image).unwrap(),
            inspect_to_image(&image).unwrap()
        );
    }

    #[test]
    fn test_summary_labels_copied() {
        let image = ImageSummary {
            id: "sha256:abc".to_string(),
            labels: Some(labels(&[("key", "value")])),
            ..Default::default()
        };

        let runtime_image = summary_to_image(&image).unwrap();
        assert_eq!(runtime_image.labels, labels(&[("key", "value")]));
    }

    #[test]
    fn test_summary_absent_labels_become_empty() {
        let image = ImageSummary {
            id: "sha256:abc".to_string(),
            ..Default::default()
        };

        let runtime_image = summary_to_image(&image).unwrap();
        assert!(runtime_image.labels.is_empty());
    }

    #[test]
    fn test_summary_id_used_unmodified() {
        let image = ImageSummary {
            id: "sha256:abc".to_string(),
            repo_digests: vec!["digest-1".to_string()],
            ..Default::default()
        };

        let runtime_image = summary_to_image(&image).unwrap();
        assert_eq!(runtime_image.id, "sha256:abc");
    }

    #[test]
    fn test_summary_missing_id_fails() {
        let image = ImageSummary::default();
        assert!(summary_to_image(&image).is_err());
    }

    #[test]
    fn test_parse_image_user_table() {
        assert_eq!(parse_image_user("1000"), (Some(1000), String::new()));
        assert_eq!(parse_image_user("1000:1000"), (Some(1000), String::new()));
        assert_eq!(parse_image_user("nginx"), (None, "nginx".to_string()));
        assert_eq!(parse_image_user("nginx:nginx"), (None, "nginx".to_string()));
        assert_eq!(parse_image_user(""), (None, String::new()));
    }
}
