//! Label and annotation packing.
//!
//! The engine offers one flat string map per container; the runtime
//! contract distinguishes labels from annotations. Annotations ride along
//! in the engine map under a key prefix and are split back out on the way
//! up. Internal bookkeeping keys never surface to the orchestrator.

use std::collections::HashMap;

/// Key prefix marking an engine label entry as an annotation.
pub const ANNOTATION_PREFIX: &str = "annotation.";

/// Engine label recording which kind of container this layer created.
pub const CONTAINER_TYPE_LABEL_KEY: &str = "io.dockbridge.type";

/// Container-type label value for an application container.
pub const CONTAINER_TYPE_CONTAINER: &str = "container";

/// Container-type label value for a sandbox (infra) container.
pub const CONTAINER_TYPE_SANDBOX: &str = "sandbox";

/// Pack orchestrator labels and annotations into one engine label map.
pub fn merge_labels_annotations(
    labels: &HashMap<String, String>,
    annotations: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = labels.clone();
    for (key, value) in annotations {
        merged.insert(format!("{}{}", ANNOTATION_PREFIX, key), value.clone());
    }
    merged
}

/// Split an engine label map back into labels and annotations.
///
/// Everything under the annotation prefix is an annotation, the rest are
/// labels; internal bookkeeping keys are dropped.
pub fn split_labels_annotations(
    merged: &HashMap<String, String>,
) -> (HashMap<String, String>, HashMap<String, String>) {
    let mut labels = HashMap::new();
    let mut annotations = HashMap::new();

    for (key, value) in merged {
        if key == CONTAINER_TYPE_LABEL_KEY {
            continue;
        }
        match key.strip_prefix(ANNOTATION_PREFIX) {
            Some(stripped) => {
                annotations.insert(stripped.to_string(), value.clone());
            }
            None => {
                labels.insert(key.clone(), value.clone());
            }
        }
    }

    (labels, annotations)
}
