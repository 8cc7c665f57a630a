//! Raw engine inspection records.
//!
//! Typed views of the JSON the engine's inspection API emits. Field names
//! keep the engine's wire casing so records deserialize untouched; the
//! status line and every optional field are treated as an opaque input
//! contract owned by the engine, not by this layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the engine's container list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerSummary {
    /// Engine-assigned container id.
    pub id: String,

    /// Names as reported by the engine, each with a leading `/`.
    pub names: Vec<String>,

    /// Image reference the container was created from.
    pub image: String,

    /// Engine-local id of that image.
    #[serde(rename = "ImageID")]
    pub image_id: String,

    /// Creation time in seconds since the epoch.
    pub created: i64,

    /// Free-text status line (e.g. "Up 5 hours").
    pub status: String,

    /// Flat label map; annotations ride along under a key prefix.
    pub labels: HashMap<String, String>,
}

/// Result of inspecting a single image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageInspect {
    /// Engine-local image id.
    pub id: String,

    /// Tags the image is known by.
    pub repo_tags: Vec<String>,

    /// Content digests in the engine's preference order; empty for images
    /// that were built locally and never pushed.
    pub repo_digests: Vec<String>,

    /// Nested config object; absent on some engine versions.
    pub config: Option<ImageConfig>,

    /// Image size in bytes.
    pub size: i64,
}

/// The nested config object carried by an image inspect record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageConfig {
    /// Image labels; the engine omits the field when there are none.
    pub labels: Option<HashMap<String, String>>,

    /// Free-form user field ("1000", "1000:1000", "nginx").
    pub user: String,
}

/// One entry of the engine's image list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageSummary {
    /// Engine-local image id.
    pub id: String,

    /// Tags the image is known by.
    pub repo_tags: Vec<String>,

    /// Content digests the engine knows for this image.
    pub repo_digests: Vec<String>,

    /// Image labels, carried directly on the summary; the engine omits the
    /// field when there are none.
    pub labels: Option<HashMap<String, String>>,

    /// Image size in bytes.
    pub size: i64,
}
