//! Normalized runtime contract types.
//!
//! The closed, versioned model the orchestrator consumes for scheduling
//! and lifecycle decisions. Values are built fresh per conversion, carry
//! no engine handles, and are immutable once returned.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Container lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerState {
    /// Container has been created but not started.
    Created,
    /// Container is running.
    Running,
    /// Container has exited.
    Exited,
    /// The engine reported a status this layer does not recognize.
    Unknown,
}

/// Sandbox readiness state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PodSandboxState {
    /// Sandbox is running and can host containers.
    Ready,
    /// Sandbox is not running.
    NotReady,
}

/// Normalized image description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeImage {
    /// Resolved image identity in pull-spec wire form, or the bare engine
    /// id for list summaries.
    pub id: String,

    /// Tags the image is known by.
    pub repo_tags: Vec<String>,

    /// Content digests the engine knows for this image.
    pub repo_digests: Vec<String>,

    /// Image size in bytes.
    pub size: u64,

    /// Numeric uid from the image config user field, when numeric.
    pub uid: Option<i64>,

    /// Username from the image config user field, when not numeric.
    pub username: String,

    /// Image labels; always present, possibly empty.
    pub labels: HashMap<String, String>,
}

/// Identity fields encoded in an orchestrator-assigned container name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMetadata {
    /// Container name as the orchestrator knows it.
    pub name: String,
    /// Restart attempt number.
    pub attempt: u32,
}

/// Identity fields encoded in an orchestrator-assigned sandbox name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSandboxMetadata {
    /// Pod name.
    pub name: String,
    /// Pod namespace.
    pub namespace: String,
    /// Pod UID.
    pub uid: String,
    /// Sandbox attempt number.
    pub attempt: u32,
}

/// Normalized container description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescription {
    /// Engine-assigned container id.
    pub id: String,

    /// Identity parsed from the engine container name.
    pub metadata: ContainerMetadata,

    /// Image reference the container was created from.
    pub image_ref: String,

    /// Engine-local id of that image.
    pub image_id: String,

    /// Classified lifecycle state.
    pub state: ContainerState,

    /// Creation time in nanoseconds since the epoch.
    pub created_at: i64,

    /// Orchestrator labels; always present, possibly empty.
    pub labels: HashMap<String, String>,

    /// Orchestrator annotations; always present, possibly empty.
    pub annotations: HashMap<String, String>,
}

/// Normalized sandbox description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSandboxDescription {
    /// Engine-assigned id of the backing container.
    pub id: String,

    /// Identity parsed from the engine container name.
    pub metadata: PodSandboxMetadata,

    /// Classified readiness state.
    pub state: PodSandboxState,

    /// Creation time in nanoseconds since the epoch.
    pub created_at: i64,

    /// Orchestrator labels; always present, possibly empty.
    pub labels: HashMap<String, String>,

    /// Orchestrator annotations; always present, possibly empty.
    pub annotations: HashMap<String, String>,
}
