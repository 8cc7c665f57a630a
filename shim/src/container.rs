//! Container record projection.
//!
//! Projects engine container list records into normalized container and
//! sandbox descriptions. The engine has no sandbox notion of its own: a
//! sandbox is a container this layer created under the sandbox name
//! convention, and its record flows through the same projection with
//! sandbox metadata and readiness classification.

use dockbridge_core::engine::ContainerSummary;
use dockbridge_core::error::{BridgeError, Result};
use dockbridge_core::runtime::{ContainerDescription, PodSandboxDescription};

use crate::labels::split_labels_annotations;
use crate::naming::{parse_container_name, parse_sandbox_name};
use crate::state::{classify_container_status, classify_sandbox_status};

/// Engine records report creation time in whole seconds; the contract
/// carries nanoseconds.
const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

/// Project an engine container record into a normalized container description.
pub fn container_to_runtime(container: &ContainerSummary) -> Result<ContainerDescription> {
    let name = primary_name(container)?;
    let metadata = parse_container_name(name)?;
    let (labels, annotations) = split_labels_annotations(&container.labels);

    Ok(ContainerDescription {
        id: container.id.clone(),
        metadata,
        image_ref: container.image.clone(),
        image_id: container.image_id.clone(),
        state: classify_container_status(&container.status),
        created_at: container.created * NANOSECONDS_PER_SECOND,
        labels,
        annotations,
    })
}

/// Project an engine container record into a normalized sandbox description.
pub fn container_to_sandbox(container: &ContainerSummary) -> Result<PodSandboxDescription> {
    let name = primary_name(container)?;
    let metadata = parse_sandbox_name(name)?;
    let (labels, annotations) = split_labels_annotations(&container.labels);

    Ok(PodSandboxDescription {
        id: container.id.clone(),
        metadata,
        state: classify_sandbox_status(&container.status),
        created_at: container.created * NANOSECONDS_PER_SECOND,
        labels,
        annotations,
    })
}

/// The engine may report several names; the first is authoritative.
fn primary_name(container: &ContainerSummary) -> Result<&str> {
    container
        .names
        .first()
        .map(String::as_str)
        .ok_or_else(|| BridgeError::MalformedRecord {
            shape: "container",
            message: format!("container \"{}\" has no name", container.id),
        })
}
