//! Orchestrator name convention.
//!
//! The engine only stores a flat container name, so the orchestrator
//! encodes identity into it:
//!
//! - container: `k8s_<container>_<pod>_<namespace>_<uid>_<attempt>`
//! - sandbox:   `k8s_POD_<pod>_<namespace>_<uid>_<attempt>`
//!
//! This module is the codec for that convention, both directions. Parsing
//! tolerates the leading `/` the engine prepends to every name.

use dockbridge_core::error::{BridgeError, Result};
use dockbridge_core::runtime::{ContainerMetadata, PodSandboxMetadata};

/// Leading marker identifying names managed by this layer.
const NAME_PREFIX: &str = "k8s";

/// Separator between name parts.
const NAME_SEPARATOR: &str = "_";

/// Fixed container-name slot used for the sandbox (infra) container.
const SANDBOX_INFRA_NAME: &str = "POD";

/// Number of `_`-separated parts in a well-formed name.
const NAME_PARTS: usize = 6;

/// Build the engine container name for an application container.
pub fn make_container_name(
    sandbox: &PodSandboxMetadata,
    container: &ContainerMetadata,
) -> String {
    let attempt = container.attempt.to_string();
    [
        NAME_PREFIX,
        container.name.as_str(),
        sandbox.name.as_str(),
        sandbox.namespace.as_str(),
        sandbox.uid.as_str(),
        attempt.as_str(),
    ]
    .join(NAME_SEPARATOR)
}

/// Build the engine container name for a sandbox container.
pub fn make_sandbox_name(sandbox: &PodSandboxMetadata) -> String {
    let attempt = sandbox.attempt.to_string();
    [
        NAME_PREFIX,
        SANDBOX_INFRA_NAME,
        sandbox.name.as_str(),
        sandbox.namespace.as_str(),
        sandbox.uid.as_str(),
        attempt.as_str(),
    ]
    .join(NAME_SEPARATOR)
}

/// Parse container identity out of an engine container name.
pub fn parse_container_name(name: &str) -> Result<ContainerMetadata> {
    let parts = split_name(name)?;
    Ok(ContainerMetadata {
        name: parts[1].to_string(),
        attempt: parse_attempt(name, parts[5])?,
    })
}

/// Parse sandbox identity out of an engine container name.
pub fn parse_sandbox_name(name: &str) -> Result<PodSandboxMetadata> {
    let parts = split_name(name)?;
    Ok(PodSandboxMetadata {
        name: parts[2].to_string(),
        namespace: parts[3].to_string(),
        uid: parts[4].to_string(),
        attempt: parse_attempt(name, parts[5])?,
    })
}

/// Whether an engine container name marks a sandbox container.
pub fn is_sandbox_name(name: &str) -> bool {
    match split_name(name) {
        Ok(parts) => parts[1] == SANDBOX_INFRA_NAME,
        Err(_) => false,
    }
}

/// Split a name into its six parts, validating shape and prefix.
fn split_name(name: &str) -> Result<Vec<&str>> {
    let trimmed = name.strip_prefix('/').unwrap_or(name);
    let parts: Vec<&str> = trimmed.split(NAME_SEPARATOR).collect();
    if parts.len() != NAME_PARTS || parts[0] != NAME_PREFIX {
        return Err(BridgeError::NameFormat(format!(
            "container name \"{}\" does not match k8s_<container>_<pod>_<namespace>_<uid>_<attempt>",
            name
        )));
    }
    Ok(parts)
}

fn parse_attempt(name: &str, part: &str) -> Result<u32> {
    part.parse::<u32>().map_err(|_| {
        BridgeError::NameFormat(format!(
            "container name \"{}\" has a non-numeric attempt \"{}\"",
            name, part
        ))
    })
}
