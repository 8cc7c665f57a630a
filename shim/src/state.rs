//! Engine status classification.
//!
//! The engine reports container state as an unversioned, human-oriented
//! status line ("Up 5 hours", "Exited (0) 2 hours ago"). Classification is
//! a total function over that text: anything unrecognized degrades to
//! [`ContainerState::Unknown`] rather than failing.

use dockbridge_core::runtime::{ContainerState, PodSandboxState};

/// Status text prefix for a running container.
const STATUS_UP_PREFIX: &str = "Up";
/// Status text prefix for an exited container.
const STATUS_EXITED_PREFIX: &str = "Exited";
/// Exact status text for a created-but-never-started container.
const STATUS_CREATED: &str = "Created";

/// How a classification rule matches the status text.
enum StatusMatch {
    Prefix(&'static str),
    Exact(&'static str),
}

/// Classification rules in precedence order; the first match wins.
///
/// "Up" and "Exited" are prefix matches because the engine appends a
/// human-readable duration; "Created" carries none and matches exactly.
/// New engine status variants belong here, not at call sites.
const STATUS_RULES: &[(StatusMatch, ContainerState)] = &[
    (StatusMatch::Prefix(STATUS_UP_PREFIX), ContainerState::Running),
    (StatusMatch::Prefix(STATUS_EXITED_PREFIX), ContainerState::Exited),
    (StatusMatch::Exact(STATUS_CREATED), ContainerState::Created),
];

/// Classify an engine status line into a container lifecycle state.
pub fn classify_container_status(status: &str) -> ContainerState {
    for (rule, state) in STATUS_RULES {
        let matched = match rule {
            StatusMatch::Prefix(prefix) => status.starts_with(prefix),
            StatusMatch::Exact(text) => status == *text,
        };
        if matched {
            return *state;
        }
    }

    tracing::debug!(status = %status, "unrecognized engine status");
    ContainerState::Unknown
}

/// Classify an engine status line into sandbox readiness.
///
/// A sandbox is ready exactly while its backing container is up; every
/// other status means not ready.
pub fn classify_sandbox_status(status: &str) -> PodSandboxState {
    if status.starts_with(STATUS_UP_PREFIX) {
        PodSandboxState::Ready
    } else {
        tracing::debug!(status = %status, "sandbox backing container is not up");
        PodSandboxState::NotReady
    }
}
