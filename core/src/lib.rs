//! Dockbridge Core - Shared Types for the Engine Translation Layer
//!
//! This module provides the raw engine record model, the normalized
//! runtime contract, and the error type used across the dockbridge
//! workspace.

pub mod engine;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use engine::{ContainerSummary, ImageConfig, ImageInspect, ImageSummary};
pub use error::{BridgeError, Result};
pub use runtime::{
    ContainerDescription, ContainerMetadata, ContainerState, PodSandboxDescription,
    PodSandboxMetadata, PodSandboxState, RuntimeImage,
};

/// Dockbridge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
