//! Image identity resolution.
//!
//! The engine may know an image by content digest (re-pullable from a
//! registry on any host) or only by its locally generated id. Downstream
//! consumers need that distinction surfaced structurally, so identity is a
//! two-case type; the legacy prefixed-string convention appears only at
//! the wire boundary.

use std::fmt;

/// Wire prefix for an identity that can be re-pulled by digest.
pub const PULLABLE_IMAGE_ID_PREFIX: &str = "docker-pullable://";

/// Wire prefix for an identity only valid on the host that built it.
pub const IMAGE_ID_PREFIX: &str = "docker://";

/// Resolved image identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageId {
    /// Content-addressed digest, fetchable from a registry on any host.
    Pullable(String),
    /// Engine-local id, valid only where the image was built or loaded.
    LocalOnly(String),
}

impl ImageId {
    /// Resolve an identity from an engine id and its known content digests.
    ///
    /// Digest order is the engine's preference order; only the first entry
    /// is used. Digest well-formedness is the engine's contract and is not
    /// checked here.
    pub fn resolve(id: &str, digests: &[String]) -> Self {
        match digests.first() {
            Some(digest) => ImageId::Pullable(digest.clone()),
            None => ImageId::LocalOnly(id.to_string()),
        }
    }

    /// Parse the wire form back into a structured identity.
    ///
    /// Strings without a recognized marker are treated as local-only: the
    /// wire convention predates the markers and bare ids still occur.
    pub fn parse(spec: &str) -> Self {
        if let Some(digest) = spec.strip_prefix(PULLABLE_IMAGE_ID_PREFIX) {
            ImageId::Pullable(digest.to_string())
        } else if let Some(id) = spec.strip_prefix(IMAGE_ID_PREFIX) {
            ImageId::LocalOnly(id.to_string())
        } else {
            ImageId::LocalOnly(spec.to_string())
        }
    }

    /// The identity value without its marker prefix.
    pub fn value(&self) -> &str {
        match self {
            ImageId::Pullable(value) | ImageId::LocalOnly(value) => value,
        }
    }

    /// Whether the identity can be fetched from a registry on another host.
    pub fn is_pullable(&self) -> bool {
        matches!(self, ImageId::Pullable(_))
    }

    /// Render the wire form: the marker prefix followed by the value.
    pub fn to_pull_spec(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Pullable(digest) => write!(f, "{}{}", PULLABLE_IMAGE_ID_PREFIX, digest),
            ImageId::LocalOnly(id) => write!(f, "{}{}", IMAGE_ID_PREFIX, id),
        }
    }
}
