//! Dockbridge Shim - engine-to-runtime conversions.
//!
//! Pure, stateless projections from the engine's inspection records to the
//! normalized runtime contract:
//! - status text → lifecycle / readiness state
//! - image id + content digests → structured, pull-addressable identity
//! - image and container records → normalized descriptions
//!
//! Every conversion is a deterministic function over an immutable input;
//! nothing here performs I/O or retains a reference past the call.

pub mod container;
pub mod image;
pub mod image_id;
pub mod labels;
pub mod naming;
pub mod state;

pub use container::{container_to_runtime, container_to_sandbox};
pub use image::{inspect_to_image, parse_image_user, summary_to_image};
pub use image_id::{ImageId, IMAGE_ID_PREFIX, PULLABLE_IMAGE_ID_PREFIX};
pub use naming::{
    is_sandbox_name, make_container_name, make_sandbox_name, parse_container_name,
    parse_sandbox_name,
};
pub use state::{classify_container_status, classify_sandbox_status};
