//! Point cloud module — the growable 3-D coordinate container.
//!
//! One PointCloud is produced by volume ingestion at startup and then
//! owned by the World for the rest of the session. Insertion order is
//! the slice-scan order; renderers read the points as one contiguous
//! slice for a single-copy GPU upload.

mod point_cloud;

pub use point_cloud::{PointCloud, INITIAL_CAPACITY};
