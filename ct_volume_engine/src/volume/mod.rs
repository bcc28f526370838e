//! Volume ingestion module — slice stacks into point clouds.
//!
//! Decoding slice images is an external concern behind the
//! [`SliceSource`] trait: the viewer binary implements it over an image
//! decoding crate, tests implement it over in-memory buffers. The
//! ingestor only requires per-pixel "non-black" testability and trusts
//! the caller-supplied slice order verbatim as depth order.

mod ingestor;
mod raster;

pub use ingestor::{DecodePolicy, IngestOptions, IngestReport, VolumeIngestor};
pub use raster::{SliceRaster, SliceSource};
