/// VolumeIngestor — walks slice sources in depth order and appends every
/// non-black pixel to a PointCloud as `(x, y, slice_ordinal)`.
///
/// The ingestor performs no sorting and no coordinate normalization:
/// the caller-supplied source order IS the depth order, and pixel
/// coordinates are used directly. Scaling to a renderable range, if any,
/// is the renderer's concern.

use glam::Vec3;

use super::raster::SliceSource;
use crate::error::CtVolumeResult;
use crate::point_cloud::PointCloud;
use crate::{engine_debug, engine_info, engine_warn};

/// What to do when a slice fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Abort ingestion on the first decode failure
    Fatal,
    /// Log a diagnostic, skip the slice, continue with the rest.
    ///
    /// Volumetric scans routinely contain a few corrupt frames, so this
    /// is the default.
    #[default]
    Skip,
}

/// Ingestion configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Decode failure handling policy
    pub decode_policy: DecodePolicy,
}

/// Summary of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Slices decoded and scanned
    pub slices_ingested: usize,
    /// Slices skipped under [`DecodePolicy::Skip`]
    pub slices_skipped: usize,
    /// Points appended to the cloud
    pub points_emitted: usize,
}

/// Turns an ordered list of slice sources into point-cloud contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeIngestor {
    options: IngestOptions,
}

impl VolumeIngestor {
    /// Create an ingestor with the given options
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Ingest `sources` into `cloud`, in the caller-supplied order.
    ///
    /// All points from the i-th source get depth `z = i` (0-based). A
    /// slice skipped under [`DecodePolicy::Skip`] still occupies its
    /// ordinal — later slices never shift toward the viewer. A pixel is
    /// emitted iff any of its channels is non-zero.
    ///
    /// # Errors
    ///
    /// Under [`DecodePolicy::Fatal`], the first decode failure aborts
    /// ingestion with the decode error.
    pub fn ingest<S: SliceSource>(
        &self,
        sources: &[S],
        cloud: &mut PointCloud,
    ) -> CtVolumeResult<IngestReport> {
        let mut report = IngestReport::default();

        for (depth, source) in sources.iter().enumerate() {
            let raster = match source.decode() {
                Ok(raster) => raster,
                Err(error) => match self.options.decode_policy {
                    DecodePolicy::Fatal => return Err(error),
                    DecodePolicy::Skip => {
                        engine_warn!(
                            "ctvolume::VolumeIngestor",
                            "skipping slice '{}' at depth {}: {}",
                            source.name(),
                            depth,
                            error
                        );
                        report.slices_skipped += 1;
                        continue;
                    }
                },
            };

            let before = cloud.len();
            for y in 0..raster.height() {
                for x in 0..raster.width() {
                    if raster.is_lit(x, y) {
                        cloud.append(Vec3::new(x as f32, y as f32, depth as f32));
                    }
                }
            }

            report.slices_ingested += 1;
            report.points_emitted += cloud.len() - before;
            engine_debug!(
                "ctvolume::VolumeIngestor",
                "slice '{}' at depth {}: {} points",
                source.name(),
                depth,
                cloud.len() - before
            );
        }

        engine_info!(
            "ctvolume::VolumeIngestor",
            "ingested {} slices ({} skipped), {} points",
            report.slices_ingested,
            report.slices_skipped,
            report.points_emitted
        );
        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "ingestor_tests.rs"]
mod tests;
