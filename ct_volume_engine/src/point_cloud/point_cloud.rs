/// PointCloud — growable, insertion-ordered container of 3-D coordinates.
///
/// Grows by doubling: capacity starts at [`INITIAL_CAPACITY`] and doubles
/// exactly when an append finds the storage full, so after N appends the
/// capacity is the smallest `INITIAL_CAPACITY * 2^k >= N`. Appending may
/// reallocate the backing storage, so any previously obtained slice view
/// must be re-fetched afterwards.

use glam::Vec3;
use std::io::{self, Write};

/// Capacity a fresh PointCloud starts with
pub const INITIAL_CAPACITY: usize = 4;

/// Growable, insertion-ordered 3-D point container.
///
/// Insertion order reflects slice-scan order and carries no meaning
/// beyond that; there are no removal or in-place mutation operations.
#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    /// Create an empty cloud with capacity [`INITIAL_CAPACITY`]
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Number of valid points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Allocated slots in the backing storage
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Append one point, doubling the backing storage first when full.
    ///
    /// Amortized O(1). The point lands at index `len()` and `len()`
    /// increments by one.
    pub fn append(&mut self, point: Vec3) {
        if self.points.len() == self.points.capacity() {
            // Exactly double; Vec::push alone gives no growth guarantee
            self.points.reserve_exact(self.points.capacity());
        }
        self.points.push(point);
    }

    /// The point at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    /// All points as one contiguous slice, in insertion order.
    ///
    /// Invalidated by any `append` that grows the storage — re-fetch
    /// after appending.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Raw bytes of the point storage, for one-copy GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Write the cloud as CSV: header `x,y,z`, then one line per point
    /// in insertion order.
    ///
    /// Debug/verification export only — never on the frame path.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the writer.
    pub fn export<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "x,y,z")?;
        for point in &self.points {
            writeln!(writer, "{:.6}, {:.6}, {:.6}", point.x, point.y, point.z)?;
        }
        Ok(())
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "point_cloud_tests.rs"]
mod tests;
