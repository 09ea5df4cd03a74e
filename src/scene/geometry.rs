//! Geometry elements shared by all rigid primitives.

use cgmath::Vector3;
use std::f32::consts::PI;

/// One element of a primitive's geometry block.
///
/// Spatial points are rotated and translated by a pose. Topology rows
/// (e.g. the homogeneous row of a triangulated coordinate block) carry
/// non-spatial row data and pass through every transform unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryElement {
    /// A point in the owning body's frame
    Point(Vector3<f32>),
    /// Non-spatial row data carried alongside the points
    Topology(Vec<f32>),
}

impl GeometryElement {
    /// Shorthand for a spatial point element
    pub fn point(x: f32, y: f32, z: f32) -> Self {
        Self::Point(Vector3::new(x, y, z))
    }

    /// The spatial point, if this element is one
    pub fn as_point(&self) -> Option<Vector3<f32>> {
        match self {
            Self::Point(p) => Some(*p),
            Self::Topology(_) => None,
        }
    }
}

/// Generate the outline of a disk of `radius` lying in the local z = 0
/// plane, centered at `center`.
///
/// # Arguments
/// * `center` - Center of the disk in the local frame
/// * `radius` - Disk radius
/// * `segments` - Number of outline segments (clamped to at least 3)
pub fn disk_outline(center: Vector3<f32>, radius: f32, segments: u32) -> Vec<Vector3<f32>> {
    let segs = segments.max(3);

    (0..segs)
        .map(|i| {
            let angle = i as f32 * 2.0 * PI / segs as f32;
            center + Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn disk_outline_stays_in_plane_at_radius() {
        let center = Vector3::new(1.0, 0.0, 0.0);
        let outline = disk_outline(center, 0.5, 16);

        assert_eq!(outline.len(), 16);
        for p in outline {
            assert_eq!(p.z, 0.0);
            assert!(((p - center).magnitude() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn disk_outline_clamps_segment_count() {
        assert_eq!(disk_outline(Vector3::new(0.0, 0.0, 0.0), 1.0, 0).len(), 3);
    }
}
