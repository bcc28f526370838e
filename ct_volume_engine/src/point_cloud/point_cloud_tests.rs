use glam::Vec3;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_is_empty_with_initial_capacity() {
    let cloud = PointCloud::new();
    assert!(cloud.is_empty());
    assert_eq!(cloud.len(), 0);
    assert_eq!(cloud.capacity(), INITIAL_CAPACITY);
}

#[test]
fn test_default_is_empty() {
    let cloud = PointCloud::default();
    assert!(cloud.is_empty());
    assert_eq!(cloud.capacity(), INITIAL_CAPACITY);
}

// ============================================================================
// Growth law
// ============================================================================

#[test]
fn test_five_appends_trigger_exactly_one_resize() {
    let mut cloud = PointCloud::new();
    for i in 0..4 {
        cloud.append(Vec3::splat(i as f32));
        assert_eq!(cloud.capacity(), 4);
    }
    // Fifth append doubles 4 -> 8
    cloud.append(Vec3::splat(4.0));
    assert_eq!(cloud.len(), 5);
    assert_eq!(cloud.capacity(), 8);
}

#[test]
fn test_capacity_is_smallest_doubling_above_length() {
    let mut cloud = PointCloud::new();
    for i in 0..100 {
        cloud.append(Vec3::new(i as f32, 0.0, 0.0));
        assert_eq!(cloud.len(), i + 1);

        // Smallest 4 * 2^k >= len
        let mut expected = INITIAL_CAPACITY;
        while expected < cloud.len() {
            expected *= 2;
        }
        assert_eq!(cloud.capacity(), expected, "after {} appends", i + 1);
    }
}

// ============================================================================
// Order preservation
// ============================================================================

#[test]
fn test_insertion_order_is_preserved() {
    let mut cloud = PointCloud::new();
    for i in 0..50 {
        cloud.append(Vec3::new(i as f32, (i * 2) as f32, (i * 3) as f32));
    }
    for i in 0..50 {
        let point = cloud.get(i).unwrap();
        assert_eq!(point, Vec3::new(i as f32, (i * 2) as f32, (i * 3) as f32));
    }
    assert_eq!(cloud.get(50), None);
}

#[test]
fn test_points_slice_matches_appends_across_growth() {
    let mut cloud = PointCloud::new();
    cloud.append(Vec3::new(1.0, 2.0, 3.0));
    cloud.append(Vec3::new(4.0, 5.0, 6.0));

    // Grow past the initial capacity, then re-fetch the slice
    for i in 0..10 {
        cloud.append(Vec3::splat(i as f32));
    }
    let points = cloud.points();
    assert_eq!(points.len(), 12);
    assert_eq!(points[0], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(points[1], Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(points[11], Vec3::splat(9.0));
}

// ============================================================================
// Byte view
// ============================================================================

#[test]
fn test_as_bytes_length() {
    let mut cloud = PointCloud::new();
    cloud.append(Vec3::ZERO);
    cloud.append(Vec3::ONE);
    assert_eq!(cloud.as_bytes().len(), 2 * std::mem::size_of::<Vec3>());
}

// ============================================================================
// CSV export
// ============================================================================

#[test]
fn test_export_writes_header_and_rows_in_order() {
    let mut cloud = PointCloud::new();
    cloud.append(Vec3::new(1.0, 0.0, 1.0));
    cloud.append(Vec3::new(0.0, 1.0, 2.0));

    let mut out: Vec<u8> = Vec::new();
    cloud.export(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "x,y,z");
    assert_eq!(lines[1], "1.000000, 0.000000, 1.000000");
    assert_eq!(lines[2], "0.000000, 1.000000, 2.000000");
}

#[test]
fn test_export_empty_cloud_is_header_only() {
    let cloud = PointCloud::new();
    let mut out: Vec<u8> = Vec::new();
    cloud.export(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x,y,z\n");
}
