use glam::{Mat4, Vec3};
use super::*;

const EPSILON: f32 = 1e-5;

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_camera_defaults() {
    let camera = FlyCamera::new();
    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.yaw(), 0.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_eq!(camera.speed(), DEFAULT_SPEED);
}

#[test]
fn test_initial_basis_faces_plus_x() {
    let camera = FlyCamera::new();
    assert_vec3_near(camera.forward(), Vec3::X);
    assert_vec3_near(camera.right(), Vec3::Z);
    assert_vec3_near(camera.up(), Vec3::Y);
}

// ============================================================================
// Basis invariants
// ============================================================================

#[test]
fn test_basis_stays_orthonormal_under_look_sequences() {
    let mut camera = FlyCamera::new();
    let offsets = [
        (120.0, -45.0),
        (-300.0, 200.0),
        (17.5, 3.25),
        (-1.0, -1000.0),
        (5000.0, 999.0),
    ];
    for (dx, dy) in offsets {
        camera.look(dx, dy);
        assert!((camera.forward().length() - 1.0).abs() < EPSILON);
        assert!((camera.right().length() - 1.0).abs() < EPSILON);
        assert!((camera.up().length() - 1.0).abs() < EPSILON);
        assert!(camera.forward().dot(camera.right()).abs() < EPSILON);
        assert!(camera.forward().dot(camera.up()).abs() < EPSILON);
        assert!(camera.right().dot(camera.up()).abs() < EPSILON);
        // Right-handed: forward x up == -right is wrong; right x forward == up
        assert_vec3_near(camera.right().cross(camera.forward()), camera.up());
    }
}

#[test]
fn test_look_yaw_quarter_turn() {
    let mut camera = FlyCamera::new();
    // sensitivity 0.1 deg/unit -> 900 units = 90 degrees
    camera.look(90.0 / DEFAULT_SENSITIVITY, 0.0);
    assert!((camera.yaw() - 90.0).abs() < 1e-3);
    assert_vec3_near(camera.forward(), Vec3::Z);
}

#[test]
fn test_look_inverts_delta_y() {
    let mut camera = FlyCamera::new();
    // Pointer moving up reports a negative delta_y -> pitch increases
    camera.look(0.0, -10.0 / DEFAULT_SENSITIVITY);
    assert!((camera.pitch() - 10.0).abs() < 1e-3);
    assert!(camera.forward().y > 0.0);
}

// ============================================================================
// Pitch clamp
// ============================================================================

#[test]
fn test_pitch_clamped_looking_down() {
    let mut camera = FlyCamera::new();
    for _ in 0..100 {
        camera.look(0.0, 10_000.0);
    }
    assert_eq!(camera.pitch(), -PITCH_LIMIT_DEGREES);
    // Basis still finite and unit-length at the clamp
    assert!((camera.forward().length() - 1.0).abs() < EPSILON);
}

#[test]
fn test_pitch_clamped_looking_up() {
    let mut camera = FlyCamera::new();
    for _ in 0..100 {
        camera.look(0.0, -10_000.0);
    }
    assert_eq!(camera.pitch(), PITCH_LIMIT_DEGREES);
    assert!((camera.up().length() - 1.0).abs() < EPSILON);
}

// ============================================================================
// Translation
// ============================================================================

#[test]
fn test_translate_forward_scales_with_delta_time() {
    let mut camera = FlyCamera::new();
    camera.translate(0.5, MoveDirection::Forward);
    assert_vec3_near(camera.position(), Vec3::X * (DEFAULT_SPEED * 0.5));
}

#[test]
fn test_translate_backward_is_opposite_of_forward() {
    let mut camera = FlyCamera::new();
    camera.translate(0.1, MoveDirection::Forward);
    camera.translate(0.1, MoveDirection::Backward);
    assert_vec3_near(camera.position(), Vec3::ZERO);
}

#[test]
fn test_translate_strafe_follows_forward_cross_up() {
    let mut camera = FlyCamera::new();
    // Facing +X with up +Y: forward x up = +Z
    camera.translate(1.0, MoveDirection::Right);
    assert_vec3_near(camera.position(), Vec3::Z * DEFAULT_SPEED);

    camera.translate(1.0, MoveDirection::Left);
    assert_vec3_near(camera.position(), Vec3::ZERO);
}

#[test]
fn test_translate_does_not_change_orientation() {
    let mut camera = FlyCamera::new();
    camera.look(333.0, -127.0);
    let forward = camera.forward();
    let yaw = camera.yaw();
    let pitch = camera.pitch();

    camera.translate(0.25, MoveDirection::Forward);
    camera.translate(0.25, MoveDirection::Left);

    assert_eq!(camera.yaw(), yaw);
    assert_eq!(camera.pitch(), pitch);
    assert_vec3_near(camera.forward(), forward);
}

// ============================================================================
// Derived matrices
// ============================================================================

#[test]
fn test_view_matrix_is_look_at_along_forward() {
    let mut camera = FlyCamera::new();
    camera.look(450.0, -200.0);
    camera.translate(0.3, MoveDirection::Forward);

    let expected = Mat4::look_at_rh(
        camera.position(),
        camera.position() + camera.forward(),
        camera.up(),
    );
    assert_eq!(camera.view_matrix(), expected);
}

#[test]
fn test_projection_matrix_varies_with_aspect() {
    let camera = FlyCamera::new();
    let wide = camera.projection_matrix(16.0 / 9.0);
    let square = camera.projection_matrix(1.0);
    assert_ne!(wide, square);
    // x-scale shrinks as the viewport widens
    assert!(wide.col(0).x < square.col(0).x);
}
