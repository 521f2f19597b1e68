use tile_physics::math::{interval_overlap, Circle, Rect, Shape, Vector2};
use approx::assert_relative_eq;
use nalgebra as na;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(3.0, 4.0);
    let v2 = Vector2::new(-1.0, 2.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 2.0);
    assert_eq!(sum.y, 6.0);

    // Subtraction
    let diff = v1 - v2;
    assert_eq!(diff, Vector2::new(4.0, 2.0));

    // Scalar multiplication from either side
    assert_eq!(v1 * 2.0, Vector2::new(6.0, 8.0));
    assert_eq!(2.0 * v1, v1 * 2.0);

    // Dot product
    assert_eq!(v1.dot(&v2), 3.0 * -1.0 + 4.0 * 2.0);

    // Length
    assert_eq!(v1.length(), 5.0);
    assert_eq!(v1.length_squared(), 25.0);

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, Vector2::new(0.6, 0.8));
    assert!(Vector2::zero().normalize().is_zero());

    // Compound assignment
    let mut v = v1;
    v += v2;
    v -= Vector2::new(1.0, 1.0);
    v *= 0.5;
    assert_eq!(v, Vector2::new(0.5, 2.5));
}

#[test]
fn test_vector2_nalgebra_interop() {
    let v = Vector2::new(1.5, -2.0);
    let na_v: na::Vector2<f32> = v.into();
    assert_eq!(na_v, na::Vector2::new(1.5, -2.0));

    let rotated = na::Rotation2::new(std::f32::consts::FRAC_PI_2) * v.to_nalgebra();
    assert_relative_eq!(Vector2::from_nalgebra(&rotated), Vector2::new(2.0, 1.5), epsilon = 1.0e-6);

    let from_array: Vector2 = [7.0, 8.0].into();
    assert_eq!(<[f32; 2]>::from(from_array), [7.0, 8.0]);
}

#[test]
fn test_rect_edges_and_overlap() {
    let floor = Rect::new(0.0, 100.0, 200.0, 20.0);
    assert_eq!(floor.right(), 200.0);
    assert_eq!(floor.bottom(), 120.0);
    assert_eq!(floor.center(), Vector2::new(100.0, 110.0));
    assert_eq!(floor.area(), 4000.0);

    // Sinking 2 units into the floor
    let body = Rect::new(42.0, 86.0, 16.0, 16.0);
    assert!(body.overlaps(&floor));
    assert_eq!(body.overlap_extents(&floor), Some(Vector2::new(16.0, 2.0)));
    assert_eq!(body.overlap_area(&floor), 32.0);

    // Resting exactly on top is not an overlap
    let resting = Rect::new(42.0, 84.0, 16.0, 16.0);
    assert!(!resting.overlaps(&floor));
    assert_eq!(resting.overlap_extents(&floor), None);
    assert_eq!(resting.overlap_area(&floor), 0.0);

    // Corner contact is not an overlap either
    let corner = Rect::new(200.0, 120.0, 4.0, 4.0);
    assert!(!corner.overlaps(&floor));
    assert!(floor.contains_point(corner.position()));
}

#[test]
fn test_interval_overlap() {
    assert_eq!(interval_overlap(0.0, 10.0, 5.0, 20.0), 5.0);
    assert_eq!(interval_overlap(5.0, 20.0, 0.0, 10.0), 5.0);
    assert_eq!(interval_overlap(0.0, 10.0, 2.0, 4.0), 2.0);
    assert!(interval_overlap(0.0, 1.0, 3.0, 4.0) < 0.0);
}

#[test]
fn test_shape_overlaps() {
    let tile = Rect::new(0.0, 0.0, 32.0, 32.0);

    let near = Shape::from(Circle::new(Vector2::new(36.0, 16.0), 5.0));
    let far = Shape::from(Circle::new(Vector2::new(40.0, 40.0), 5.0));
    assert!(near.overlaps_rect(&tile));
    assert!(!far.overlaps_rect(&tile));

    // Circles overlap when their centers are closer than the radius sum
    let a = Circle::new(Vector2::new(0.0, 0.0), 3.0);
    let b = Circle::new(Vector2::new(5.0, 0.0), 3.0);
    assert!(Shape::Circle(a).overlaps(&Shape::Circle(b)));
    assert!(!Shape::Circle(a).overlaps(&Shape::Circle(b.translated(Vector2::new(1.0, 0.0)))));

    let bounds = Shape::from(a).bounds();
    assert_eq!(bounds, Rect::new(-3.0, -3.0, 6.0, 6.0));

    let moved = Shape::from(tile).translated(Vector2::new(10.0, -5.0));
    assert_eq!(moved.bounds(), Rect::new(10.0, -5.0, 32.0, 32.0));
}
