#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use segsect::{intersect, try_intersect, IntersectionError, SegmentRelation, Segment3D, SegsectError, Vector3D};

fn v(x: f64, y: f64, z: f64) -> Vector3D {
    Vector3D::new(x, y, z)
}

fn seg(a: Vector3D, b: Vector3D) -> Segment3D {
    Segment3D::new(a, b)
}

fn samples() -> Vec<Vector3D> {
    vec![
        v(1.0, 0.0, 0.0),
        v(0.0, 1.0, 0.0),
        v(1.0, 2.0, 3.0),
        v(-4.5, 0.25, 7.0),
        v(1e3, -2e2, 3.5),
        Vector3D::ZERO,
    ]
}

#[test]
fn cross_product_anticommutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross_product(&b), b.cross_product(&a).scale(-1.0));
        }
    }
}

#[test]
fn cross_product_is_orthogonal() {
    for a in samples() {
        for b in samples() {
            let n = a.cross_product(&b);
            let scale = a.length() * b.length() * n.length();
            assert_abs_diff_eq!(a.dot_product(&n), 0.0, epsilon = 1e-12 * scale.max(1.0));
            assert_abs_diff_eq!(b.dot_product(&n), 0.0, epsilon = 1e-12 * scale.max(1.0));
        }
    }
}

#[test]
fn vector_products_match_reference_values() {
    assert_eq!(v(1.0, 0.0, 0.0).cross_product(&v(0.0, 1.0, 0.0)), v(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(v(1.0, 2.0, 3.0).dot_product(&v(4.0, 5.0, 6.0)), 32.0, epsilon = 1e-10);
}

#[test]
fn basic_intersection() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0));
    let b = seg(v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0));
    assert_eq!(try_intersect(&a, &b).unwrap(), v(0.5, 0.5, 0.0));
}

#[test]
fn offset_parallel_segments_do_not_intersect() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
    let b = seg(v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0));
    assert!(matches!(
        try_intersect(&a, &b),
        Err(SegsectError::Intersection(IntersectionError::Parallel))
    ));
}

#[test]
fn same_segments() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
    let b = seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
    let err = try_intersect(&a, &b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "segments are the same and the intersection is an interval with start {0, 0, 0} and end {1, 0, 0}"
    );
}

#[test]
fn same_line_without_intersection() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
    let b = seg(v(2.0, 2.0, 2.0), v(3.0, 3.0, 3.0));
    let err = try_intersect(&a, &b).unwrap_err();
    assert_eq!(err.to_string(), "segments are on the same line and do not intersect");
}

#[test]
fn same_line_with_intersection() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
    let b = seg(v(0.5, 0.5, 0.5), v(3.0, 3.0, 3.0));
    assert_eq!(
        intersect(&a, &b),
        SegmentRelation::CollinearOverlap {
            start: v(0.5, 0.5, 0.5),
            end: v(1.0, 1.0, 1.0),
        }
    );
}

#[test]
fn no_intersection() {
    let a = seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
    let b = seg(v(227.0, 228.0, 737.0), v(1337.0, 911.0, 420.0));
    let err = try_intersect(&a, &b).unwrap_err();
    assert_eq!(err.to_string(), "segments do not intersect");
}

#[test]
fn classification_kind_is_order_independent() {
    let cases = [
        (seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0)), seg(v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0))),
        (seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)), seg(v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0))),
        (seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)), seg(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0))),
        (seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0)), seg(v(2.0, 2.0, 2.0), v(3.0, 3.0, 3.0))),
        (seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0)), seg(v(0.5, 0.5, 0.5), v(3.0, 3.0, 3.0))),
        (seg(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0)), seg(v(227.0, 228.0, 737.0), v(1337.0, 911.0, 420.0))),
    ];
    for (a, b) in &cases {
        assert_eq!(intersect(a, b), intersect(b, a), "{a} vs {b}");
    }
}

#[test]
fn intersection_point_lies_on_both_segments() {
    let a = seg(v(-1.0, 2.0, 0.5), v(3.0, -2.0, 0.5));
    let b = seg(v(0.0, -3.0, 0.5), v(2.0, 3.0, 0.5));
    let p = intersect(&a, &b).point().unwrap();

    let on_a = (p - a.start()).cross_product(&a.directional_vector());
    let on_b = (p - b.start()).cross_product(&b.directional_vector());
    assert_abs_diff_eq!(on_a.length(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(on_b.length(), 0.0, epsilon = 1e-9);
}
