// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar ring analysis used by polygon validation.
//!
//! Normal estimation (Newell's method), projection onto the best-fit plane,
//! and the pairwise edge test that decides geometric simplicity.

use nalgebra::{Point2, Point3, Vector3};

/// Geometric tolerance shared by ring checks
pub(crate) const EPS: f64 = 1e-9;

/// Newell normal of a ring.
///
/// Returns the unit normal and the magnitude of the raw Newell vector
/// (twice the enclosed area). `None` when the ring has near-zero area,
/// which covers collinear and otherwise degenerate point sets.
pub(crate) fn ring_normal(points: &[Point3<f64>]) -> Option<(Vector3<f64>, f64)> {
    if points.len() < 3 {
        return None;
    }

    let mut normal = Vector3::<f64>::zeros();
    let n = points.len();
    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let len = normal.norm();
    if len > EPS {
        Some((normal / len, len))
    } else {
        None
    }
}

/// Project a ring onto the plane defined by its normal.
///
/// The first point is the plane origin; the basis is built from the axis
/// least parallel to the normal for a stable cross product.
pub(crate) fn project_to_plane(
    points: &[Point3<f64>],
    normal: &Vector3<f64>,
) -> Vec<Point2<f64>> {
    if points.is_empty() {
        return Vec::new();
    }

    let origin = points[0];

    let abs_x = normal.x.abs();
    let abs_y = normal.y.abs();
    let abs_z = normal.z.abs();

    let reference = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::new(1.0, 0.0, 0.0)
    } else if abs_y <= abs_z {
        Vector3::new(0.0, 1.0, 0.0)
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    };

    let u_axis = normal.cross(&reference).normalize();
    let v_axis = normal.cross(&u_axis).normalize();

    points
        .iter()
        .map(|p| {
            let v = p - origin;
            Point2::new(v.dot(&u_axis), v.dot(&v_axis))
        })
        .collect()
}

/// Check whether any two non-adjacent edges of a closed ring intersect.
///
/// Adjacent edges share a vertex and are skipped; everything else touching
/// (crossing, T-contact, collinear overlap) makes the ring non-simple.
pub(crate) fn is_self_intersecting(ring: &[Point2<f64>]) -> bool {
    let n = ring.len();
    if n < 4 {
        // A triangle with distinct vertices cannot self-intersect
        return false;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            // Edges i and j are (ring[i], ring[i+1]) and (ring[j], ring[j+1])
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }

            let a = ring[i];
            let b = ring[(i + 1) % n];
            let c = ring[j];
            let d = ring[(j + 1) % n];

            if segments_intersect(a, b, c, d) {
                return true;
            }
        }
    }

    false
}

/// Signed area of the triangle (a, b, c); sign gives the turn direction
#[inline]
fn orientation(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn sign(value: f64) -> i8 {
    if value > EPS {
        1
    } else if value < -EPS {
        -1
    } else {
        0
    }
}

/// Point p lies within the bounding box of segment (a, b)
#[inline]
fn within_bounds(a: Point2<f64>, b: Point2<f64>, p: Point2<f64>) -> bool {
    p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}

/// Segment intersection test covering proper crossings, endpoint contacts,
/// and collinear overlap.
fn segments_intersect(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
) -> bool {
    let o1 = sign(orientation(a, b, c));
    let o2 = sign(orientation(a, b, d));
    let o3 = sign(orientation(c, d, a));
    let o4 = sign(orientation(c, d, b));

    if o1 != o2 && o3 != o4 && o1 != 0 && o2 != 0 && o3 != 0 && o4 != 0 {
        return true; // Proper crossing
    }

    // Collinear or touching cases
    (o1 == 0 && within_bounds(a, b, c))
        || (o2 == 0 && within_bounds(a, b, d))
        || (o3 == 0 && within_bounds(c, d, a))
        || (o4 == 0 && within_bounds(c, d, b))
}
