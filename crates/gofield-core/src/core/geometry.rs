use nalgebra::Point3;

/// Euclidean distance between two points in Angstroms.
#[inline]
pub fn distance(lhs: &Point3<f64>, rhs: &Point3<f64>) -> f64 {
    (lhs - rhs).norm()
}

/// Squared Euclidean distance. Cheaper than [`distance`] when only
/// comparisons against a squared threshold are needed.
#[inline]
pub fn distance_sq(lhs: &Point3<f64>, rhs: &Point3<f64>) -> f64 {
    (lhs - rhs).norm_squared()
}

/// Bond angle at `p2` formed by the points `p1-p2-p3`, in radians.
///
/// Degenerate input (coincident points) yields NaN; structures are expected
/// to be validated before geometry is computed.
pub fn angle(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> f64 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0).acos()
}

/// Signed dihedral angle of the four points `p1-p2-p3-p4`, in radians,
/// in the range `(-pi, pi]`.
pub fn dihedral(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>, p4: &Point3<f64>) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    let m = n1.cross(&b2.normalize());

    m.dot(&n2).atan2(n1.dot(&n2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn distance_of_unit_offset_is_one() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        assert!(f64_approx_equal(distance(&p1, &p2), 1.0));
    }

    #[test]
    fn distance_sq_avoids_square_root() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 6.0, 3.0);
        assert!(f64_approx_equal(distance_sq(&p1, &p2), 25.0));
        assert!(f64_approx_equal(distance(&p1, &p2), 5.0));
    }

    #[test]
    fn angle_of_right_angle_geometry_is_half_pi() {
        let p1 = Point3::new(1.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 0.0, 0.0);
        let p3 = Point3::new(0.0, 1.0, 0.0);
        assert!(f64_approx_equal(angle(&p1, &p2, &p3), FRAC_PI_2));
    }

    #[test]
    fn angle_of_collinear_points_is_pi() {
        let p1 = Point3::new(-1.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 0.0, 0.0);
        let p3 = Point3::new(2.0, 0.0, 0.0);
        assert!(f64_approx_equal(angle(&p1, &p2, &p3), PI));
    }

    #[test]
    fn dihedral_of_planar_cis_geometry_is_zero() {
        let p1 = Point3::new(1.0, 1.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        let p3 = Point3::new(2.0, 0.0, 0.0);
        let p4 = Point3::new(2.0, 1.0, 0.0);
        assert!(f64_approx_equal(dihedral(&p1, &p2, &p3, &p4), 0.0));
    }

    #[test]
    fn dihedral_of_planar_trans_geometry_is_pi() {
        let p1 = Point3::new(1.0, 1.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        let p3 = Point3::new(2.0, 0.0, 0.0);
        let p4 = Point3::new(2.0, -1.0, 0.0);
        assert!(f64_approx_equal(dihedral(&p1, &p2, &p3, &p4).abs(), PI));
    }

    #[test]
    fn dihedral_sign_flips_with_mirror_geometry() {
        let p1 = Point3::new(1.0, 1.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        let p3 = Point3::new(2.0, 0.0, 0.0);
        let p4 = Point3::new(2.0, 0.5, 0.5);
        let d1 = dihedral(&p1, &p2, &p3, &p4);
        let p4_mirror = Point3::new(2.0, 0.5, -0.5);
        let d2 = dihedral(&p1, &p2, &p3, &p4_mirror);
        assert!(f64_approx_equal(d1, -d2));
        assert!(d1 != 0.0);
    }

    #[test]
    fn dihedral_of_degenerate_geometry_is_nan() {
        let p = Point3::new(0.0, 0.0, 0.0);
        assert!(dihedral(&p, &p, &p, &p).is_nan());
    }
}
