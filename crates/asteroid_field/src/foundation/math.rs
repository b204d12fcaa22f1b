//! Math types for field placement
//!
//! Field coordinates are kept in double precision so the written document
//! carries the full sampled value.

pub use nalgebra::{Point2, Vector3};

/// 2D point in the x/y placement plane
pub type Point2d = Point2<f64>;

/// 3D vector for positions and scale factors
pub type Vec3d = Vector3<f64>;

/// Combine a placement point and a depth into a world position
pub fn position_from(point: &Point2d, z: f64) -> Vec3d {
    Vec3d::new(point.x, point.y, z)
}

/// Uniform scale vector with the same factor on every axis
pub fn uniform_scale(factor: f64) -> Vec3d {
    Vec3d::repeat(factor)
}

/// Flatten a vector into the `[x, y, z]` layout used by scene files
pub fn to_array(v: &Vec3d) -> [f64; 3] {
    [v.x, v.y, v.z]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_from_point() {
        let position = position_from(&Point2d::new(1.5, -2.0), -600.0);
        assert_relative_eq!(position, Vec3d::new(1.5, -2.0, -600.0));
    }

    #[test]
    fn test_uniform_scale_is_isotropic() {
        let scale = to_array(&uniform_scale(0.75));
        assert_eq!(scale, [0.75, 0.75, 0.75]);
    }
}
