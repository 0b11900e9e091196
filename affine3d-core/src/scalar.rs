//! Scalar constants and angle conversion

/// Pi, single precision
pub const PI: f32 = std::f32::consts::PI;

/// Smallest positive normal `f32`, added to lengths before taking a reciprocal
pub const MIN_FLOAT: f32 = f32::MIN_POSITIVE;

/// Extents at or below this are treated as zero
pub const REAL_ZERO: f32 = f32::EPSILON;

/// Amount a degenerate bounding box is grown by on each side
pub const DEGENERATE_PAD: f32 = 0.0001;

/// Convert an angle in degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Convert an angle in radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_turn() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-6);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_angle() {
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-6);
        assert!((radians_to_degrees(PI / 4.0) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_min_float_is_positive() {
        assert!(MIN_FLOAT > 0.0);
        assert!(1.0 / MIN_FLOAT > 0.0);
        assert!((1.0 / MIN_FLOAT).is_finite());
    }
}
