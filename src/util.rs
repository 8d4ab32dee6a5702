//! Small numeric helpers.
#![allow(clippy::float_cmp)]
use nalgebra::Vector3;

/// Scalar projection of `v` onto `onto`.
///
/// Returns 0 when `onto` has zero length.
pub fn scalar_projection(v: &Vector3<f32>, onto: &Vector3<f32>) -> f32 {
    let norm = onto.norm();
    if norm == 0.0 {
        return 0.0;
    }
    v.dot(onto) / norm
}
