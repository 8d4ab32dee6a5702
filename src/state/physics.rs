//! Rigid-body state of a car or the ball.
use nalgebra::Vector3;

/// Position, velocities and orientation of one rigid body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicsObject {
    /// Position in field coordinates.
    pub position: Vector3<f32>,
    /// Linear velocity.
    pub linear_velocity: Vector3<f32>,
    /// Angular velocity.
    pub angular_velocity: Vector3<f32>,
    /// Euler rotation (pitch, yaw, roll).
    pub euler_angles: Vector3<f32>,
}

impl From<&crate::packet::Physics> for PhysicsObject {
    fn from(raw: &crate::packet::Physics) -> Self {
        Self {
            position: raw.location,
            linear_velocity: raw.velocity,
            angular_velocity: raw.angular_velocity,
            euler_angles: raw.rotation,
        }
    }
}
