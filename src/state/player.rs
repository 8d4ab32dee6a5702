//! Per-car decoded state.
use super::PhysicsObject;

/// Decoded state of one car.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerData {
    /// Packet index of the car, stable within a match.
    pub car_id: usize,
    /// Team the car belongs to (see [`crate::common_values`]).
    pub team_num: u8,
    /// Rigid-body state.
    pub car_data: PhysicsObject,
    /// Boost amount in `[0, 100]`.
    pub boost_amount: f32,
    /// True while any wheel touches a surface.
    pub on_ground: bool,
    /// True while the flip or double jump is still available.
    pub has_flip: bool,
    /// True while demolished and awaiting respawn.
    pub is_demoed: bool,
    /// True if this car touched the ball on this frame.
    pub ball_touched: bool,
}
