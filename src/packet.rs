//! Raw per-frame input delivered by the host driver.
//!
//! The network protocol carrying these snapshots is out of scope; the host
//! decodes the wire format into [`GameTickPacket`] and hands it to
//! [`Bot::get_output`](crate::Bot::get_output) once per simulation frame.
//! [`FieldInfo`] becomes available once the game is active and is passed to
//! [`Bot::initialize`](crate::Bot::initialize).
use nalgebra::Vector3;

/// Frame-global timing and match-phase flags.
#[derive(Clone, Debug, Default)]
pub struct GameInfo {
    /// Wall-clock seconds since the match started. Monotonically
    /// non-decreasing within a match.
    pub seconds_elapsed: f32,
    /// True while the countdown before a kickoff is running.
    pub is_kickoff_pause: bool,
    /// True while the ball is in play.
    pub is_round_active: bool,
}

/// Raw rigid-body state of a car or the ball.
#[derive(Clone, Debug, Default)]
pub struct Physics {
    /// Position in field coordinates.
    pub location: Vector3<f32>,
    /// Linear velocity.
    pub velocity: Vector3<f32>,
    /// Angular velocity.
    pub angular_velocity: Vector3<f32>,
    /// Euler rotation (pitch, yaw, roll).
    pub rotation: Vector3<f32>,
}

/// Raw per-car state.
#[derive(Clone, Debug, Default)]
pub struct PlayerInfo {
    /// Rigid-body state.
    pub physics: Physics,
    /// Team the car belongs to (see [`crate::common_values`]).
    pub team: u8,
    /// Boost amount in `[0, 100]`.
    pub boost: f32,
    /// True while the car is demolished and awaiting respawn.
    pub is_demolished: bool,
    /// True while any wheel touches a surface.
    pub has_wheel_contact: bool,
    /// True once the car has used its first jump.
    pub jumped: bool,
    /// True once the car has used its flip or double jump.
    pub double_jumped: bool,
    /// True if this car was the last to touch the ball on this frame.
    pub ball_touched: bool,
}

/// Raw ball state.
#[derive(Clone, Debug, Default)]
pub struct BallInfo {
    /// Rigid-body state.
    pub physics: Physics,
}

/// Pickup state of one boost pad.
#[derive(Clone, Debug, Default)]
pub struct PadInfo {
    /// True when the pad can be picked up.
    pub is_active: bool,
}

/// Per-team match state.
#[derive(Clone, Debug, Default)]
pub struct TeamInfo {
    /// Team id.
    pub team_index: u8,
    /// Goals scored.
    pub score: u32,
}

/// One immutable world snapshot, delivered once per simulation frame.
#[derive(Clone, Debug, Default)]
pub struct GameTickPacket {
    /// Timing and match-phase flags.
    pub game_info: GameInfo,
    /// Ball state.
    pub ball: BallInfo,
    /// All observed cars, indexed as spawned by the host.
    pub players: Vec<PlayerInfo>,
    /// Pickup state of each boost pad, in field-info order.
    pub boost_pads: Vec<PadInfo>,
    /// Match score per team.
    pub teams: Vec<TeamInfo>,
}

/// Static description of one boost pad.
#[derive(Clone, Debug, Default)]
pub struct BoostPad {
    /// Position of the pad.
    pub location: Vector3<f32>,
    /// True for the six 100-boost pads, false for the small ones.
    pub is_full_boost: bool,
}

/// Static field description, available once the game is active.
#[derive(Clone, Debug, Default)]
pub struct FieldInfo {
    /// All boost pads on the field.
    pub boost_pads: Vec<BoostPad>,
}
