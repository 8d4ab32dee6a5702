//! Field geometry and speed constants of the game.
//!
//! Coordinates follow the standard convention: x spans the side walls,
//! y spans the goal-to-goal axis (blue negative, orange positive),
//! z is up. Distances are in unreal units.

/// Team id of the blue team.
pub const BLUE_TEAM: u8 = 0;
/// Team id of the orange team.
pub const ORANGE_TEAM: u8 = 1;

/// Half-length of the field along the goal axis.
pub const BACK_WALL_Y: f32 = 5120.0;
/// Half-width of the field.
pub const SIDE_WALL_X: f32 = 4096.0;
/// Ceiling height.
pub const CEILING_Z: f32 = 2044.0;

/// Center of the blue goal, on the goal line.
pub const BLUE_GOAL_CENTER: [f32; 3] = [0.0, -BACK_WALL_Y, 0.0];
/// Center of the orange goal, on the goal line.
pub const ORANGE_GOAL_CENTER: [f32; 3] = [0.0, BACK_WALL_Y, 0.0];
/// A point behind the blue goal, used as an aiming objective.
pub const BLUE_GOAL_BACK: [f32; 3] = [0.0, -6000.0, 0.0];
/// A point behind the orange goal, used as an aiming objective.
pub const ORANGE_GOAL_BACK: [f32; 3] = [0.0, 6000.0, 0.0];

/// Maximum car speed.
pub const CAR_MAX_SPEED: f32 = 2300.0;
/// Maximum ball speed.
pub const BALL_MAX_SPEED: f32 = 6000.0;
/// Ball radius.
pub const BALL_RADIUS: f32 = 92.75;

/// Simulation rate of the game engine in ticks per second.
pub const TICKS_PER_SECOND: f32 = 120.0;

/// Respawn delay of a full boost pad in seconds.
pub const BIG_PAD_RECHARGE_SECONDS: f32 = 10.0;
/// Respawn delay of a small boost pad in seconds.
pub const SMALL_PAD_RECHARGE_SECONDS: f32 = 4.0;
