//! Controller output and the action-vector mapping.
use crate::base::Action;

/// One frame of controller input, as handed back to the host driver.
///
/// A plain value snapshot: the driver receives the same value on every
/// invocation until a new action is computed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerState {
    /// Forward/backward input in `[-1, 1]`.
    pub throttle: f32,
    /// Steering input in `[-1, 1]`.
    pub steer: f32,
    /// Airborne pitch input in `[-1, 1]`.
    pub pitch: f32,
    /// Airborne yaw input in `[-1, 1]`.
    pub yaw: f32,
    /// Airborne roll input in `[-1, 1]`.
    pub roll: f32,
    /// Jump button.
    pub jump: bool,
    /// Boost button.
    pub boost: bool,
    /// Handbrake/air-roll button.
    pub handbrake: bool,
}

impl ControllerState {
    /// Overwrites this state from an action vector.
    ///
    /// Elements 0-4 pass through unclamped; the policy is responsible for
    /// producing values in range. Elements 5-7 are booleanized with a strict
    /// `> 0` threshold, so an exact 0 releases the button.
    pub fn apply_action(&mut self, action: &Action) {
        self.throttle = action[0];
        self.steer = action[1];
        self.pitch = action[2];
        self.yaw = action[3];
        self.roll = action[4];
        self.jump = action[5] > 0.0;
        self.boost = action[6] > 0.0;
        self.handbrake = action[7] > 0.0;
    }
}
