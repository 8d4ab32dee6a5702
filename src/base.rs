//! Core traits and types.
mod obs;
mod policy;
mod reward;
pub use obs::ObsBuilder;
pub use policy::Policy;
pub use reward::RewardFunction;

/// Number of elements in an action vector.
pub const ACTION_LEN: usize = 8;

/// An action vector produced by a policy.
///
/// Elements 0-4 are the continuous controls (throttle, steer, pitch, yaw,
/// roll); elements 5-7 are booleanized with a strict `> 0` threshold (jump,
/// boost, handbrake). See [`ControllerState::apply_action`].
///
/// [`ControllerState::apply_action`]: crate::controls::ControllerState::apply_action
pub type Action = ndarray::Array1<f32>;

/// Returns the all-zero action.
pub fn zero_action() -> Action {
    ndarray::Array1::zeros(ACTION_LEN)
}
